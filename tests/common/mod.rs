//! Shared fixture: eight real cards spanning every field kind.

#![allow(dead_code)]

use cardbase::CardRecord;

#[allow(clippy::too_many_arguments)]
fn card(
    name: &str,
    set_code: &str,
    number: &str,
    mana_cost: &str,
    cmc: i64,
    card_type: &str,
    rarity: &str,
    multiverse_id: i64,
    artist: &str,
) -> CardRecord {
    let mut card = CardRecord::new(set_code, number)
        .with_name(name)
        .with_mana_cost(mana_cost)
        .with_cmc(cmc)
        .with_type(card_type)
        .with_rarity(rarity)
        .with_artist(artist);
    card.layout = Some("normal".to_string());
    card.multiverse_id = Some(multiverse_id);
    card.image_name = Some(name.to_lowercase());
    card
}

/// Fixture cards in their canonical input order.
pub fn test_cards() -> Vec<CardRecord> {
    let mut callow = card(
        "Callow Jushi",
        "BOK",
        "31a",
        "{1}{U}{U}",
        3,
        "Creature — Human Wizard",
        "Uncommon",
        74489,
        "Tsutomu Kawade",
    )
    .with_stats("2", "2");
    callow.layout = Some("flip".to_string());

    let mut coerced = card(
        "Coerced Confession",
        "GTC",
        "217",
        "{4}{U/B}",
        5,
        "Sorcery",
        "Uncommon",
        366408,
        "Mathias Kollros",
    );
    coerced.watermark = Some("Dimir".to_string());

    let hydra = card(
        "Khalni Hydra",
        "ROE",
        "192",
        "{G}{G}{G}{G}{G}{G}{G}{G}",
        8,
        "Creature — Hydra",
        "Mythic Rare",
        193551,
        "Todd Lockwood",
    )
    .with_stats("8", "8");

    let nightmare = card(
        "Nightmare",
        "M15",
        "276",
        "{5}{B}",
        6,
        "Creature — Nightmare Horse",
        "Rare",
        383168,
        "Vance Kovacs",
    )
    .with_stats("*", "*");

    let shivan = card(
        "Shivan Dragon",
        "M15",
        "281",
        "{4}{R}{R}",
        6,
        "Creature — Dragon",
        "Rare",
        383172,
        "Donato Giancola",
    )
    .with_stats("5", "5");

    let shoal = card(
        "Disrupting Shoal",
        "BOK",
        "33",
        "{X}{U}{U}",
        2,
        "Instant — Arcane",
        "Rare",
        74128,
        "Scott M. Fischer",
    );

    let sorin = card(
        "Sorin Markov",
        "M12",
        "109",
        "{3}{B}{B}{B}",
        6,
        "Planeswalker — Sorin",
        "Mythic Rare",
        238330,
        "Michael Komarck",
    )
    .with_loyalty(4);

    let construct = card(
        "Ugin's Construct",
        "FRF",
        "164",
        "{4}",
        4,
        "Artifact Creature — Construct",
        "Uncommon",
        391949,
        "Peter Mohrbacher",
    )
    .with_stats("4", "5");

    vec![callow, coerced, hydra, nightmare, shivan, shoal, sorin, construct]
}

/// Find a fixture card by name.
pub fn named(name: &str) -> CardRecord {
    test_cards()
        .into_iter()
        .find(|card| card.name.as_deref() == Some(name))
        .unwrap_or_else(|| panic!("no fixture card named {name}"))
}

/// Names of `cards`, in order.
pub fn names(cards: &[CardRecord]) -> Vec<&str> {
    cards.iter().filter_map(|card| card.name.as_deref()).collect()
}
