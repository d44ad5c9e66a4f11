//! Deck and statistics tests.
//!
//! These tests verify decks built on top of a collection:
//! - Resolving deck entries against collection payloads
//! - Reporting cards the collection lacks
//! - Type counts, shares and mana curves

mod common;

use cardbase::{CardContainer, CardKey, Deck, StandaloneContainer, Statistics};
use common::{named, test_cards};

fn collection() -> StandaloneContainer {
    let mut collection = StandaloneContainer::new();
    for card in test_cards() {
        collection.add_card(&card, 1).unwrap();
    }
    collection
}

fn creature_deck() -> Deck {
    let mut deck = Deck::new("Creatures");
    deck.add_card(&named("Shivan Dragon"), 2).unwrap();
    deck.add_card(&named("Nightmare"), 2).unwrap();
    deck.add_card(&named("Callow Jushi"), 4).unwrap();
    deck.add_card(&named("Disrupting Shoal"), 2).unwrap();
    deck
}

/// Test a deck resolves to full records.
#[test]
fn test_resolve_deck() {
    let collection = collection();
    let deck = creature_deck();

    let mut resolved: Vec<(&str, i64)> = deck
        .resolve(&collection)
        .filter_map(|(card, count)| Some((card.name.as_deref()?, count)))
        .collect();
    resolved.sort();

    assert_eq!(
        resolved,
        vec![
            ("Callow Jushi", 4),
            ("Disrupting Shoal", 2),
            ("Nightmare", 2),
            ("Shivan Dragon", 2),
        ]
    );
}

/// Test deck entries the collection lacks are reported, not resolved.
#[test]
fn test_missing_cards() {
    let mut collection = collection();
    let deck = creature_deck();
    collection.remove_card(&named("Nightmare"), 1).unwrap();

    assert_eq!(deck.missing(&collection), vec![CardKey::new("M15", "276")]);
    assert_eq!(deck.resolve(&collection).count(), 3);
}

/// Test deck statistics over resolved cards.
#[test]
fn test_deck_statistics() {
    let collection = collection();
    let deck = creature_deck();
    let stats = deck.statistics(&collection);

    assert_eq!(stats.count_all(), 10);
    assert_eq!(stats.count_type("Creature"), 8);
    assert_eq!(stats.count_type("Instant"), 2);
    assert!((stats.type_share("Creature") - 0.8).abs() < f64::EPSILON);

    // cmc: Shoal 2, Jushi 3, Dragon 6, Nightmare 6.
    let curve = stats.cmc_distribution(None);
    assert_eq!(curve.as_slice(), &[0, 0, 2, 4, 0, 0, 4]);

    let creatures = stats.cmc_distribution(Some("Creature"));
    assert_eq!(creatures.as_slice(), &[0, 0, 0, 4, 0, 0, 4]);
}

/// Test collection-wide statistics from entries.
#[test]
fn test_collection_statistics() {
    let collection = collection();
    let stats = Statistics::from_entries(collection.entries());

    assert_eq!(stats.count_all(), 8);
    assert_eq!(stats.count_type("Creature"), 5);
    assert_eq!(stats.count_type("Planeswalker"), 1);
    assert_eq!(stats.cmc_distribution(None).iter().sum::<i64>(), 8);
}

/// Test an empty deck has empty statistics.
#[test]
fn test_empty_deck_statistics() {
    let collection = collection();
    let deck = Deck::new("Empty");
    let stats = deck.statistics(&collection);

    assert_eq!(stats.count_all(), 0);
    assert_eq!(stats.type_share("Creature"), 0.0);
    assert!(stats.cmc_distribution(None).is_empty());
}

/// Test deck quantities follow the container rules.
#[test]
fn test_deck_quantities() {
    let mut deck = creature_deck();
    assert_eq!(deck.remove_card(&named("Callow Jushi"), 10).unwrap(), 4);
    assert_eq!(deck.get_count(&named("Callow Jushi")).unwrap(), 0);
    assert_eq!(deck.cards().len(), 3);
}
