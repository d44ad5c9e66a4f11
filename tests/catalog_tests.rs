//! Catalog lookup tests.
//!
//! These tests verify the catalog front-end over a fetch function:
//! - Set list and set parsing from upstream JSON
//! - Case-insensitive set codes
//! - Missing or broken upstream data degrading to "not found"

use std::cell::RefCell;

use cardbase::{
    CardContainer, Catalog, CatalogConfig, CardbaseError, FetchSource, Result,
    StandaloneContainer,
};

const SET_LIST: &str = r#"[
    { "name": "Magic 2015 Core Set", "code": "M15", "releaseDate": "2014-07-18" },
    { "name": "Fate Reforged", "code": "FRF", "releaseDate": "2015-01-23" },
    { "name": "Betrayers of Kamigawa", "code": "BOK", "releaseDate": "2005-02-04" }
]"#;

const M15: &str = r#"{
    "name": "Magic 2015 Core Set",
    "code": "M15",
    "releaseDate": "2014-07-18",
    "border": "black",
    "type": "core",
    "cards": [
        { "name": "Nightmare", "number": "276", "rarity": "Rare", "power": "*", "toughness": "*", "cmc": 6 },
        { "name": "Shivan Dragon", "number": "281", "rarity": "Rare", "power": "5", "toughness": "5", "cmc": 6 }
    ]
}"#;

fn upstream(url: &str) -> Result<String> {
    match url {
        "https://mtgjson.com/json/SetList.json" => Ok(SET_LIST.to_string()),
        "https://mtgjson.com/json/M15.json" => Ok(M15.to_string()),
        // Truncated body.
        "https://mtgjson.com/json/FRF.json" => Ok(r#"{"name": "Fate Reforged", "cards": ["#.to_string()),
        other => Err(CardbaseError::CatalogUnavailable {
            reason: format!("404 Not Found: {other}"),
        }),
    }
}

fn catalog() -> Catalog<FetchSource<fn(&str) -> Result<String>>> {
    Catalog::new(FetchSource::new(
        CatalogConfig::default(),
        upstream as fn(&str) -> Result<String>,
    ))
}

/// Test looking a card up and adding it to a collection.
#[test]
fn test_lookup_then_add() {
    let mut catalog = catalog();
    let dragon = catalog.card("m15", "281").unwrap();

    assert_eq!(dragon.name.as_deref(), Some("Shivan Dragon"));
    assert_eq!(dragon.set_code.as_deref(), Some("M15"));

    let mut collection = StandaloneContainer::new();
    collection.add_card(&dragon, 1).unwrap();
    assert!(collection.get_card("M15", "281").is_some());
}

/// Test set metadata is parsed.
#[test]
fn test_card_set_metadata() {
    let mut catalog = catalog();
    let set = catalog.card_set("M15").unwrap();

    assert_eq!(set.info.name, "Magic 2015 Core Set");
    assert_eq!(set.border.as_deref(), Some("black"));
    assert_eq!(set.set_type.as_deref(), Some("core"));
    assert_eq!(set.cards().len(), 2);
}

/// Test set codes resolve to their canonical spelling.
#[test]
fn test_validate_set_code() {
    let mut catalog = catalog();
    assert_eq!(catalog.validate_set_code("bok").as_deref(), Some("BOK"));
    assert_eq!(catalog.validate_set_code("Frf").as_deref(), Some("FRF"));
    assert_eq!(catalog.validate_set_code("ZZZ"), None);
    assert_eq!(catalog.set_list().len(), 3);
}

/// Test unknown numbers and sets are simply not found.
#[test]
fn test_not_found() {
    let mut catalog = catalog();
    assert!(catalog.card("M15", "999").is_none());
    assert!(catalog.card("ZZZ", "1").is_none());
}

/// Test a broken upstream document degrades to not found.
#[test]
fn test_malformed_set_degrades() {
    let mut catalog = catalog();

    assert!(catalog.card("FRF", "1").is_none());
    assert!(matches!(
        catalog.try_card_set("FRF"),
        Err(CardbaseError::MalformedSyntax { .. })
    ));
}

/// Test a listed set with no data degrades to not found.
#[test]
fn test_unreachable_set_degrades() {
    let mut catalog = catalog();

    assert!(catalog.card_set("BOK").is_none());
    let err = catalog.try_card("BOK", "33").unwrap_err();
    assert!(matches!(err, CardbaseError::CatalogUnavailable { .. }));
}

/// Test custom addresses from configuration.
#[test]
fn test_custom_base_url() {
    let requested = RefCell::new(Vec::new());
    let config = CatalogConfig::default().with_base_url("file:///srv/mtg/");
    let source = FetchSource::new(config, |url: &str| {
        requested.borrow_mut().push(url.to_string());
        Ok(SET_LIST.to_string())
    });
    let mut catalog = Catalog::new(source);

    assert_eq!(catalog.validate_set_code("m15").as_deref(), Some("M15"));
    assert!(catalog.card_set("M15").is_none());
    assert_eq!(
        *requested.borrow(),
        vec![
            "file:///srv/mtg/SetList.json".to_string(),
            "file:///srv/mtg/M15.json".to_string(),
        ]
    );
}
