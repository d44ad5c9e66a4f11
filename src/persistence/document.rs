//! Wire shapes of the collection document.
//!
//! Two input shapes are accepted:
//!
//! ```text
//! [ { ...card fields..., "count": 2 }, ... ]
//!
//! { "cards": [ { ...card fields..., "count": 2 }, ... ],
//!   "decks": { "Red": [ { "setCode": "M15", "number": "281", "count": 2 } ] } }
//! ```
//!
//! Output is always the object shape. Unknown fields are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Collection;
use crate::cards::CardRecord;
use crate::containers::{CardContainer, StandaloneContainer};
use crate::decks::Deck;
use crate::error::{CardbaseError, Result};

#[derive(Debug, Deserialize)]
struct CardEntry {
    #[serde(flatten)]
    card: CardRecord,
    count: i64,
}

#[derive(Debug, Serialize)]
struct CardEntryRef<'a> {
    #[serde(flatten)]
    card: &'a CardRecord,
    count: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeckEntry {
    set_code: String,
    number: String,
    count: i64,
}

#[derive(Debug, Deserialize)]
struct CollectionDocument {
    cards: Vec<CardEntry>,
    #[serde(default)]
    decks: BTreeMap<String, Vec<DeckEntry>>,
}

#[derive(Debug, Serialize)]
struct CollectionDocumentRef<'a> {
    cards: Vec<CardEntryRef<'a>>,
    decks: BTreeMap<&'a str, Vec<DeckEntry>>,
}

/// Build a collection from a parsed JSON value.
pub(crate) fn from_value(value: Value) -> Result<Collection> {
    match value {
        Value::Array(_) => {
            let entries: Vec<CardEntry> = serde_json::from_value(value)?;
            build(entries, BTreeMap::new())
        }
        Value::Object(_) => {
            let document: CollectionDocument = serde_json::from_value(value)?;
            build(document.cards, document.decks)
        }
        other => Err(CardbaseError::malformed_structure(format!(
            "expected an array of cards or a collection object, found {}",
            describe(&other)
        ))),
    }
}

fn build(entries: Vec<CardEntry>, decks: BTreeMap<String, Vec<DeckEntry>>) -> Result<Collection> {
    let mut cards = StandaloneContainer::new();
    for (index, entry) in entries.into_iter().enumerate() {
        if entry.count <= 0 {
            return Err(CardbaseError::malformed_structure(format!(
                "card entry {index} has non-positive count {}",
                entry.count
            )));
        }
        if entry.card.key().is_err() {
            return Err(CardbaseError::malformed_structure(format!(
                "card entry {index} has no setCode or number"
            )));
        }
        cards.add_card(&entry.card, entry.count)?;
    }

    let mut collection = Collection::from_cards(cards);
    for (name, entries) in decks {
        let mut deck = Deck::new(name);
        for entry in entries {
            if entry.count <= 0 {
                return Err(CardbaseError::malformed_structure(format!(
                    "deck '{}' lists {} #{} with non-positive count {}",
                    deck.name, entry.set_code, entry.number, entry.count
                )));
            }
            deck.add_card(&CardRecord::new(entry.set_code, entry.number), entry.count)?;
        }
        collection.put_deck(deck);
    }
    Ok(collection)
}

/// Serialise a collection in the object shape, entries ordered by identity.
pub(crate) fn to_value(collection: &Collection) -> Result<Value> {
    let mut cards: Vec<CardEntryRef<'_>> = collection
        .cards
        .entries()
        .map(|(card, count)| CardEntryRef { card, count })
        .collect();
    cards.sort_by(|a, b| {
        (&a.card.set_code, &a.card.number).cmp(&(&b.card.set_code, &b.card.number))
    });

    let decks = collection
        .decks
        .iter()
        .map(|deck| {
            let mut entries: Vec<DeckEntry> = deck
                .cards()
                .iter()
                .map(|(key, count)| DeckEntry {
                    set_code: key.set_code.clone(),
                    number: key.number.clone(),
                    count,
                })
                .collect();
            entries.sort_by(|a, b| (&a.set_code, &a.number).cmp(&(&b.set_code, &b.number)));
            (deck.name.as_str(), entries)
        })
        .collect();

    Ok(serde_json::to_value(CollectionDocumentRef { cards, decks })?)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_shape() {
        let value = json!([
            { "name": "Shivan Dragon", "setCode": "M15", "number": "281", "count": 2 },
            { "name": "Callow Jushi", "setCode": "CHK", "number": "31a", "count": 1 }
        ]);
        let collection = from_value(value).unwrap();

        assert_eq!(collection.cards.len(), 2);
        assert_eq!(collection.cards.total_count(), 3);
        assert!(collection.decks.is_empty());
    }

    #[test]
    fn test_duplicate_entries_merge() {
        let value = json!([
            { "name": "Shivan Dragon", "setCode": "M15", "number": "281", "count": 2 },
            { "name": "Other", "setCode": "M15", "number": "281", "count": 3 }
        ]);
        let collection = from_value(value).unwrap();

        let card = collection.cards.get_card("M15", "281").unwrap();
        assert_eq!(card.name.as_deref(), Some("Shivan Dragon"));
        assert_eq!(collection.cards.count(&card.key().unwrap()), 5);
    }

    #[test]
    fn test_scalar_is_structure_error() {
        for value in [json!(null), json!(3), json!("cards")] {
            assert!(matches!(
                from_value(value),
                Err(CardbaseError::MalformedStructure { .. })
            ));
        }
    }

    #[test]
    fn test_bad_entries_are_structure_errors() {
        let zero = json!([{ "setCode": "M15", "number": "281", "count": 0 }]);
        let anonymous = json!([{ "name": "Nobody", "count": 1 }]);
        let no_count = json!([{ "setCode": "M15", "number": "281" }]);
        let bad_deck = json!({
            "cards": [],
            "decks": { "Red": [{ "setCode": "M15", "number": "281", "count": -1 }] }
        });

        for value in [zero, anonymous, no_count, bad_deck] {
            assert!(matches!(
                from_value(value),
                Err(CardbaseError::MalformedStructure { .. })
            ));
        }
    }

    #[test]
    fn test_output_is_sorted_object() {
        let value = json!([
            { "setCode": "M15", "number": "281", "count": 1 },
            { "setCode": "CHK", "number": "31a", "count": 4 }
        ]);
        let collection = from_value(value).unwrap();
        let out = to_value(&collection).unwrap();

        assert_eq!(out["cards"][0]["setCode"], "CHK");
        assert_eq!(out["cards"][0]["count"], 4);
        assert_eq!(out["cards"][1]["number"], "281");
        assert!(out["decks"].as_object().unwrap().is_empty());
    }
}
