//! Loading and saving collections as JSON.
//!
//! ## Errors
//!
//! - `MalformedSyntax`: the input is not JSON (including truncated input)
//! - `MalformedStructure`: the input is JSON of the wrong shape, or an entry
//!   has a non-positive count or no identity
//! - `Io`: the file could not be read or written
//!
//! Loads are all-or-nothing: a document with one bad entry yields an error,
//! never a partial collection.

mod document;

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::config::PersistenceConfig;
use crate::containers::StandaloneContainer;
use crate::decks::Deck;
use crate::error::Result;

/// Everything saved in one collection document.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    /// Owned cards with full data.
    pub cards: StandaloneContainer,
    /// Decks, in name order when loaded.
    pub decks: Vec<Deck>,
}

impl Collection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing set of cards with no decks.
    #[must_use]
    pub fn from_cards(cards: StandaloneContainer) -> Self {
        Self {
            cards,
            decks: Vec::new(),
        }
    }

    /// Find a deck by name.
    #[must_use]
    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.name == name)
    }

    /// Find a deck by name, mutably.
    pub fn deck_mut(&mut self, name: &str) -> Option<&mut Deck> {
        self.decks.iter_mut().find(|deck| deck.name == name)
    }

    /// Insert a deck, replacing any deck with the same name.
    pub fn put_deck(&mut self, deck: Deck) {
        match self.deck_mut(&deck.name) {
            Some(existing) => *existing = deck,
            None => self.decks.push(deck),
        }
    }

    /// Remove a deck by name.
    pub fn remove_deck(&mut self, name: &str) -> Option<Deck> {
        let index = self.decks.iter().position(|deck| deck.name == name)?;
        Some(self.decks.remove(index))
    }
}

/// Parse a collection document from a string.
pub fn from_json_str(json: &str) -> Result<Collection> {
    let value: Value = serde_json::from_str(json)?;
    document::from_value(value)
}

/// Parse a collection document from a reader.
pub fn from_reader(reader: impl Read) -> Result<Collection> {
    let value: Value = serde_json::from_reader(reader)?;
    document::from_value(value)
}

/// Serialise a collection document.
pub fn to_json_string(collection: &Collection, config: &PersistenceConfig) -> Result<String> {
    let value = document::to_value(collection)?;
    let json = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}

/// Load a collection from a file.
pub fn load_collection(path: impl AsRef<Path>) -> Result<Collection> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let collection = from_reader(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        cards = collection.cards.len(),
        decks = collection.decks.len(),
        "loaded collection"
    );
    Ok(collection)
}

/// Save a collection to a file, replacing its contents.
pub fn save_collection(
    path: impl AsRef<Path>,
    collection: &Collection,
    config: &PersistenceConfig,
) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_string(collection, config)?;
    fs::write(path, json)?;
    tracing::info!(
        path = %path.display(),
        cards = collection.cards.len(),
        decks = collection.decks.len(),
        "saved collection"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardRecord;
    use crate::containers::CardContainer;
    use crate::error::CardbaseError;

    #[test]
    fn test_syntax_vs_structure() {
        assert!(matches!(
            from_json_str("[{\"setCode\": \"M15\""),
            Err(CardbaseError::MalformedSyntax { .. })
        ));
        assert!(matches!(
            from_json_str("not json at all"),
            Err(CardbaseError::MalformedSyntax { .. })
        ));
        assert!(matches!(
            from_json_str(r#"{"cards": {"setCode": "M15"}}"#),
            Err(CardbaseError::MalformedStructure { .. })
        ));
    }

    #[test]
    fn test_put_deck_replaces_by_name() {
        let mut collection = Collection::new();
        collection.put_deck(Deck::new("Red"));

        let mut replacement = Deck::new("Red");
        replacement
            .add_card(&CardRecord::new("M15", "281"), 2)
            .unwrap();
        collection.put_deck(replacement);

        assert_eq!(collection.decks.len(), 1);
        assert_eq!(collection.deck("Red").unwrap().cards().total_count(), 2);
        assert!(collection.remove_deck("Red").is_some());
        assert!(collection.deck("Red").is_none());
    }

    #[test]
    fn test_compact_output() {
        let mut collection = Collection::new();
        collection
            .cards
            .add_card(&CardRecord::new("M15", "281"), 1)
            .unwrap();

        let json = to_json_string(&collection, &PersistenceConfig::default().compact()).unwrap();
        assert!(!json.contains('\n'));
        let pretty = to_json_string(&collection, &PersistenceConfig::default()).unwrap();
        assert!(pretty.contains('\n'));
    }
}
