//! Named decks built from a collection.
//!
//! A `Deck` is a named `ReferenceContainer`: it remembers which cards and
//! how many, and resolves the card data against a `StandaloneContainer`
//! when needed. Decks are saved alongside the collection.

pub mod statistics;

pub use statistics::Statistics;

use crate::cards::{CardKey, CardRecord};
use crate::containers::{CardContainer, ReferenceContainer, StandaloneContainer};
use crate::error::Result;

/// A named list of card quantities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    /// Deck name, unique within a saved collection.
    pub name: String,
    cards: ReferenceContainer,
}

impl Deck {
    /// Create an empty deck.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: ReferenceContainer::new(),
        }
    }

    /// The deck's quantities.
    #[must_use]
    pub fn cards(&self) -> &ReferenceContainer {
        &self.cards
    }

    /// Resolve the deck against a collection.
    ///
    /// Cards the collection does not hold are skipped; see `missing`.
    pub fn resolve<'a>(
        &'a self,
        collection: &'a StandaloneContainer,
    ) -> impl Iterator<Item = (&'a CardRecord, i64)> + 'a {
        self.cards
            .iter()
            .filter_map(move |(key, count)| collection.get(key).map(|card| (card, count)))
    }

    /// Identities in the deck that the collection does not hold, sorted.
    #[must_use]
    pub fn missing(&self, collection: &StandaloneContainer) -> Vec<CardKey> {
        let mut missing: Vec<CardKey> = self
            .cards
            .iter()
            .filter(|(key, _)| !collection.contains(key))
            .map(|(key, _)| key.clone())
            .collect();
        missing.sort();
        missing
    }

    /// Statistics over the resolved deck.
    #[must_use]
    pub fn statistics<'a>(&'a self, collection: &'a StandaloneContainer) -> Statistics<'a> {
        Statistics::from_entries(self.resolve(collection))
    }
}

impl CardContainer for Deck {
    fn count(&self, key: &CardKey) -> i64 {
        self.cards.count(key)
    }

    fn add_card(&mut self, card: &CardRecord, count: i64) -> Result<()> {
        self.cards.add_card(card, count)
    }

    fn remove_card(&mut self, card: &CardRecord, count: i64) -> Result<i64> {
        self.cards.remove_card(card, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_and_missing() {
        let dragon = CardRecord::new("M15", "281").with_name("Shivan Dragon");
        let jushi = CardRecord::new("CHK", "31a").with_name("Callow Jushi");

        let mut collection = StandaloneContainer::new();
        collection.add_card(&dragon, 1).unwrap();

        let mut deck = Deck::new("Red");
        deck.add_card(&dragon, 2).unwrap();
        deck.add_card(&jushi, 1).unwrap();

        let resolved: Vec<_> = deck.resolve(&collection).collect();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0.name.as_deref(), Some("Shivan Dragon"));
        assert_eq!(resolved[0].1, 2);

        assert_eq!(deck.missing(&collection), vec![CardKey::new("CHK", "31a")]);
    }

    #[test]
    fn test_deck_counts() {
        let dragon = CardRecord::new("M15", "281");
        let mut deck = Deck::new("Red");
        deck.add_card(&dragon, 4).unwrap();

        assert_eq!(deck.remove_card(&dragon, 1).unwrap(), 1);
        assert_eq!(deck.get_count(&dragon).unwrap(), 3);
        assert_eq!(deck.cards().total_count(), 3);
    }
}
