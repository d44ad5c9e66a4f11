//! Standalone container: identity → count plus identity → record.
//!
//! The record payload is written the first time an identity is added and
//! is never replaced by later adds; only the count changes. It is deleted
//! together with the count.
//!
//! Payloads live in an `im::HashMap`, so `snapshot` is O(1) and callers can
//! hold an immutable view while the container keeps changing.

use super::reference::ReferenceContainer;
use super::CardContainer;
use crate::cards::{CardKey, CardRecord};
use crate::error::Result;
use crate::fields::{self, Filter, SortOrder};

/// A personal collection: quantities and full card data.
#[derive(Clone, Debug, Default)]
pub struct StandaloneContainer {
    counts: ReferenceContainer,
    cards: im::HashMap<CardKey, CardRecord>,
}

impl StandaloneContainer {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look a card up by set code and number.
    #[must_use]
    pub fn get_card(&self, set_code: &str, number: &str) -> Option<&CardRecord> {
        self.get(&CardKey::new(set_code, number))
    }

    /// Look a card up by identity.
    #[must_use]
    pub fn get(&self, key: &CardKey) -> Option<&CardRecord> {
        self.cards.get(key)
    }

    /// Check if an identity is held.
    #[must_use]
    pub fn contains(&self, key: &CardKey) -> bool {
        self.cards.contains_key(key)
    }

    /// Number of distinct cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_count(&self) -> i64 {
        self.counts.total_count()
    }

    /// Copy of every held record, in no particular order.
    #[must_use]
    pub fn all_cards(&self) -> Vec<CardRecord> {
        self.cards.values().cloned().collect()
    }

    /// Immutable view of the payload map.
    #[must_use]
    pub fn snapshot(&self) -> im::HashMap<CardKey, CardRecord> {
        self.cards.clone()
    }

    /// Iterate over `(record, count)` pairs in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&CardRecord, i64)> {
        self.cards
            .iter()
            .map(move |(key, card)| (card, self.counts.count(key)))
    }

    /// All records sorted ascending by a field.
    ///
    /// Fails with `UnknownField`; the collection itself is never reordered.
    pub fn sort_by_field(&self, field_name: &str) -> Result<Vec<CardRecord>> {
        self.sort_by_field_with_order(field_name, SortOrder::Natural)
    }

    /// All records sorted by a field in the given direction.
    pub fn sort_by_field_with_order(
        &self,
        field_name: &str,
        order: SortOrder,
    ) -> Result<Vec<CardRecord>> {
        let mut cards = self.all_cards();
        fields::sort_by_field_with_order(&mut cards, field_name, order)?;
        Ok(cards)
    }

    /// All records that pass a filter.
    ///
    /// The collection itself is not modified.
    pub fn filter_by_field(&self, filter: &Filter) -> Result<Vec<CardRecord>> {
        let compiled = filter.compile()?;
        Ok(self
            .cards
            .values()
            .filter(|card| compiled.matches(card))
            .cloned()
            .collect())
    }
}

impl CardContainer for StandaloneContainer {
    fn count(&self, key: &CardKey) -> i64 {
        self.counts.count(key)
    }

    fn add_card(&mut self, card: &CardRecord, count: i64) -> Result<()> {
        let key = card.key()?;
        let stored = self.counts.increment(key.clone(), count)?;
        if !self.cards.contains_key(&key) {
            self.cards.insert(key.clone(), card.clone());
        }
        tracing::debug!(card = %key, added = count, stored, "collection add");
        Ok(())
    }

    fn remove_card(&mut self, card: &CardRecord, count: i64) -> Result<i64> {
        let key = card.key()?;
        let (removed, deleted) = self.counts.decrement(&key, count);
        if deleted {
            self.cards.remove(&key);
        }
        tracing::debug!(card = %key, requested = count, removed, deleted, "collection remove");
        Ok(removed)
    }
}
