//! Reference container: identity → count.

use rustc_hash::FxHashMap;

use super::CardContainer;
use crate::cards::{CardKey, CardRecord};
use crate::error::{CardbaseError, Result};

/// Counts of cards held by identity only.
///
/// ## Example
///
/// ```
/// use cardbase::cards::CardRecord;
/// use cardbase::containers::{CardContainer, ReferenceContainer};
///
/// let dragon = CardRecord::new("M15", "281");
/// let mut owned = ReferenceContainer::new();
///
/// owned.add_card(&dragon, 3).unwrap();
/// assert_eq!(owned.remove_card(&dragon, 5).unwrap(), 3);
/// assert_eq!(owned.get_count(&dragon).unwrap(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceContainer {
    counts: FxHashMap<CardKey, i64>,
}

impl ReferenceContainer {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct identities held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Check if an identity is held.
    #[must_use]
    pub fn contains(&self, key: &CardKey) -> bool {
        self.counts.contains_key(key)
    }

    /// Sum of all counts, saturating.
    #[must_use]
    pub fn total_count(&self) -> i64 {
        self.counts
            .values()
            .fold(0i64, |total, count| total.saturating_add(*count))
    }

    /// Iterate over `(identity, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&CardKey, i64)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    /// Add `count` to an identity. Returns the new stored count.
    pub(crate) fn increment(&mut self, key: CardKey, count: i64) -> Result<i64> {
        if count <= 0 {
            return Err(CardbaseError::invalid_argument(format!(
                "cannot add a non-positive amount ({count}) of {key}"
            )));
        }
        let stored = self.counts.entry(key).or_insert(0);
        *stored = stored.saturating_add(count);
        Ok(*stored)
    }

    /// Take up to `count` from an identity. Returns the amount taken and
    /// whether the entry was deleted.
    pub(crate) fn decrement(&mut self, key: &CardKey, count: i64) -> (i64, bool) {
        if count <= 0 {
            return (0, false);
        }
        let Some(stored) = self.counts.get_mut(key) else {
            return (0, false);
        };
        if *stored > count {
            *stored -= count;
            (count, false)
        } else {
            let removed = *stored;
            self.counts.remove(key);
            (removed, true)
        }
    }
}

impl CardContainer for ReferenceContainer {
    fn count(&self, key: &CardKey) -> i64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    fn add_card(&mut self, card: &CardRecord, count: i64) -> Result<()> {
        let key = card.key()?;
        let stored = self.increment(key.clone(), count)?;
        tracing::debug!(card = %key, added = count, stored, "reference add");
        Ok(())
    }

    fn remove_card(&mut self, card: &CardRecord, count: i64) -> Result<i64> {
        let key = card.key()?;
        let (removed, _) = self.decrement(&key, count);
        tracing::debug!(card = %key, requested = count, removed, "reference remove");
        Ok(removed)
    }
}
