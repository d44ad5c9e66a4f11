//! Quantity statistics over a set of cards.
//!
//! Works on any `(record, count)` iterator, so the same numbers can be
//! computed for a whole collection or for one resolved deck.

use smallvec::SmallVec;

use crate::cards::CardRecord;

/// Highest converted mana cost included in a distribution.
///
/// Bounds the size of the result; no printed card comes close.
pub const MAX_DISTRIBUTION_CMC: i64 = 100;

/// Card counts, indexed by converted mana cost.
pub type CmcDistribution = SmallVec<[i64; 8]>;

/// Statistics over `(record, count)` pairs.
#[derive(Clone, Debug, Default)]
pub struct Statistics<'a> {
    entries: Vec<(&'a CardRecord, i64)>,
}

impl<'a> Statistics<'a> {
    /// Collect entries to analyse.
    pub fn from_entries(entries: impl IntoIterator<Item = (&'a CardRecord, i64)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Total number of cards.
    #[must_use]
    pub fn count_all(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |total, (_, count)| total.saturating_add(*count))
    }

    /// Number of cards whose type line contains `card_type`.
    #[must_use]
    pub fn count_type(&self, card_type: &str) -> i64 {
        self.entries
            .iter()
            .filter(|(card, _)| has_type(card, card_type))
            .fold(0i64, |total, (_, count)| total.saturating_add(*count))
    }

    /// Fraction of cards whose type line contains `card_type`.
    ///
    /// 0.0 when there are no cards at all.
    #[must_use]
    pub fn type_share(&self, card_type: &str) -> f64 {
        let all = self.count_all();
        if all == 0 {
            return 0.0;
        }
        self.count_type(card_type) as f64 / all as f64
    }

    /// Card counts by converted mana cost, optionally restricted to a type.
    ///
    /// Index `i` holds the number of cards with `cmc == i`. Cards without a
    /// cmc, or with one outside `0..=MAX_DISTRIBUTION_CMC`, are left out.
    #[must_use]
    pub fn cmc_distribution(&self, card_type: Option<&str>) -> CmcDistribution {
        let mut distribution = CmcDistribution::new();
        for (card, count) in &self.entries {
            if card_type.is_some_and(|wanted| !has_type(card, wanted)) {
                continue;
            }
            let Some(cmc) = card.cmc.filter(|cmc| (0..=MAX_DISTRIBUTION_CMC).contains(cmc)) else {
                continue;
            };
            let index = cmc as usize;
            if distribution.len() <= index {
                distribution.resize(index + 1, 0);
            }
            distribution[index] = distribution[index].saturating_add(*count);
        }
        distribution
    }
}

fn has_type(card: &CardRecord, card_type: &str) -> bool {
    card.card_type
        .as_deref()
        .is_some_and(|line| line.contains(card_type))
}
