//! Field ordering.
//!
//! One comparator serves every field: it looks the field up in the field
//! table and dispatches on its `FieldKind`.
//!
//! ## Null Handling
//!
//! A missing value sorts before every concrete value, for all kinds.
//!
//! ## Dirty Numbers
//!
//! `number`, `power` and `toughness` are strings like "281", "31a" or "*".
//! They compare by their leading run of digits; a value without one sorts
//! below any value with one. Ties are broken by the letters that follow the
//! digits, so "31" < "31a" < "31b" < "33". Values with neither digits nor
//! letters ("*", "") tie.
//!
//! ## Rarity
//!
//! Rarity is ranked, not alphabetised: Common, Uncommon, Rare, Mythic Rare,
//! Basic Land, Special, then anything else.

use std::cmp::Ordering;

use super::field::{CardField, FieldKind, FieldValue};
use crate::cards::CardRecord;
use crate::error::Result;

/// Direction of a sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Natural,
    /// Descending. Equal keys still keep their input order.
    Reverse,
}

/// Total order over cards by one field.
#[derive(Clone, Copy, Debug)]
pub struct FieldComparator {
    field: CardField,
    order: SortOrder,
}

impl FieldComparator {
    /// Create an ascending comparator for a field name.
    ///
    /// Fails with `UnknownField` if the name is not a card attribute.
    pub fn new(field_name: &str) -> Result<Self> {
        Ok(Self::for_field(CardField::from_name(field_name)?))
    }

    /// Create an ascending comparator for a resolved field.
    #[must_use]
    pub const fn for_field(field: CardField) -> Self {
        Self {
            field,
            order: SortOrder::Natural,
        }
    }

    /// Set the direction (builder pattern).
    #[must_use]
    pub const fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// The field being compared.
    #[must_use]
    pub const fn field(&self) -> CardField {
        self.field
    }

    /// Compare two cards.
    #[must_use]
    pub fn compare(&self, a: &CardRecord, b: &CardRecord) -> Ordering {
        let ordering = compare_values(self.field.kind(), self.field.value(a), self.field.value(b));
        match self.order {
            SortOrder::Natural => ordering,
            SortOrder::Reverse => ordering.reverse(),
        }
    }
}

fn compare_values(kind: FieldKind, a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(&b),
        (FieldValue::Text(a), FieldValue::Text(b)) => match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => match kind {
                FieldKind::DirtyNumber => compare_dirty_numbers(a, b),
                FieldKind::Rarity => rarity_rank(a).cmp(&rarity_rank(b)),
                FieldKind::Text | FieldKind::Integer => a.cmp(b),
            },
        },
        // A field always yields the same variant.
        (FieldValue::Integer(_), FieldValue::Text(_)) => Ordering::Less,
        (FieldValue::Text(_), FieldValue::Integer(_)) => Ordering::Greater,
    }
}

/// Split a dirty number into its digit prefix and the rest.
///
/// The prefix saturates at `u64::MAX`.
#[must_use]
pub fn split_dirty_number(value: &str) -> (Option<u64>, &str) {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, rest) = value.split_at(end);
    if digits.is_empty() {
        return (None, rest);
    }
    let prefix = digits.bytes().fold(0u64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
    });
    (Some(prefix), rest)
}

/// Compare two dirty-number strings.
///
/// ```
/// use std::cmp::Ordering;
/// use cardbase::fields::compare_dirty_numbers;
///
/// assert_eq!(compare_dirty_numbers("31a", "33"), Ordering::Less);
/// assert_eq!(compare_dirty_numbers("109", "33"), Ordering::Greater);
/// assert_eq!(compare_dirty_numbers("*", "1"), Ordering::Less);
/// ```
#[must_use]
pub fn compare_dirty_numbers(a: &str, b: &str) -> Ordering {
    let (a_prefix, a_rest) = split_dirty_number(a);
    let (b_prefix, b_rest) = split_dirty_number(b);

    // Option orders None first, which is exactly "no prefix sorts below".
    match a_prefix.cmp(&b_prefix) {
        Ordering::Equal if a_prefix.is_some() => a_rest.cmp(b_rest),
        // Placeholders ("*", "") only differ by their letters.
        Ordering::Equal => {
            let letters = |rest: &str| rest.chars().filter(|c| c.is_alphabetic()).collect::<Vec<_>>();
            letters(a_rest).cmp(&letters(b_rest))
        }
        ordering => ordering,
    }
}

/// Ordinal of a rarity name, case-insensitive.
///
/// Unrecognised rarities rank last.
#[must_use]
pub fn rarity_rank(rarity: &str) -> u8 {
    const RANKS: [&str; 6] = ["common", "uncommon", "rare", "mythic rare", "basic land", "special"];

    RANKS
        .iter()
        .position(|name| rarity.eq_ignore_ascii_case(name))
        .map_or(RANKS.len() as u8, |rank| rank as u8)
}

/// Sort cards ascending by a field. Stable.
///
/// On `UnknownField` the slice is left untouched.
pub fn sort_by_field(cards: &mut [CardRecord], field_name: &str) -> Result<()> {
    sort_by_field_with_order(cards, field_name, SortOrder::Natural)
}

/// Sort cards by a field in the given direction. Stable.
pub fn sort_by_field_with_order(
    cards: &mut [CardRecord],
    field_name: &str,
    order: SortOrder,
) -> Result<()> {
    let comparator = FieldComparator::new(field_name)?.with_order(order);
    tracing::trace!(field = field_name, ?order, len = cards.len(), "sorting cards");
    cards.sort_by(|a, b| comparator.compare(a, b));
    Ok(())
}
