//! Quantity-tracked card containers.
//!
//! ## Variants
//!
//! - `ReferenceContainer`: identity → count only. For cards whose data
//!   lives elsewhere (a catalog, or a collection a deck points into).
//! - `StandaloneContainer`: identity → count plus identity → full record.
//!   Used for the persisted personal collection.
//!
//! ## Quantity Rules
//!
//! - A stored count is always positive; an entry that would drop to zero
//!   is deleted.
//! - `add_card` requires a positive count.
//! - `remove_card` never reports more than was stored. Removing an absent
//!   card, or a non-positive amount, is a no-op reporting 0.
//!
//! Containers assume exclusive access from one caller at a time. Callers
//! that share a container across threads must serialise access themselves.

pub mod reference;
pub mod standalone;

pub use reference::ReferenceContainer;
pub use standalone::StandaloneContainer;

use crate::cards::{CardKey, CardRecord};
use crate::error::Result;

/// Count-tracking operations shared by both container variants.
pub trait CardContainer {
    /// Count stored for an identity, 0 if absent.
    fn count(&self, key: &CardKey) -> i64;

    /// Add `count` copies of a card.
    ///
    /// Fails with `InvalidArgument` if the card has no identity or `count`
    /// is not positive. Nothing is mutated on failure.
    fn add_card(&mut self, card: &CardRecord, count: i64) -> Result<()>;

    /// Remove up to `count` copies of a card and return how many were
    /// actually removed.
    ///
    /// Fails with `InvalidArgument` only if the card has no identity.
    fn remove_card(&mut self, card: &CardRecord, count: i64) -> Result<i64>;

    /// Count stored for a card's identity.
    fn get_count(&self, card: &CardRecord) -> Result<i64> {
        Ok(self.count(&card.key()?))
    }
}
