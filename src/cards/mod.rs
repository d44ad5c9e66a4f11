//! Card data: records and identity.
//!
//! ## Key Types
//!
//! - `CardRecord`: All attributes of one card, as published upstream
//! - `CardKey`: The `(setCode, number)` pair identifying a physical card

pub mod key;
pub mod record;

pub use key::CardKey;
pub use record::CardRecord;
