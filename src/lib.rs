//! # cardbase
//!
//! Tracking a personal trading card collection.
//!
//! ## Design Principles
//!
//! 1. **Identity is set code + number**: Two records with the same
//!    `CardKey` are the same card, whatever else they say.
//!
//! 2. **Fields by name**: Sorting and filtering address card attributes by
//!    their wire names (`"manaCost"`, `"number"`, ...), so queries can come
//!    straight from user input.
//!
//! 3. **All-or-nothing**: Every failing operation leaves its input
//!    untouched. Queries are validated before any data moves.
//!
//! ## Modules
//!
//! - `cards`: Card records and their identity
//! - `fields`: Field lookup, ordering and filtering
//! - `containers`: Quantity-tracked card containers
//! - `decks`: Decks referencing a collection, and deck statistics
//! - `persistence`: JSON load/save of collections
//! - `catalog`: Upstream set data with caching
//! - `session`: Editing state with single-step undo
//! - `config`: Catalog and persistence settings
//! - `error`: Error taxonomy

pub mod cards;
pub mod catalog;
pub mod config;
pub mod containers;
pub mod decks;
pub mod error;
pub mod fields;
pub mod persistence;
pub mod session;

// Re-export commonly used types
pub use crate::cards::{CardKey, CardRecord};

pub use crate::fields::{
    filter_by_field, sort_by_field, sort_by_field_with_order, CardField, FieldComparator,
    FieldKind, Filter, Predicate, SortOrder,
};

pub use crate::containers::{CardContainer, ReferenceContainer, StandaloneContainer};

pub use crate::decks::{Deck, Statistics};

pub use crate::persistence::{load_collection, save_collection, Collection};

pub use crate::catalog::{Catalog, CardSet, CatalogSource, FetchSource, MemorySource, SetInformation};

pub use crate::session::{LastAction, Session};

pub use crate::config::{CatalogConfig, PersistenceConfig};

pub use crate::error::{CardbaseError, ErrorCategory, Result};
