//! Field-driven sorting and filtering.
//!
//! Cards can be sorted or filtered by any attribute named as a string,
//! without one comparator per attribute. The field name is resolved once
//! against a fixed table to a `CardField`, whose `FieldKind` picks the
//! behaviour:
//!
//! - `Text`: lexicographic
//! - `Integer`: numeric
//! - `DirtyNumber`: digit prefix, then trailing letters (`number`, `power`, `toughness`)
//! - `Rarity`: fixed rank table
//!
//! ## Usage
//!
//! ```
//! use cardbase::cards::CardRecord;
//! use cardbase::fields::{filter_by_field, sort_by_field, Filter, Predicate};
//!
//! let mut cards = vec![
//!     CardRecord::new("M15", "281").with_name("Shivan Dragon"),
//!     CardRecord::new("CHK", "31a").with_name("Callow Jushi"),
//!     CardRecord::new("FUT", "33").with_name("Disrupting Shoal"),
//! ];
//!
//! sort_by_field(&mut cards, "number").unwrap();
//! assert_eq!(cards[0].number.as_deref(), Some("31a"));
//!
//! filter_by_field(&mut cards, &Filter::new(Predicate::GreaterThan, "number", "32")).unwrap();
//! assert_eq!(cards.len(), 2);
//! assert_eq!(cards[0].name.as_deref(), Some("Disrupting Shoal"));
//! ```

pub mod field;
pub mod filter;
pub mod ordering;

pub use field::{CardField, FieldKind, FieldValue};
pub use filter::{filter_by_field, CompiledFilter, Filter, Predicate};
pub use ordering::{
    compare_dirty_numbers, rarity_rank, sort_by_field, sort_by_field_with_order,
    split_dirty_number, FieldComparator, SortOrder,
};
