//! Field filters.
//!
//! A `Filter` is `(predicate, field, value)`. Before it touches any card it
//! is compiled into a `CompiledFilter`, which is where every validity
//! check happens; applying a compiled filter cannot fail.
//!
//! ## Predicate Semantics
//!
//! | Predicate      | Text / Rarity / DirtyNumber      | Integer                   |
//! |----------------|----------------------------------|---------------------------|
//! | `Equals`       | case-insensitive full match      | on the decimal string     |
//! | `Contains`     | case-insensitive substring       | on the decimal string     |
//! | `Regex`        | case-sensitive full-string match | on the decimal string     |
//! | `GreaterThan`  | DirtyNumber only, digit prefix   | numeric                   |
//! | `SmallerThan`  | DirtyNumber only, digit prefix   | numeric                   |
//!
//! A missing value never passes `GreaterThan`/`SmallerThan` or `Regex`, and
//! passes `Equals`/`Contains` only when the comparison value is empty.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::field::{CardField, FieldValue};
use super::ordering::split_dirty_number;
use crate::cards::CardRecord;
use crate::error::{CardbaseError, Result};

/// Kind of test a filter applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Predicate {
    Equals,
    Contains,
    Regex,
    GreaterThan,
    SmallerThan,
}

impl Predicate {
    /// Canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Predicate::Equals => "EQUALS",
            Predicate::Contains => "CONTAINS",
            Predicate::Regex => "REGEX",
            Predicate::GreaterThan => "GREATER_THAN",
            Predicate::SmallerThan => "SMALLER_THAN",
        }
    }

    /// Whether this predicate compares numerically.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Predicate::GreaterThan | Predicate::SmallerThan)
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Predicate {
    type Err = CardbaseError;

    /// Parse a predicate name, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        [
            Predicate::Equals,
            Predicate::Contains,
            Predicate::Regex,
            Predicate::GreaterThan,
            Predicate::SmallerThan,
        ]
        .into_iter()
        .find(|p| p.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| CardbaseError::invalid_argument(format!("unknown filter predicate '{s}'")))
    }
}

/// An uncompiled filter request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub predicate: Predicate,
    pub field: String,
    pub value: String,
}

impl Filter {
    /// Create a new filter.
    pub fn new(predicate: Predicate, field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            predicate,
            field: field.into(),
            value: value.into(),
        }
    }

    /// Validate the filter and prepare it for matching.
    ///
    /// Errors:
    /// - `UnknownField` if `field` is not a card attribute
    /// - `InvalidPredicate` if a numeric predicate targets a non-numeric
    ///   field or `value` is not an integer
    /// - `InvalidPattern` if a regex does not compile
    pub fn compile(&self) -> Result<CompiledFilter> {
        let field = CardField::from_name(&self.field)?;

        let test = match self.predicate {
            Predicate::Equals => Test::Equals(self.value.to_lowercase()),
            Predicate::Contains => Test::Contains(self.value.to_lowercase()),
            Predicate::Regex => {
                let invalid = |err: regex::Error| CardbaseError::InvalidPattern {
                    pattern: self.value.clone(),
                    reason: err.to_string(),
                };
                // Validate the pattern alone so it cannot escape the anchoring group.
                Regex::new(&self.value).map_err(invalid)?;
                let regex = Regex::new(&format!("^(?:{})$", self.value)).map_err(invalid)?;
                Test::Regex(regex)
            }
            Predicate::GreaterThan | Predicate::SmallerThan => {
                if !field.kind().is_numeric() {
                    return Err(self.invalid_predicate("field is not numeric"));
                }
                let threshold: i64 = self
                    .value
                    .parse()
                    .map_err(|_| self.invalid_predicate(format!("'{}' is not an integer", self.value)))?;
                if self.predicate == Predicate::GreaterThan {
                    Test::GreaterThan(threshold)
                } else {
                    Test::SmallerThan(threshold)
                }
            }
        };

        Ok(CompiledFilter { field, test })
    }

    fn invalid_predicate(&self, reason: impl Into<String>) -> CardbaseError {
        CardbaseError::InvalidPredicate {
            field: self.field.clone(),
            predicate: self.predicate.name().to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Clone, Debug)]
enum Test {
    /// Lower-cased comparison value.
    Equals(String),
    /// Lower-cased comparison value.
    Contains(String),
    Regex(Regex),
    GreaterThan(i64),
    SmallerThan(i64),
}

/// A validated filter, ready to test cards.
#[derive(Clone, Debug)]
pub struct CompiledFilter {
    field: CardField,
    test: Test,
}

impl CompiledFilter {
    /// The field under test.
    #[must_use]
    pub const fn field(&self) -> CardField {
        self.field
    }

    /// Check whether a card passes.
    #[must_use]
    pub fn matches(&self, card: &CardRecord) -> bool {
        match self.field.value(card) {
            FieldValue::Text(value) => self.matches_text(value),
            FieldValue::Integer(value) => self.matches_integer(value),
        }
    }

    fn matches_text(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return self.matches_null();
        };
        match &self.test {
            Test::Equals(needle) => value.to_lowercase() == *needle,
            Test::Contains(needle) => value.to_lowercase().contains(needle.as_str()),
            Test::Regex(regex) => regex.is_match(value),
            Test::GreaterThan(threshold) => {
                dirty_prefix(value).is_some_and(|prefix| prefix > i128::from(*threshold))
            }
            Test::SmallerThan(threshold) => {
                dirty_prefix(value).is_some_and(|prefix| prefix < i128::from(*threshold))
            }
        }
    }

    fn matches_integer(&self, value: Option<i64>) -> bool {
        let Some(value) = value else {
            return self.matches_null();
        };
        match &self.test {
            Test::GreaterThan(threshold) => value > *threshold,
            Test::SmallerThan(threshold) => value < *threshold,
            _ => self.matches_text(Some(&value.to_string())),
        }
    }

    fn matches_null(&self) -> bool {
        match &self.test {
            Test::Equals(needle) | Test::Contains(needle) => needle.is_empty(),
            Test::Regex(_) | Test::GreaterThan(_) | Test::SmallerThan(_) => false,
        }
    }
}

fn dirty_prefix(value: &str) -> Option<i128> {
    split_dirty_number(value).0.map(i128::from)
}

/// Remove every card that does not pass the filter, in place.
///
/// Survivors keep their relative order. The filter is compiled before the
/// vector is touched, so on error `cards` is unchanged.
pub fn filter_by_field(cards: &mut Vec<CardRecord>, filter: &Filter) -> Result<()> {
    let compiled = filter.compile()?;
    let before = cards.len();
    cards.retain(|card| compiled.matches(card));
    tracing::trace!(
        field = %filter.field,
        predicate = %filter.predicate,
        kept = cards.len(),
        dropped = before - cards.len(),
        "filtered cards"
    );
    Ok(())
}
