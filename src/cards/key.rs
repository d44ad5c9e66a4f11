//! Card identity.
//!
//! Two records denote the same physical card iff their set code and
//! collector number are equal. `CardKey` is that pair and is the key of
//! every container map.

use serde::{Deserialize, Serialize};

/// Identity of one physical card: `(setCode, number)`.
///
/// Ordering is plain lexicographic on `(set_code, number)`; it exists so
/// saved documents list cards deterministically, not for display sorting.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardKey {
    /// Upstream set code, e.g. "M15".
    pub set_code: String,
    /// Collector number as printed, e.g. "281" or "31a".
    pub number: String,
}

impl CardKey {
    /// Create a new card key.
    pub fn new(set_code: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            set_code: set_code.into(),
            number: number.into(),
        }
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}", self.set_code, self.number)
    }
}
