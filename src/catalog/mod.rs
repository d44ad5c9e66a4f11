//! Catalog lookup: resolving set code + number to upstream card data.
//!
//! ## Key Types
//!
//! - `SetInformation`: one entry of the upstream set list
//! - `CardSet`: a full set, cards indexed by collector number
//! - `CatalogSource`: where parsed data comes from
//! - `Catalog`: caching front-end with lenient set-code matching
//!
//! ## Failure Policy
//!
//! The `try_*` methods propagate source errors unchanged. The plain
//! methods log them with `warn!` and answer "not found", so a flaky
//! upstream never takes down an interactive session.

pub mod set;
pub mod source;

pub use set::{parse_set_list, CardSet, SetInformation};
pub use source::{CatalogSource, FetchSource, MemorySource};

use rustc_hash::FxHashMap;

use crate::cards::CardRecord;
use crate::error::Result;

/// Caching catalog over a `CatalogSource`.
///
/// ## Example
///
/// ```
/// use cardbase::cards::CardRecord;
/// use cardbase::catalog::{Catalog, CardSet, MemorySource, SetInformation};
///
/// let m15 = CardSet::new(
///     SetInformation::new("Magic 2015 Core Set", "M15", "2014-07-18"),
///     vec![CardRecord::new("", "281").with_name("Shivan Dragon")],
/// );
/// let mut catalog = Catalog::new(MemorySource::new().with_set(m15));
///
/// let dragon = catalog.card("m15", "281").unwrap();
/// assert_eq!(dragon.set_code.as_deref(), Some("M15"));
/// assert!(catalog.card("m15", "999").is_none());
/// ```
#[derive(Debug)]
pub struct Catalog<S> {
    source: S,
    set_list: Option<Vec<SetInformation>>,
    sets: FxHashMap<String, CardSet>,
}

impl<S: CatalogSource> Catalog<S> {
    /// Create a catalog with empty caches.
    pub fn new(source: S) -> Self {
        Self {
            source,
            set_list: None,
            sets: FxHashMap::default(),
        }
    }

    /// The set list, fetched once and cached.
    pub fn try_set_list(&mut self) -> Result<&[SetInformation]> {
        if self.set_list.is_none() {
            let sets = self.source.set_list()?;
            tracing::info!(sets = sets.len(), "fetched set list");
            self.set_list = Some(sets);
        }
        Ok(self.set_list.as_deref().unwrap_or_default())
    }

    /// The set list, or an empty list if it cannot be fetched.
    ///
    /// A failed fetch is not cached; the next call retries.
    pub fn set_list(&mut self) -> &[SetInformation] {
        if let Err(err) = self.try_set_list() {
            tracing::warn!(error = %err, "set list unavailable");
            return &[];
        }
        self.set_list.as_deref().unwrap_or_default()
    }

    /// Canonical spelling of a set code, matched case-insensitively.
    pub fn try_validate_set_code(&mut self, code: &str) -> Result<Option<String>> {
        Ok(self
            .try_set_list()?
            .iter()
            .find(|set| set.code.eq_ignore_ascii_case(code))
            .map(|set| set.code.clone()))
    }

    /// Canonical spelling of a set code, `None` if unknown or unavailable.
    pub fn validate_set_code(&mut self, code: &str) -> Option<String> {
        self.set_list()
            .iter()
            .find(|set| set.code.eq_ignore_ascii_case(code))
            .map(|set| set.code.clone())
    }

    /// A full set, fetched once and cached.
    ///
    /// `Ok(None)` means the code is not in the set list.
    pub fn try_card_set(&mut self, code: &str) -> Result<Option<&CardSet>> {
        let Some(code) = self.try_validate_set_code(code)? else {
            return Ok(None);
        };
        if !self.sets.contains_key(&code) {
            let set = self.source.card_set(&code)?;
            tracing::info!(set = %code, cards = set.cards().len(), "fetched card set");
            self.sets.insert(code.clone(), set);
        }
        Ok(self.sets.get(&code))
    }

    /// A full set, `None` if unknown or unavailable.
    pub fn card_set(&mut self, code: &str) -> Option<&CardSet> {
        match self.try_card_set(code) {
            Ok(set) => set,
            Err(err) => {
                tracing::warn!(set = code, error = %err, "card set unavailable, treating as not found");
                None
            }
        }
    }

    /// A card by set code and collector number.
    pub fn try_card(&mut self, code: &str, number: &str) -> Result<Option<CardRecord>> {
        Ok(self
            .try_card_set(code)?
            .and_then(|set| set.card_by_number(number))
            .cloned())
    }

    /// A card by set code and collector number, `None` if not found or
    /// unavailable.
    pub fn card(&mut self, code: &str, number: &str) -> Option<CardRecord> {
        self.card_set(code)
            .and_then(|set| set.card_by_number(number))
            .cloned()
    }

    /// Forget every cached set and the set list.
    pub fn clear_cache(&mut self) {
        self.set_list = None;
        self.sets.clear();
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
