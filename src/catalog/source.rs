//! Where catalog data comes from.
//!
//! `CatalogSource` is the seam to the outside world. The crate ships two
//! implementations:
//!
//! - `MemorySource`: sets registered up front (tests, offline snapshots)
//! - `FetchSource`: delegates retrieval of raw JSON to a caller-supplied
//!   function and parses it, using `CatalogConfig` to build addresses

use rustc_hash::FxHashMap;

use super::set::{parse_set_list, CardSet, SetInformation};
use crate::config::CatalogConfig;
use crate::error::{CardbaseError, Result};

/// Provider of parsed catalog data.
///
/// Implementations report transport and parse failures as errors; the
/// `Catalog` decides how to degrade them.
pub trait CatalogSource {
    /// Every set the catalog knows about.
    fn set_list(&self) -> Result<Vec<SetInformation>>;

    /// One full set, by its canonical code.
    fn card_set(&self, code: &str) -> Result<CardSet>;
}

/// In-memory catalog.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    sets: Vec<SetInformation>,
    full_sets: FxHashMap<String, CardSet>,
}

impl MemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a full set (builder pattern).
    #[must_use]
    pub fn with_set(mut self, set: CardSet) -> Self {
        self.sets.push(set.info.clone());
        self.full_sets.insert(set.info.code.clone(), set);
        self
    }

    /// Register a set list entry with no card data (builder pattern).
    ///
    /// Fetching the full set will fail, like an upstream 404.
    #[must_use]
    pub fn with_listed_set(mut self, info: SetInformation) -> Self {
        self.sets.push(info);
        self
    }
}

impl CatalogSource for MemorySource {
    fn set_list(&self) -> Result<Vec<SetInformation>> {
        Ok(self.sets.clone())
    }

    fn card_set(&self, code: &str) -> Result<CardSet> {
        self.full_sets
            .get(code)
            .cloned()
            .ok_or_else(|| CardbaseError::CatalogUnavailable {
                reason: format!("no data for set '{code}'"),
            })
    }
}

/// Catalog backed by a caller-supplied fetch function.
///
/// The function receives an address built from `CatalogConfig` and
/// returns the raw document body.
pub struct FetchSource<F> {
    config: CatalogConfig,
    fetch: F,
}

impl<F> FetchSource<F>
where
    F: Fn(&str) -> Result<String>,
{
    /// Create a source that fetches through `fetch`.
    pub fn new(config: CatalogConfig, fetch: F) -> Self {
        Self { config, fetch }
    }

    /// The configuration used to build addresses.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

impl<F> CatalogSource for FetchSource<F>
where
    F: Fn(&str) -> Result<String>,
{
    fn set_list(&self) -> Result<Vec<SetInformation>> {
        let body = (self.fetch)(&self.config.set_list_url())?;
        parse_set_list(&body)
    }

    fn card_set(&self, code: &str) -> Result<CardSet> {
        let body = (self.fetch)(&self.config.set_url(code))?;
        CardSet::from_json_str(&body)
    }
}

impl<F> std::fmt::Debug for FetchSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchSource")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
