//! Configuration.
//!
//! - `CatalogConfig`: where upstream set data is published
//! - `PersistenceConfig`: how collection documents are written

use serde::{Deserialize, Serialize};

/// Location of the upstream catalog.
///
/// The crate never opens a connection itself; a `FetchSource` asks the
/// caller's transport for the addresses built here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base address, including the trailing slash.
    pub base_url: String,

    /// File name of the set list under `base_url`.
    pub set_list_file: String,

    /// Suffix appended to a set code to address the set's data.
    pub set_file_extension: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://mtgjson.com/json/".to_string(),
            set_list_file: "SetList.json".to_string(),
            set_file_extension: ".json".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Use a different base address.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a different set list file name.
    #[must_use]
    pub fn with_set_list_file(mut self, file: impl Into<String>) -> Self {
        self.set_list_file = file.into();
        self
    }

    /// Address of the set list.
    #[must_use]
    pub fn set_list_url(&self) -> String {
        format!("{}{}", self.base_url, self.set_list_file)
    }

    /// Address of one set's full data.
    #[must_use]
    pub fn set_url(&self, set_code: &str) -> String {
        format!("{}{}{}", self.base_url, set_code, self.set_file_extension)
    }
}

/// Collection document output options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Pretty-print saved documents (default: true).
    pub pretty: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl PersistenceConfig {
    /// Write compact single-line documents.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}
