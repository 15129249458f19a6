//! On-disk catalog file format.
//!
//! Kept separate from the domain types so the file layout can evolve through
//! the `version` field without touching the presenter.

use crate::domain::{AvailableCatalog, InstalledCatalog, InternalCatalog};
use serde::{Deserialize, Serialize};

/// Current version of the catalog file format.
pub const CATALOG_FILE_VERSION: u32 = 1;

/// Top-level structure of a catalogs JSON file.
///
/// ```json
/// {
///   "version": 1,
///   "internal": [{ "source_id": 0, "name": "Local source", "lang": "other" }],
///   "installed": [],
///   "available": [{
///     "source_id": 2499283573021220255,
///     "name": "MangaDex",
///     "lang": "en",
///     "pkg_name": "ext.mangadex",
///     "version_name": "1.2.150",
///     "version_code": 150
///   }],
///   "updated_at": 1700000000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub version: u32,

    #[serde(default)]
    pub internal: Vec<InternalCatalog>,

    #[serde(default)]
    pub installed: Vec<InstalledCatalog>,

    #[serde(default)]
    pub available: Vec<AvailableCatalog>,

    /// Unix timestamp of the last remote index refresh, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Default for CatalogFile {
    fn default() -> Self {
        Self {
            version: CATALOG_FILE_VERSION,
            internal: Vec::new(),
            installed: Vec::new(),
            available: Vec::new(),
            updated_at: None,
        }
    }
}
