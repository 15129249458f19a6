//! JSON file-backed catalog repository.
//!
//! Loads the three catalog lists from a single human-readable JSON file (see
//! [`CatalogFile`]) and serves them through an [`InMemoryCatalogRepository`].
//! Calling [`JsonCatalogRepository::reload`] re-reads the file and re-emits only
//! the lists whose content changed.

use crate::domain::error::{CatalogsError, Result};
use crate::reactive::Subscription;
use crate::repository::backend::{CatalogObserver, CatalogRepository};
use crate::repository::memory::InMemoryCatalogRepository;
use crate::repository::models::{CatalogFile, CATALOG_FILE_VERSION};
use crate::domain::{AvailableCatalog, InstalledCatalog, InternalCatalog};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Catalog repository reading from a JSON file.
///
/// A missing file is treated as an empty catalog set, so a fresh install
/// starts with nothing instead of failing.
///
/// # Examples
///
/// ```no_run
/// use catalogs::repository::JsonCatalogRepository;
///
/// let repository = JsonCatalogRepository::open("/tmp/catalogs.json")?;
/// let republished = repository.reload()?;
/// # Ok::<(), catalogs::CatalogsError>(())
/// ```
#[derive(Debug)]
pub struct JsonCatalogRepository {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// Relays serving the loaded lists.
    store: InMemoryCatalogRepository,

    /// Remote index refresh time from the last load.
    updated_at: Mutex<Option<i64>>,
}

impl JsonCatalogRepository {
    /// Opens the repository and loads the file once.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not valid
    /// JSON, or declares a newer format version.
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        let _span = tracing::debug_span!("open_catalog_file", path = ?file_path).entered();

        let data = Self::load_from_file(&file_path)?;
        let store = InMemoryCatalogRepository::new();
        store.set_internal(data.internal);
        store.set_installed(data.installed);
        store.set_available(data.available);

        tracing::debug!(
            internal = store.internal().len(),
            installed = store.installed().len(),
            available = store.available().len(),
            "catalog file loaded"
        );

        Ok(Self {
            file_path,
            store,
            updated_at: Mutex::new(data.updated_at),
        })
    }

    /// Re-reads the file and re-emits every list whose content changed.
    ///
    /// Returns the number of lists that were republished (0 to 3).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. The previously
    /// loaded lists stay in place.
    pub fn reload(&self) -> Result<usize> {
        let _span = tracing::debug_span!("reload_catalog_file", path = ?self.file_path).entered();

        let data = Self::load_from_file(&self.file_path)?;
        let mut republished = 0;

        if data.internal != self.store.internal() {
            self.store.set_internal(data.internal);
            republished += 1;
        }
        if data.installed != self.store.installed() {
            self.store.set_installed(data.installed);
            republished += 1;
        }
        if data.available != self.store.available() {
            self.store.set_available(data.available);
            republished += 1;
        }

        *self
            .updated_at
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = data.updated_at;

        tracing::debug!(republished, "catalog file reloaded");
        Ok(republished)
    }

    /// Unix timestamp of the last remote index refresh recorded in the file.
    #[must_use]
    pub fn updated_at(&self) -> Option<i64> {
        *self.updated_at.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<CatalogFile> {
        if !path.exists() {
            tracing::debug!(path = ?path, "catalog file missing, starting empty");
            return Ok(CatalogFile::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let data: CatalogFile = serde_json::from_str(&contents).map_err(|e| {
            CatalogsError::Repository(format!("Failed to parse {}: {e}", path.display()))
        })?;

        if data.version > CATALOG_FILE_VERSION {
            return Err(CatalogsError::Repository(format!(
                "Unsupported catalog file version {} (expected <= {CATALOG_FILE_VERSION})",
                data.version
            )));
        }

        Ok(data)
    }
}

impl CatalogRepository for JsonCatalogRepository {
    fn subscribe_internal(&self, observer: CatalogObserver<InternalCatalog>) -> Subscription {
        self.store.subscribe_internal(observer)
    }

    fn subscribe_installed(&self, observer: CatalogObserver<InstalledCatalog>) -> Subscription {
        self.store.subscribe_installed(observer)
    }

    fn subscribe_available(&self, observer: CatalogObserver<AvailableCatalog>) -> Subscription {
        self.store.subscribe_available(observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "version": 1,
        "internal": [{ "source_id": 0, "name": "Local source", "lang": "other" }],
        "available": [
            { "source_id": 1, "name": "MangaDex", "lang": "en", "pkg_name": "ext.mangadex",
              "version_name": "1.2.150", "version_code": 150 },
            { "source_id": 2, "name": "Lector", "lang": "es", "pkg_name": "ext.lector",
              "version_name": "1.0.3", "version_code": 3 }
        ],
        "updated_at": 1700000000
    }"#;

    fn write_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("catalogs.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_lists_and_defaults_missing_ones() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, SAMPLE);

        let repository = JsonCatalogRepository::open(&path).unwrap();

        assert_eq!(repository.store.internal().len(), 1);
        assert!(repository.store.installed().is_empty());
        assert_eq!(repository.store.available().len(), 2);
        assert_eq!(repository.updated_at(), Some(1_700_000_000));
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonCatalogRepository::open(dir.path().join("absent.json")).unwrap();

        assert!(repository.store.available().is_empty());
        assert_eq!(repository.updated_at(), None);
    }

    #[test]
    fn invalid_json_is_a_repository_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "{ not json");

        let err = JsonCatalogRepository::open(&path).unwrap_err();
        assert!(matches!(err, CatalogsError::Repository(_)));
    }

    #[test]
    fn newer_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, r#"{ "version": 2 }"#);

        assert!(JsonCatalogRepository::open(&path).is_err());
    }

    #[test]
    fn reload_republishes_only_changed_lists() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, SAMPLE);
        let repository = JsonCatalogRepository::open(&path).unwrap();

        assert_eq!(repository.reload().unwrap(), 0);

        let changed = SAMPLE.replace(r#""name": "Lector""#, r#""name": "Lector Manga""#);
        write_file(&dir, &changed);

        assert_eq!(repository.reload().unwrap(), 1);
        assert_eq!(repository.store.available()[1].name, "Lector Manga");
    }
}
