//! Catalog domain model.
//!
//! A catalog is a manga source plugin seen at one of three lifecycle stages:
//! bundled with the application ([`InternalCatalog`]), installed on the device
//! ([`InstalledCatalog`]), or discoverable from a remote index
//! ([`AvailableCatalog`]). The [`Catalog`] enum unifies the three so the
//! presenter can place them in a single list.

use serde::{Deserialize, Serialize};

/// A source bundled with the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalCatalog {
    /// Stable source identifier.
    pub source_id: i64,
    /// Display name of the source.
    pub name: String,
    /// Language code served by the source (e.g. `"en"`, `"pt-BR"`).
    pub lang: String,
    /// Short description shown under the name.
    #[serde(default)]
    pub description: String,
}

/// A source plugin installed on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledCatalog {
    /// Stable source identifier.
    pub source_id: i64,
    /// Display name of the source.
    pub name: String,
    /// Language code served by the source.
    pub lang: String,
    /// Short description shown under the name.
    #[serde(default)]
    pub description: String,
    /// Package the source was installed from.
    pub pkg_name: String,
    /// Human-readable version (e.g. `"1.2.3"`).
    pub version_name: String,
    /// Monotonic version number used for update checks.
    pub version_code: i32,
    /// Whether the source serves adult content.
    #[serde(default)]
    pub nsfw: bool,
}

/// A source plugin listed by the remote index but not installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableCatalog {
    /// Source identifier announced by the index.
    pub source_id: i64,
    /// Display name of the source.
    pub name: String,
    /// Language code served by the source.
    pub lang: String,
    /// Short description shown under the name.
    #[serde(default)]
    pub description: String,
    /// Package to install.
    pub pkg_name: String,
    /// Human-readable version.
    pub version_name: String,
    /// Monotonic version number.
    pub version_code: i32,
    /// Whether the source serves adult content.
    #[serde(default)]
    pub nsfw: bool,
    /// Icon location in the remote index.
    #[serde(default)]
    pub icon_url: Option<String>,
    /// Archive file name in the remote index.
    #[serde(default)]
    pub apk_name: Option<String>,
}

/// A catalog at any lifecycle stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Catalog {
    Internal(InternalCatalog),
    Installed(InstalledCatalog),
    Available(AvailableCatalog),
}

impl Catalog {
    /// Language code of the catalog.
    #[must_use]
    pub fn lang(&self) -> &str {
        match self {
            Self::Internal(c) => &c.lang,
            Self::Installed(c) => &c.lang,
            Self::Available(c) => &c.lang,
        }
    }

    /// Display name of the catalog.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Internal(c) => &c.name,
            Self::Installed(c) => &c.name,
            Self::Available(c) => &c.name,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Internal(c) => &c.description,
            Self::Installed(c) => &c.description,
            Self::Available(c) => &c.description,
        }
    }

    /// Version label, if the catalog is versioned independently of the app.
    #[must_use]
    pub fn version_name(&self) -> Option<&str> {
        match self {
            Self::Internal(_) => None,
            Self::Installed(c) => Some(&c.version_name),
            Self::Available(c) => Some(&c.version_name),
        }
    }

    #[must_use]
    pub const fn is_nsfw(&self) -> bool {
        match self {
            Self::Internal(_) => false,
            Self::Installed(c) => c.nsfw,
            Self::Available(c) => c.nsfw,
        }
    }
}

impl From<InternalCatalog> for Catalog {
    fn from(catalog: InternalCatalog) -> Self {
        Self::Internal(catalog)
    }
}

impl From<InstalledCatalog> for Catalog {
    fn from(catalog: InstalledCatalog) -> Self {
        Self::Installed(catalog)
    }
}

impl From<AvailableCatalog> for Catalog {
    fn from(catalog: AvailableCatalog) -> Self {
        Self::Available(catalog)
    }
}
