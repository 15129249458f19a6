//! Catalogs: the catalog-source browser of a manga reader, for the terminal.
//!
//! A catalog is a source of manga. Catalogs come in three flavors: built into
//! the application (internal), installed on the device, and available for
//! install from a remote index. This crate merges the three lists with a
//! user-selected language filter into one render-ready screen state.
//!
//! Catalogs provides:
//! - A presenter that recombines the three catalog streams on a background
//!   thread and publishes one immutable view state per change
//! - Installed, internal and language-filtered available sections, with a
//!   language selector placed before the available catalogs
//! - Language choices ordered by the device locales, with unflagged codes
//!   grouped under a single "Others" entry
//! - Catalog lists loaded from a versioned JSON file, reloadable at runtime
//! - Light, dark and AMOLED themes from TOML, rendered as ANSI text with
//!   Unicode-aware column widths
//! - OpenTelemetry tracing to a rotating OTLP JSON file

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← stdin commands
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Presenter (presenter/)                             │  ← event loop thread
//! │  - Actions and pure reducer                         │
//! │  - Combine-latest recombination                     │
//! │  - Language selector ordering                       │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Repository    │   │ Reactive      │
//! │ (ui/)         │   │ (repository/) │   │ (reactive/)   │
//! │ - Rendering   │   │ - JSON file   │   │ - Relay       │
//! │ - Theming     │   │ - In-memory   │   │ - Subscription│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Catalog and language types (domain/)             │
//! │  - Data paths and locale detection (infrastructure/)│
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Settings come from, lowest precedence first: built-in defaults, a TOML
//! file named by the `config` key, then `key=value` arguments.
//!
//! ```toml
//! catalogs_file = "~/.local/share/catalogs/catalogs.json"
//! theme = "dark"
//! locales = ["fr-FR", "en"]
//! trace_level = "debug"
//! width = 100
//! ```
//!
//! # Example
//!
//! ```rust
//! use catalogs::presenter::CatalogsPresenter;
//! use catalogs::repository::InMemoryCatalogRepository;
//! use catalogs::ui::{render, Theme};
//!
//! let repository = InMemoryCatalogRepository::new();
//! let presenter = CatalogsPresenter::new(&repository, vec!["en".to_string()])?;
//!
//! let screen = render(&presenter.state(), &Theme::default(), 80);
//! assert!(screen.contains("Catalogs"));
//! # Ok::<(), catalogs::CatalogsError>(())
//! ```

pub mod domain;
pub mod infrastructure;
pub mod input;
pub mod observability;
pub mod presenter;
pub mod reactive;
pub mod repository;
pub mod ui;

pub use domain::{
    AvailableCatalog, Catalog, CatalogsError, InstalledCatalog, InternalCatalog, Language,
    LanguageChoice, LanguageChoices, Result,
};
pub use presenter::{CatalogsPresenter, CatalogsViewState};
pub use ui::Theme;

use crate::infrastructure::{detect_device_locales, expand_tilde, get_data_dir};
use crate::repository::JsonCatalogRepository;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default terminal width when none is configured.
pub const DEFAULT_WIDTH: usize = 80;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file holding the catalog lists.
    ///
    /// Default: `<data_dir>/catalogs.json`
    pub catalogs_file: PathBuf,

    /// Directory for the catalogs file and trace output.
    pub data_dir: PathBuf,

    /// Built-in theme: `light`, `dark` or `amoled`. Ignored if `theme_file`
    /// is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme; see [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Preferred locales, most preferred first. Empty means detect from the
    /// environment.
    pub device_locales: Vec<String>,

    /// Filter directive for spans, e.g. `debug` or `catalogs=trace`.
    /// Default: `"info"`
    pub trace_level: Option<String>,

    /// Render width in columns.
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = get_data_dir();
        Self {
            catalogs_file: data_dir.join("catalogs.json"),
            data_dir,
            theme_name: None,
            theme_file: None,
            device_locales: Vec::new(),
            trace_level: None,
            width: DEFAULT_WIDTH,
        }
    }
}

/// On-disk configuration; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    catalogs_file: Option<String>,
    data_dir: Option<String>,
    theme: Option<String>,
    theme_file: Option<String>,
    locales: Option<Vec<String>>,
    trace_level: Option<String>,
    width: Option<usize>,
}

impl Config {
    /// Builds the configuration from `key=value` arguments.
    ///
    /// If a `config` key is present, that TOML file is applied first and the
    /// remaining arguments override it.
    ///
    /// # Keys
    ///
    /// - `config`: path to a TOML config file
    /// - `catalogs_file`, `data_dir`: paths, `~` expanded
    /// - `theme`, `theme_file`: theme selection
    /// - `locales`: comma-separated locale list
    /// - `trace_level`: span filter
    /// - `width`: render width in columns
    ///
    /// # Errors
    ///
    /// Returns [`CatalogsError::Config`] for an unknown key, an unparsable
    /// width, or an invalid config file.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use catalogs::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("locales".to_string(), "fr-FR, en".to_string());
    /// map.insert("width".to_string(), "100".to_string());
    ///
    /// let config = Config::from_map(&map)?;
    /// assert_eq!(config.device_locales, vec!["fr-FR", "en"]);
    /// assert_eq!(config.width, 100);
    /// # Ok::<(), catalogs::CatalogsError>(())
    /// ```
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = match map.get("config") {
            Some(path) => Self::from_file(expand_tilde(path))?,
            None => Self::default(),
        };

        for (key, value) in map {
            config.apply(key, value)?;
        }
        Ok(config)
    }

    /// Loads a TOML config file over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogsError::Config`] if the file cannot be read, is not
    /// valid TOML, or has unknown keys.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            CatalogsError::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        let file: ConfigFile = toml::from_str(&contents)
            .map_err(|e| CatalogsError::Config(format!("invalid config file: {e}")))?;

        let mut config = Self::default();
        if let Some(dir) = file.data_dir {
            config.set_data_dir(&dir);
        }
        if let Some(catalogs_file) = file.catalogs_file {
            config.catalogs_file = PathBuf::from(expand_tilde(&catalogs_file));
        }
        config.theme_name = file.theme.or(config.theme_name);
        config.theme_file = file.theme_file.or(config.theme_file);
        config.device_locales = file.locales.unwrap_or_default();
        config.trace_level = file.trace_level.or(config.trace_level);
        config.width = file.width.unwrap_or(config.width);
        Ok(config)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "config" => {}
            "catalogs_file" => self.catalogs_file = PathBuf::from(expand_tilde(value)),
            "data_dir" => self.set_data_dir(value),
            "theme" => self.theme_name = Some(value.to_string()),
            "theme_file" => self.theme_file = Some(expand_tilde(value)),
            "locales" => {
                self.device_locales = value
                    .split(',')
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(String::from)
                    .collect();
            }
            "trace_level" => self.trace_level = Some(value.to_string()),
            "width" => {
                self.width = value
                    .parse::<usize>()
                    .ok()
                    .filter(|w| *w > 0)
                    .ok_or_else(|| CatalogsError::Config(format!("invalid width: {value:?}")))?;
            }
            other => return Err(CatalogsError::Config(format!("unknown option: {other}"))),
        }
        Ok(())
    }

    /// Moves the data directory, carrying the default catalogs file along.
    fn set_data_dir(&mut self, dir: &str) {
        let dir = PathBuf::from(expand_tilde(dir));
        if self.catalogs_file == self.data_dir.join("catalogs.json") {
            self.catalogs_file = dir.join("catalogs.json");
        }
        self.data_dir = dir;
    }

    /// Configured locales, or the detected ones when none are set.
    #[must_use]
    pub fn resolved_locales(&self) -> Vec<String> {
        if self.device_locales.is_empty() {
            detect_device_locales()
        } else {
            self.device_locales.clone()
        }
    }
}

/// Resolves the theme: `theme_file`, then `theme_name`, then the default.
///
/// A theme that fails to load is logged and replaced by the default.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// A running catalogs screen: presenter, the repository feeding it, and the
/// theme to draw it with.
#[derive(Debug)]
pub struct CatalogsApp {
    pub presenter: CatalogsPresenter,
    pub repository: JsonCatalogRepository,
    pub theme: Theme,
}

/// Opens the catalogs file and starts the presenter over it.
///
/// # Errors
///
/// Returns an error if the catalogs file exists but cannot be loaded, or if
/// the presenter thread cannot be started.
///
/// # Example
///
/// ```rust
/// use catalogs::{initialize, Config};
///
/// let dir = std::env::temp_dir().join("catalogs-doc-init");
/// let config = Config {
///     catalogs_file: dir.join("missing.json"),
///     device_locales: vec!["en".to_string()],
///     ..Default::default()
/// };
///
/// let app = initialize(&config)?;
/// assert_eq!(app.repository.file_path(), dir.join("missing.json"));
/// # Ok::<(), catalogs::CatalogsError>(())
/// ```
pub fn initialize(config: &Config) -> Result<CatalogsApp> {
    let _span = tracing::info_span!("initialize", catalogs_file = ?config.catalogs_file).entered();

    let theme = load_theme(config);
    let repository = JsonCatalogRepository::open(&config.catalogs_file)?;
    let presenter = CatalogsPresenter::new(&repository, config.resolved_locales())?;

    tracing::info!(theme = %theme.name, "catalogs initialized");
    Ok(CatalogsApp {
        presenter,
        repository,
        theme,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.catalogs_file, config.data_dir.join("catalogs.json"));
        assert!(config.device_locales.is_empty());
    }

    #[test]
    fn arguments_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "theme = \"dark\"\nwidth = 120\nlocales = [\"ja\"]\ntrace_level = \"debug\""
        )
        .unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config =
            Config::from_map(&map(&[("config", &path), ("width", "60"), ("theme", "amoled")]))
                .unwrap();

        assert_eq!(config.width, 60);
        assert_eq!(config.theme_name.as_deref(), Some("amoled"));
        assert_eq!(config.device_locales, vec!["ja"]);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn data_dir_moves_default_catalogs_file() {
        let config = Config::from_map(&map(&[("data_dir", "/srv/catalogs")])).unwrap();
        assert_eq!(config.catalogs_file, PathBuf::from("/srv/catalogs/catalogs.json"));

        let config = Config::from_map(&map(&[
            ("catalogs_file", "/tmp/c.json"),
            ("data_dir", "/srv/catalogs"),
        ]))
        .unwrap();
        assert_eq!(config.catalogs_file, PathBuf::from("/tmp/c.json"));
    }

    #[test]
    fn invalid_values_are_config_errors() {
        for pairs in [
            map(&[("width", "wide")]),
            map(&[("width", "0")]),
            map(&[("colour", "red")]),
            map(&[("config", "/nonexistent/catalogs.toml")]),
        ] {
            let err = Config::from_map(&pairs).unwrap_err();
            assert!(matches!(err, CatalogsError::Config(_)), "{pairs:?}");
        }
    }

    #[test]
    fn unknown_config_file_key_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "colour = \"red\"").unwrap();

        assert!(matches!(
            Config::from_file(file.path()),
            Err(CatalogsError::Config(_))
        ));
    }

    #[test]
    fn configured_locales_skip_detection() {
        let config = Config {
            device_locales: vec!["de".to_string()],
            ..Config::default()
        };
        assert_eq!(config.resolved_locales(), vec!["de"]);
        assert!(!Config::default().resolved_locales().is_empty());
    }

    #[test]
    fn theme_resolution_falls_back() {
        let named = Config {
            theme_name: Some("dark".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&named).name, "dark");

        let unknown = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&unknown), Theme::default());

        let missing_file = Config {
            theme_name: Some("dark".to_string()),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&missing_file), Theme::default());
    }
}
