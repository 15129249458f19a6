//! Data directory resolution and path expansion.
//!
//! The catalog file (`catalogs.json`) and the trace file live in one data
//! directory, following the XDG base directory layout.

use std::env;
use std::path::PathBuf;

/// Returns the data directory for catalogs storage.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/catalogs`
/// 2. `$HOME/.local/share/catalogs`
/// 3. `./.catalogs` when neither variable is set
///
/// # Examples
///
/// ```
/// use catalogs::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("catalogs") || data_dir.ends_with(".catalogs"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(
        env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        env::var_os("HOME").map(PathBuf::from),
    )
}

fn data_dir_from(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    match (xdg_data_home, home) {
        (Some(xdg), _) if xdg.is_absolute() => xdg.join("catalogs"),
        (_, Some(home)) => home.join(".local").join("share").join("catalogs"),
        _ => PathBuf::from(".catalogs"),
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, or any path when `HOME` is unset, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use catalogs::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    let Some(home) = home else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}
