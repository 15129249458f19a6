//! Color themes and ANSI escape sequence generation.
//!
//! Themes describe the look of every catalogs screen element: toolbar, text
//! appearances, section headers, language chips, row buttons and dividers.
//! They are plain TOML, either built in or loaded from a file.
//!
//! # Built-in Themes
//!
//! - `light`: blue toolbar on a light background (default)
//! - `dark`: dark toolbar with blue accents
//! - `amoled`: black background, no toolbar fill
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! toolbar_fg = "#ffffff"
//! toolbar_bg = "#54759e"        # optional
//! text_primary = "#212121"
//! text_secondary = "#757575"
//! section_header_fg = "#54759e"
//! chip_fg = "#424242"
//! chip_bg = "#e0e0e0"
//! chip_selected_fg = "#ffffff"
//! chip_selected_bg = "#54759e"
//! button_fg = "#54759e"
//! divider = "#dddddd"
//! empty_state_fg = "#757575"
//! nsfw_fg = "#e53935"           # optional, defaults to red
//! ```
//!
//! # Example
//!
//! ```rust
//! use catalogs::ui::Theme;
//!
//! let theme = Theme::from_name("dark").unwrap();
//! let title = format!("{}Catalogs{}", Theme::fg(&theme.colors.toolbar_fg), Theme::reset());
//! assert!(title.starts_with("\u{1b}[38;2;255;255;255m"));
//! ```

use crate::domain::{CatalogsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 3] = ["light", "dark", "amoled"];

/// Named color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for each screen element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub toolbar_fg: String,
    /// Toolbar fill; unset themes draw the toolbar on the terminal background.
    #[serde(default)]
    pub toolbar_bg: Option<String>,

    /// Catalog names.
    pub text_primary: String,
    /// Language and version details under a name.
    pub text_secondary: String,

    pub section_header_fg: String,

    pub chip_fg: String,
    pub chip_bg: String,
    pub chip_selected_fg: String,
    pub chip_selected_bg: String,

    /// Row action labels (`BROWSE`, `INSTALL`).
    pub button_fg: String,
    pub divider: String,
    pub empty_state_fg: String,

    #[serde(default = "default_nsfw_fg")]
    pub nsfw_fg: String,
}

fn default_nsfw_fg() -> String {
    "#e53935".to_string()
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "light" => include_str!("../../themes/light.toml"),
            "dark" => include_str!("../../themes/dark.toml"),
            "amoled" => include_str!("../../themes/amoled.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogsError::Theme`] if the file cannot be read or does not
    /// parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            CatalogsError::Theme(format!("failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| CatalogsError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// `#rrggbb` to RGB; malformed input renders white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The `light` theme.
    ///
    /// # Panics
    ///
    /// Panics if the bundled `light` theme fails to parse, which the theme
    /// tests rule out.
    fn default() -> Self {
        Self::from_name("light").expect("built-in light theme should always parse")
    }
}
