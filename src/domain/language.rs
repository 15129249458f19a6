//! Language codes and the language filter applied to available catalogs.
//!
//! [`Language`] wraps a catalog language code and knows the flag emoji used to
//! display it. [`LanguageChoice`] is the filter the user selects over the
//! available catalogs, and [`LanguageChoices`] is the selector item placed in
//! the merged catalog list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flag emoji for language codes that have a recognizable flag.
///
/// Codes missing from this table are grouped under [`LanguageChoice::Others`].
const LANGUAGE_EMOJIS: &[(&str, &str)] = &[
    ("ar", "🇸🇦"),
    ("bg", "🇧🇬"),
    ("bn", "🇧🇩"),
    ("ca", "🇦🇩"),
    ("cs", "🇨🇿"),
    ("da", "🇩🇰"),
    ("de", "🇩🇪"),
    ("el", "🇬🇷"),
    ("en", "🇬🇧"),
    ("es", "🇪🇸"),
    ("es-419", "🇲🇽"),
    ("fa", "🇮🇷"),
    ("fi", "🇫🇮"),
    ("fil", "🇵🇭"),
    ("fr", "🇫🇷"),
    ("he", "🇮🇱"),
    ("hi", "🇮🇳"),
    ("hu", "🇭🇺"),
    ("id", "🇮🇩"),
    ("it", "🇮🇹"),
    ("ja", "🇯🇵"),
    ("ko", "🇰🇷"),
    ("ms", "🇲🇾"),
    ("my", "🇲🇲"),
    ("nl", "🇳🇱"),
    ("no", "🇳🇴"),
    ("pl", "🇵🇱"),
    ("pt", "🇵🇹"),
    ("pt-BR", "🇧🇷"),
    ("ro", "🇷🇴"),
    ("ru", "🇷🇺"),
    ("sv", "🇸🇪"),
    ("th", "🇹🇭"),
    ("tr", "🇹🇷"),
    ("uk", "🇺🇦"),
    ("vi", "🇻🇳"),
    ("zh", "🇨🇳"),
    ("zh-Hans", "🇨🇳"),
    ("zh-Hant", "🇹🇼"),
];

/// A catalog language identified by its code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language {
    pub code: String,
}

impl Language {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Returns the flag emoji for this language, if the code is known.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalogs::Language;
    ///
    /// assert_eq!(Language::new("ja").emoji(), Some("🇯🇵"));
    /// assert_eq!(Language::new("xx").emoji(), None);
    /// ```
    #[must_use]
    pub fn emoji(&self) -> Option<&'static str> {
        LANGUAGE_EMOJIS
            .iter()
            .find(|(code, _)| *code == self.code)
            .map(|(_, emoji)| *emoji)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// The active filter over available catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum LanguageChoice {
    /// Every language passes.
    #[default]
    All,
    /// Only catalogs with exactly this code pass.
    One(Language),
    /// Catalogs whose code is one of these (languages without a known flag).
    Others(Vec<Language>),
}

impl LanguageChoice {
    /// Returns whether a catalog with language `code` passes this filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalogs::{Language, LanguageChoice};
    ///
    /// assert!(LanguageChoice::All.matches("xx"));
    /// assert!(LanguageChoice::One(Language::new("en")).matches("en"));
    /// assert!(!LanguageChoice::One(Language::new("en")).matches("en-GB"));
    /// ```
    #[must_use]
    pub fn matches(&self, code: &str) -> bool {
        match self {
            Self::All => true,
            Self::One(language) => language.code == code,
            Self::Others(languages) => languages.iter().any(|l| l.code == code),
        }
    }

    /// Short label used by selector chips and logs.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::One(language) => language.emoji().map_or_else(
                || language.code.to_uppercase(),
                |emoji| format!("{emoji} {}", language.code.to_uppercase()),
            ),
            Self::Others(_) => "Others".to_string(),
        }
    }
}

/// Language selector placed between the installed and available sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageChoices {
    /// Selectable choices, `All` first.
    pub choices: Vec<LanguageChoice>,
    /// The choice currently applied.
    pub selected: LanguageChoice,
}
