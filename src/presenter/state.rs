//! View state published by the presenter.
//!
//! [`CatalogsViewState`] is an immutable snapshot: the reducer builds a new one
//! for every action and the presenter publishes it wholesale. The view only
//! ever reads it.

use crate::domain::{Catalog, LanguageChoice, LanguageChoices};
use serde::{Deserialize, Serialize};

/// One row of the merged catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum CatalogItem {
    /// An internal, installed or available catalog.
    Catalog { catalog: Catalog },
    /// The language selector heading the available section.
    LanguageChoices { choices: LanguageChoices },
}

impl CatalogItem {
    #[must_use]
    pub const fn as_catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Catalog { catalog } => Some(catalog),
            Self::LanguageChoices { .. } => None,
        }
    }

    #[must_use]
    pub const fn as_language_choices(&self) -> Option<&LanguageChoices> {
        match self {
            Self::Catalog { .. } => None,
            Self::LanguageChoices { choices } => Some(choices),
        }
    }
}

impl From<Catalog> for CatalogItem {
    fn from(catalog: Catalog) -> Self {
        Self::Catalog { catalog }
    }
}

/// Render-ready snapshot of the catalogs screen.
///
/// Item order: installed catalogs, internal catalogs, then (only when any
/// catalog is available) the language selector followed by the available
/// catalogs passing the current choice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogsViewState {
    pub items: Vec<CatalogItem>,
    pub language_choice: LanguageChoice,
}

impl CatalogsViewState {
    /// Catalog rows only, skipping the selector.
    pub fn catalogs(&self) -> impl Iterator<Item = &Catalog> {
        self.items.iter().filter_map(CatalogItem::as_catalog)
    }

    /// The language selector, present only when catalogs are available.
    #[must_use]
    pub fn language_choices(&self) -> Option<&LanguageChoices> {
        self.items.iter().find_map(CatalogItem::as_language_choices)
    }
}
