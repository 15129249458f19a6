//! Render-ready view model of the catalogs screen.
//!
//! [`compute_viewmodel`] flattens a [`CatalogsViewState`] into rows: a section
//! header wherever the catalog kind changes, one row per catalog, and the
//! language chips heading the available section. The view model carries no
//! colors; the renderer applies the theme.

use crate::domain::{Catalog, Language, LanguageChoices};
use crate::presenter::{CatalogItem, CatalogsViewState};

/// Title shown in the toolbar.
pub const TOOLBAR_TITLE: &str = "Catalogs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub toolbar: ToolbarInfo,
    pub rows: Vec<Row>,
    /// Set when there is nothing to list at all.
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarInfo {
    pub title: String,
    /// Counts per section, e.g. `"2 installed · 14 available"`.
    pub subtitle: String,
}

/// One line group of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    SectionHeader(String),
    Catalog(CatalogRow),
    LanguageChips(Vec<Chip>),
    /// Shown in the available section when the filter leaves nothing.
    Hint(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub name: String,
    /// Flag and language code, plus the version when known.
    pub detail: String,
    /// Action label, e.g. `BROWSE` or `INSTALL`.
    pub action: String,
    pub nsfw: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Installed,
    Internal,
    Available,
}

impl Section {
    const fn of(catalog: &Catalog) -> Self {
        match catalog {
            Catalog::Installed(_) => Self::Installed,
            Catalog::Internal(_) => Self::Internal,
            Catalog::Available(_) => Self::Available,
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Installed => "Installed",
            Self::Internal => "Built-in",
            Self::Available => "Available",
        }
    }
}

/// Builds the view model for `state`.
///
/// # Example
///
/// ```rust
/// use catalogs::presenter::CatalogsViewState;
/// use catalogs::ui::compute_viewmodel;
///
/// let vm = compute_viewmodel(&CatalogsViewState::default());
/// assert!(vm.rows.is_empty());
/// assert!(vm.empty_state.is_some());
/// ```
#[must_use]
pub fn compute_viewmodel(state: &CatalogsViewState) -> UIViewModel {
    let mut rows = Vec::with_capacity(state.items.len() + 4);
    let mut section = None;
    let mut available_rows = 0;
    let mut in_available = false;

    for item in &state.items {
        match item {
            CatalogItem::Catalog { catalog } => {
                let current = Section::of(catalog);
                // The selector already opened the available section.
                if section != Some(current) && current != Section::Available {
                    rows.push(Row::SectionHeader(current.title().to_string()));
                }
                section = Some(current);
                if current == Section::Available {
                    available_rows += 1;
                }
                rows.push(Row::Catalog(catalog_row(catalog)));
            }
            CatalogItem::LanguageChoices { choices } => {
                rows.push(Row::SectionHeader(Section::Available.title().to_string()));
                rows.push(Row::LanguageChips(chips(choices)));
                section = Some(Section::Available);
                in_available = true;
            }
        }
    }

    if in_available && available_rows == 0 {
        rows.push(Row::Hint("No catalogs for this language".to_string()));
    }

    let empty_state = rows.is_empty().then(|| EmptyState {
        message: "No catalogs".to_string(),
        subtitle: "Waiting for the catalog lists".to_string(),
    });

    UIViewModel {
        toolbar: ToolbarInfo {
            title: TOOLBAR_TITLE.to_string(),
            subtitle: subtitle(state),
        },
        rows,
        empty_state,
    }
}

fn catalog_row(catalog: &Catalog) -> CatalogRow {
    let language = Language::new(catalog.lang());
    let mut detail = match language.emoji() {
        Some(flag) => format!("{flag} {}", language.code.to_uppercase()),
        None => language.code.to_uppercase(),
    };
    if let Some(version) = catalog.version_name() {
        detail.push_str(&format!(" · v{version}"));
    }

    let action = match catalog {
        Catalog::Internal(_) | Catalog::Installed(_) => "BROWSE",
        Catalog::Available(_) => "INSTALL",
    };

    CatalogRow {
        name: catalog.name().to_string(),
        detail,
        action: action.to_string(),
        nsfw: catalog.is_nsfw(),
    }
}

fn chips(choices: &LanguageChoices) -> Vec<Chip> {
    choices
        .choices
        .iter()
        .map(|choice| Chip {
            label: choice.label(),
            selected: *choice == choices.selected,
        })
        .collect()
}

fn subtitle(state: &CatalogsViewState) -> String {
    let (mut installed, mut available) = (0, 0);
    for catalog in state.catalogs() {
        match catalog {
            Catalog::Installed(_) => installed += 1,
            Catalog::Available(_) => available += 1,
            Catalog::Internal(_) => {}
        }
    }
    format!("{installed} installed · {available} available")
}
