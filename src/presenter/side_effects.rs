//! Recombination of the catalog inputs into the merged item list.
//!
//! [`CatalogSources`] holds the latest value of each of the four inputs
//! (internal, installed and available lists plus the language choice). After
//! every input change it resolves to an [`Action::ItemsUpdated`] once all
//! three lists have been seen at least once.

use crate::domain::{
    AvailableCatalog, Catalog, InstalledCatalog, InternalCatalog, LanguageChoice, LanguageChoices,
};
use crate::presenter::actions::Action;
use crate::presenter::choices::get_language_choices;
use crate::presenter::state::CatalogItem;

/// A change to one of the recombination inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceUpdate {
    Internal(Vec<InternalCatalog>),
    Installed(Vec<InstalledCatalog>),
    Available(Vec<AvailableCatalog>),
    Choice(LanguageChoice),
}

/// Latest values of the recombination inputs.
#[derive(Debug, Clone)]
pub struct CatalogSources {
    internal: Option<Vec<InternalCatalog>>,
    installed: Option<Vec<InstalledCatalog>>,
    available: Option<Vec<AvailableCatalog>>,
    choice: LanguageChoice,
    device_locales: Vec<String>,
}

impl CatalogSources {
    /// Creates the sources with no lists yet and the `All` choice.
    #[must_use]
    pub fn new(device_locales: Vec<String>) -> Self {
        Self {
            internal: None,
            installed: None,
            available: None,
            choice: LanguageChoice::All,
            device_locales,
        }
    }

    /// Records `update` and returns the resulting items action, if every
    /// list has been received.
    pub fn apply(&mut self, update: SourceUpdate) -> Option<Action> {
        match update {
            SourceUpdate::Internal(list) => self.internal = Some(list),
            SourceUpdate::Installed(list) => self.installed = Some(list),
            SourceUpdate::Available(list) => self.available = Some(list),
            SourceUpdate::Choice(choice) => self.choice = choice,
        }

        self.merged_items().map(Action::ItemsUpdated)
    }

    /// Builds the merged list from the current inputs.
    ///
    /// Installed catalogs first, then internal ones; if any catalog is
    /// available, the language selector follows with the available catalogs
    /// passing the current choice.
    #[must_use]
    pub fn merged_items(&self) -> Option<Vec<CatalogItem>> {
        let (Some(internal), Some(installed), Some(available)) =
            (&self.internal, &self.installed, &self.available)
        else {
            return None;
        };

        let _span = tracing::debug_span!(
            "merge_catalogs",
            internal = internal.len(),
            installed = installed.len(),
            available = available.len(),
            choice = %self.choice.label(),
        )
        .entered();

        let mut items: Vec<CatalogItem> =
            Vec::with_capacity(installed.len() + internal.len() + available.len() + 1);
        items.extend(installed.iter().cloned().map(|c| CatalogItem::from(Catalog::Installed(c))));
        items.extend(internal.iter().cloned().map(|c| CatalogItem::from(Catalog::Internal(c))));

        if !available.is_empty() {
            items.push(CatalogItem::LanguageChoices {
                choices: LanguageChoices {
                    choices: get_language_choices(available, &self.device_locales),
                    selected: self.choice.clone(),
                },
            });

            let before = items.len();
            items.extend(
                available
                    .iter()
                    .filter(|catalog| self.choice.matches(&catalog.lang))
                    .cloned()
                    .map(|c| CatalogItem::from(Catalog::Available(c))),
            );
            tracing::debug!(shown = items.len() - before, "available catalogs filtered");
        }

        Some(items)
    }

    #[must_use]
    pub const fn choice(&self) -> &LanguageChoice {
        &self.choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;

    fn internal(name: &str) -> InternalCatalog {
        InternalCatalog {
            source_id: 0,
            name: name.to_string(),
            lang: "other".to_string(),
            description: String::new(),
        }
    }

    fn installed(name: &str, lang: &str) -> InstalledCatalog {
        InstalledCatalog {
            source_id: 10,
            name: name.to_string(),
            lang: lang.to_string(),
            description: String::new(),
            pkg_name: format!("ext.{name}"),
            version_name: "1.0".to_string(),
            version_code: 1,
            nsfw: false,
        }
    }

    fn available(name: &str, lang: &str) -> AvailableCatalog {
        AvailableCatalog {
            source_id: 20,
            name: name.to_string(),
            lang: lang.to_string(),
            description: String::new(),
            pkg_name: format!("ext.{name}"),
            version_name: "1.0".to_string(),
            version_code: 1,
            nsfw: false,
            icon_url: None,
            apk_name: None,
        }
    }

    fn names(items: &[CatalogItem]) -> Vec<String> {
        items
            .iter()
            .map(|item| match item {
                CatalogItem::Catalog { catalog } => catalog.name().to_string(),
                CatalogItem::LanguageChoices { .. } => "<choices>".to_string(),
            })
            .collect()
    }

    fn loaded(available_list: Vec<AvailableCatalog>) -> CatalogSources {
        let mut sources = CatalogSources::new(vec!["en".to_string()]);
        assert!(sources.apply(SourceUpdate::Internal(vec![internal("local")])).is_none());
        assert!(sources
            .apply(SourceUpdate::Installed(vec![installed("dex", "en")]))
            .is_none());
        assert!(sources.apply(SourceUpdate::Available(available_list)).is_some());
        sources
    }

    #[test]
    fn waits_for_every_list() {
        let mut sources = CatalogSources::new(vec![]);
        assert!(sources.apply(SourceUpdate::Choice(LanguageChoice::All)).is_none());
        assert!(sources.apply(SourceUpdate::Available(vec![])).is_none());
        assert!(sources.apply(SourceUpdate::Internal(vec![])).is_none());
        assert_eq!(
            sources.apply(SourceUpdate::Installed(vec![])),
            Some(Action::ItemsUpdated(vec![]))
        );
    }

    #[test]
    fn installed_then_internal_then_selector_then_available() {
        let sources = loaded(vec![available("a-en", "en"), available("b-fr", "fr")]);

        let items = sources.merged_items().unwrap();

        assert_eq!(names(&items), vec!["dex", "local", "<choices>", "a-en", "b-fr"]);
    }

    #[test]
    fn no_selector_without_available_catalogs() {
        let sources = loaded(vec![]);

        let items = sources.merged_items().unwrap();

        assert_eq!(names(&items), vec!["dex", "local"]);
    }

    #[test]
    fn choice_filters_only_available_section() {
        let mut sources = loaded(vec![
            available("a-en", "en"),
            available("b-en", "en"),
            available("c-fr", "fr"),
            available("d-xx", "xx"),
        ]);

        let action = sources
            .apply(SourceUpdate::Choice(LanguageChoice::One(Language::new("en"))))
            .unwrap();
        let Action::ItemsUpdated(items) = action else {
            panic!("expected items update");
        };
        assert_eq!(names(&items), vec!["dex", "local", "<choices>", "a-en", "b-en"]);

        let Some(Action::ItemsUpdated(items)) = sources.apply(SourceUpdate::Choice(
            LanguageChoice::Others(vec![Language::new("xx")]),
        )) else {
            panic!("expected items update");
        };
        assert_eq!(names(&items), vec!["dex", "local", "<choices>", "d-xx"]);
    }

    #[test]
    fn stale_choice_filters_to_empty_but_keeps_selector() {
        let mut sources = loaded(vec![available("a-en", "en")]);

        let Some(Action::ItemsUpdated(items)) =
            sources.apply(SourceUpdate::Choice(LanguageChoice::One(Language::new("ko"))))
        else {
            panic!("expected items update");
        };

        assert_eq!(names(&items), vec!["dex", "local", "<choices>"]);
        let selector = items[2].as_language_choices().unwrap();
        assert_eq!(selector.selected, LanguageChoice::One(Language::new("ko")));
        assert_eq!(
            selector.choices,
            vec![LanguageChoice::All, LanguageChoice::One(Language::new("en"))]
        );
    }

    #[test]
    fn all_choice_passes_everything() {
        let list = vec![available("a", "en"), available("b", "xx"), available("c", "ja")];
        let sources = loaded(list.clone());

        let items = sources.merged_items().unwrap();
        let shown: Vec<&Catalog> = items[3..].iter().filter_map(CatalogItem::as_catalog).collect();

        assert_eq!(shown.len(), list.len());
    }
}
