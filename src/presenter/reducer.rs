//! Pure state reduction.

use crate::presenter::actions::Action;
use crate::presenter::state::CatalogsViewState;

/// Folds `action` into `state`, returning the next snapshot.
///
/// # Example
///
/// ```rust
/// use catalogs::presenter::{reduce, Action, CatalogsViewState};
/// use catalogs::{Language, LanguageChoice};
///
/// let state = CatalogsViewState::default();
/// let choice = LanguageChoice::One(Language::new("en"));
/// let next = reduce(&state, &Action::SetLanguageChoice(choice.clone()));
///
/// assert_eq!(next.language_choice, choice);
/// assert!(next.items.is_empty());
/// ```
#[must_use]
pub fn reduce(state: &CatalogsViewState, action: &Action) -> CatalogsViewState {
    match action {
        Action::SetLanguageChoice(choice) => CatalogsViewState {
            items: state.items.clone(),
            language_choice: choice.clone(),
        },
        Action::ItemsUpdated(items) => CatalogsViewState {
            items: items.clone(),
            language_choice: state.language_choice.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Catalog, InternalCatalog, Language, LanguageChoice};

    fn local_source() -> Catalog {
        Catalog::Internal(InternalCatalog {
            source_id: 0,
            name: "Local source".to_string(),
            lang: "other".to_string(),
            description: String::new(),
        })
    }

    #[test]
    fn items_update_keeps_choice() {
        let state = CatalogsViewState {
            items: vec![],
            language_choice: LanguageChoice::One(Language::new("ja")),
        };

        let next = reduce(&state, &Action::ItemsUpdated(vec![local_source().into()]));

        assert_eq!(next.items.len(), 1);
        assert_eq!(next.language_choice, LanguageChoice::One(Language::new("ja")));
    }

    #[test]
    fn choice_update_keeps_items_and_leaves_input_untouched() {
        let state = CatalogsViewState {
            items: vec![local_source().into()],
            language_choice: LanguageChoice::All,
        };

        let next = reduce(&state, &Action::SetLanguageChoice(LanguageChoice::Others(vec![])));

        assert_eq!(next.items, state.items);
        assert_eq!(state.language_choice, LanguageChoice::All);
        assert_eq!(next.language_choice, LanguageChoice::Others(vec![]));
    }
}
