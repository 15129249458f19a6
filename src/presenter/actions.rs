//! Actions folded into the view state by the reducer.
//!
//! User intents enter the presenter as actions; side-effects answer input
//! changes with further actions. Every action is applied by
//! [`reduce`](crate::presenter::reduce).

use crate::domain::LanguageChoice;
use crate::presenter::state::CatalogItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user picked a language filter.
    SetLanguageChoice(LanguageChoice),

    /// Recombination produced a new merged list.
    ItemsUpdated(Vec<CatalogItem>),
}

impl Action {
    /// Short name for logging; item payloads are not printed.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetLanguageChoice(_) => "set_language_choice",
            Self::ItemsUpdated(_) => "items_updated",
        }
    }
}
