//! Presenter event loop.
//!
//! The loop owns the recombination inputs and the current view state. It runs
//! on a dedicated thread fed by one channel: repository observers and user
//! actions only enqueue [`Input`]s, and every state change is published through
//! the state relay from this thread alone.

use crate::domain::{AvailableCatalog, InstalledCatalog, InternalCatalog};
use crate::presenter::actions::Action;
use crate::presenter::reducer::reduce;
use crate::presenter::side_effects::{CatalogSources, SourceUpdate};
use crate::presenter::state::CatalogsViewState;
use crate::reactive::{Relay, Signal};
use crate::repository::CatalogObserver;
use std::sync::mpsc::{Receiver, Sender};

/// Messages consumed by the event loop.
#[derive(Debug)]
pub(crate) enum Input {
    Internal(Vec<InternalCatalog>),
    Installed(Vec<InstalledCatalog>),
    Available(Vec<AvailableCatalog>),
    Dispatch(Action),
    UpstreamFailed(String),
    Shutdown,
}

/// Builds a repository observer that forwards snapshots into the loop.
pub(crate) fn forward<T>(tx: &Sender<Input>, wrap: fn(Vec<T>) -> Input) -> CatalogObserver<T>
where
    T: Clone + Send + 'static,
{
    let tx = tx.clone();
    Box::new(move |signal: &Signal<Vec<T>>| {
        let input = match signal {
            Signal::Next(list) => wrap(list.clone()),
            Signal::Failed(message) => Input::UpstreamFailed(message.clone()),
        };
        let _ = tx.send(input);
    })
}

/// Runs until shutdown, an upstream failure, or every sender is gone.
pub(crate) fn run(rx: &Receiver<Input>, state_relay: &Relay<CatalogsViewState>, device_locales: Vec<String>) {
    let _span = tracing::debug_span!("presenter_loop").entered();
    tracing::debug!(locales = ?device_locales, "presenter loop started");

    let mut sources = CatalogSources::new(device_locales);
    let mut state = state_relay.value().unwrap_or_default();

    while let Ok(input) = rx.recv() {
        let actions: Vec<Action> = match input {
            Input::Internal(list) => sources.apply(SourceUpdate::Internal(list)).into_iter().collect(),
            Input::Installed(list) => sources.apply(SourceUpdate::Installed(list)).into_iter().collect(),
            Input::Available(list) => sources.apply(SourceUpdate::Available(list)).into_iter().collect(),
            Input::Dispatch(action) => resolve(&mut sources, action),
            Input::UpstreamFailed(message) => {
                tracing::error!(error = %message, "catalog stream failed, terminating state");
                state_relay.fail(message);
                return;
            }
            Input::Shutdown => {
                tracing::debug!("presenter loop shutting down");
                return;
            }
        };

        if actions.is_empty() {
            continue;
        }

        for action in &actions {
            let _span = tracing::debug_span!("reduce", action = action.name()).entered();
            state = reduce(&state, action);
        }
        tracing::debug!(items = state.items.len(), "state published");
        state_relay.publish(state.clone());
    }

    tracing::debug!("presenter inputs closed");
}

/// Runs the side-effects of a dispatched action.
///
/// Returns the action itself followed by whatever it resolves to.
fn resolve(sources: &mut CatalogSources, action: Action) -> Vec<Action> {
    let follow_up = match &action {
        Action::SetLanguageChoice(choice) => sources.apply(SourceUpdate::Choice(choice.clone())),
        Action::ItemsUpdated(_) => None,
    };

    let mut actions = vec![action];
    actions.extend(follow_up);
    actions
}
