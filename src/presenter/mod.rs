//! Catalogs screen presenter.
//!
//! The presenter merges the three repository streams with the current language
//! choice into a [`CatalogsViewState`]. Everything flows one way:
//!
//! ```text
//! repository streams ─┐
//!                     ├─► side-effects ─► Action ─► reduce ─► state relay ─► view
//! set_language_choice ┘
//! ```
//!
//! # Modules
//!
//! - `actions`: [`Action`] variants folded by the reducer
//! - `reducer`: pure [`reduce`] function
//! - `side_effects`: combine-latest recombination ([`CatalogSources`])
//! - `choices`: language selector ordering ([`get_language_choices`])
//! - `state`: [`CatalogsViewState`] and [`CatalogItem`]
//! - `runtime`: event loop thread (internal)
//!
//! # Threading
//!
//! All reduction happens on one background thread named `catalogs-presenter`.
//! Repository observers and [`CatalogsPresenter::set_language_choice`] only
//! enqueue messages, so they never block on rendering or on each other.

pub mod actions;
pub mod choices;
pub mod reducer;
mod runtime;
pub mod side_effects;
pub mod state;

pub use actions::Action;
pub use choices::get_language_choices;
pub use reducer::reduce;
pub use side_effects::{CatalogSources, SourceUpdate};
pub use state::{CatalogItem, CatalogsViewState};

use crate::domain::{CatalogsError, LanguageChoice, Result};
use crate::reactive::{Relay, Signal, Subscription};
use crate::repository::CatalogRepository;
use runtime::{forward, Input};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// Owns the catalogs screen state and the loop that maintains it.
///
/// Dropping the presenter releases the repository subscriptions and stops the
/// loop; state observers receive nothing further.
///
/// # Example
///
/// ```rust
/// use catalogs::presenter::CatalogsPresenter;
/// use catalogs::repository::InMemoryCatalogRepository;
/// use catalogs::reactive::Signal;
/// use catalogs::LanguageChoice;
/// use std::time::Duration;
///
/// let repository = InMemoryCatalogRepository::new();
/// let presenter = CatalogsPresenter::new(&repository, vec!["en".to_string()])?;
/// let (_subscription, states) = presenter.subscribe_channel();
///
/// presenter.set_language_choice(LanguageChoice::All)?;
///
/// let Ok(Signal::Next(state)) = states.recv_timeout(Duration::from_secs(1)) else {
///     panic!("no state");
/// };
/// assert_eq!(state.language_choice, LanguageChoice::All);
/// # Ok::<(), catalogs::CatalogsError>(())
/// ```
pub struct CatalogsPresenter {
    tx: Sender<Input>,
    state: Relay<CatalogsViewState>,
    upstream: Vec<Subscription>,
    handle: Option<JoinHandle<()>>,
}

impl CatalogsPresenter {
    /// Starts the presenter over `repository`.
    ///
    /// # Parameters
    ///
    /// * `repository` - Source of the three catalog streams
    /// * `device_locales` - User locales, most preferred first, used to order
    ///   the language selector
    ///
    /// # Errors
    ///
    /// Returns [`CatalogsError::Io`] if the presenter thread cannot be spawned.
    pub fn new(repository: &dyn CatalogRepository, device_locales: Vec<String>) -> Result<Self> {
        let _span = tracing::debug_span!("presenter_new").entered();

        let (tx, rx): (Sender<Input>, Receiver<Input>) = mpsc::channel();
        let state = Relay::with_value(CatalogsViewState::default());

        let loop_state = state.clone();
        let handle = thread::Builder::new()
            .name("catalogs-presenter".to_string())
            .spawn(move || runtime::run(&rx, &loop_state, device_locales))?;

        // Subscribing replays each list's latest snapshot into the channel.
        let upstream = vec![
            repository.subscribe_internal(forward(&tx, Input::Internal)),
            repository.subscribe_installed(forward(&tx, Input::Installed)),
            repository.subscribe_available(forward(&tx, Input::Available)),
        ];

        tracing::info!("catalogs presenter started");
        Ok(Self {
            tx,
            state,
            upstream,
            handle: Some(handle),
        })
    }

    /// Selects the language filter for the available section.
    ///
    /// The new state is published asynchronously.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogsError::Presenter`] if the loop has already stopped,
    /// for example after an upstream failure.
    pub fn set_language_choice(&self, choice: LanguageChoice) -> Result<()> {
        tracing::debug!(choice = %choice.label(), "language choice requested");
        self.tx
            .send(Input::Dispatch(Action::SetLanguageChoice(choice)))
            .map_err(|_| CatalogsError::Presenter("presenter loop has stopped".to_string()))
    }

    /// Latest published state; the default state after a failure.
    #[must_use]
    pub fn state(&self) -> CatalogsViewState {
        self.state.value().unwrap_or_default()
    }

    /// Upstream failure that terminated the state stream, if any.
    #[must_use]
    pub fn failure(&self) -> Option<String> {
        self.state.failure()
    }

    /// Observes state snapshots, starting with the current one.
    ///
    /// The replay runs on the calling thread and later snapshots on the
    /// presenter thread, one at a time and in publish order. No lock is held
    /// while an observer runs, so it may read [`state`](Self::state) or
    /// [`failure`](Self::failure) through a shared handle and may drop its own
    /// subscription.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Signal<CatalogsViewState>) + Send + 'static,
    {
        self.state.subscribe(observer)
    }

    /// Observes state snapshots through a channel.
    pub fn subscribe_channel(&self) -> (Subscription, Receiver<Signal<CatalogsViewState>>) {
        self.state.subscribe_channel()
    }
}

impl Drop for CatalogsPresenter {
    fn drop(&mut self) {
        let _span = tracing::debug_span!("presenter_drop").entered();

        // Upstream first so no snapshot is enqueued after Shutdown.
        self.upstream.clear();
        let _ = self.tx.send(Input::Shutdown);

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("presenter thread panicked");
            }
        }
        tracing::info!("catalogs presenter stopped");
    }
}

impl std::fmt::Debug for CatalogsPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogsPresenter")
            .field("upstream", &self.upstream.len())
            .field("running", &self.handle.as_ref().is_some_and(|h| !h.is_finished()))
            .finish()
    }
}
