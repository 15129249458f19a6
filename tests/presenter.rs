//! End-to-end behavior of the catalogs presenter over an in-memory repository.

use catalogs::presenter::{CatalogItem, CatalogsPresenter, CatalogsViewState};
use catalogs::reactive::Signal;
use catalogs::repository::InMemoryCatalogRepository;
use catalogs::{
    AvailableCatalog, Catalog, CatalogsError, InstalledCatalog, InternalCatalog, Language,
    LanguageChoice,
};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

const TIMEOUT: Duration = Duration::from_secs(2);

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
        source_id: 100,
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
        source_id: 200,
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

fn labels(state: &CatalogsViewState) -> Vec<String> {
    state
        .items
        .iter()
        .map(|item| match item {
            CatalogItem::Catalog { catalog } => catalog.name().to_string(),
            CatalogItem::LanguageChoices { .. } => "<choices>".to_string(),
        })
        .collect()
}

/// Receives states until one satisfies `predicate`.
fn wait_for(
    rx: &Receiver<Signal<CatalogsViewState>>,
    predicate: impl Fn(&CatalogsViewState) -> bool,
) -> CatalogsViewState {
    let deadline = Instant::now() + TIMEOUT;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(Signal::Next(state)) if predicate(&state) => return state,
            Ok(Signal::Next(_)) => {}
            Ok(Signal::Failed(message)) => panic!("state stream failed: {message}"),
            Err(e) => panic!("no matching state: {e}"),
        }
    }
}

fn loaded_repository() -> InMemoryCatalogRepository {
    let repository = InMemoryCatalogRepository::new();
    repository.set_internal(vec![internal("Local")]);
    repository.set_installed(vec![installed("Dex", "en")]);
    repository.set_available(vec![
        available("Alpha", "en"),
        available("Beta", "fr"),
        available("Gamma", "en"),
        available("Delta", "xx"),
    ]);
    repository
}

#[test]
fn merged_list_keeps_section_order() {
    let repository = loaded_repository();
    let presenter = CatalogsPresenter::new(&repository, vec!["fr-FR".to_string()]).unwrap();
    let (_subscription, rx) = presenter.subscribe_channel();

    let state = wait_for(&rx, |s| s.items.len() == 7);

    assert_eq!(
        labels(&state),
        vec!["Dex", "Local", "<choices>", "Alpha", "Beta", "Gamma", "Delta"]
    );
    let selector = state.language_choices().unwrap();
    assert_eq!(
        selector.choices,
        vec![
            LanguageChoice::All,
            LanguageChoice::One(Language::new("fr")),
            LanguageChoice::One(Language::new("en")),
            LanguageChoice::Others(vec![Language::new("xx")]),
        ]
    );
    assert_eq!(selector.selected, LanguageChoice::All);
}

#[test]
fn choice_made_before_lists_arrive_filters_first_merged_state() {
    let repository = InMemoryCatalogRepository::pending();
    let presenter = CatalogsPresenter::new(&repository, vec!["fr".to_string()]).unwrap();
    let (_subscription, rx) = presenter.subscribe_channel();

    let fr = LanguageChoice::One(Language::new("fr"));
    presenter.set_language_choice(fr.clone()).unwrap();
    let chosen = wait_for(&rx, |s| s.language_choice == fr);
    assert!(chosen.items.is_empty());

    repository.set_internal(vec![internal("Local")]);
    repository.set_installed(vec![installed("Dex", "en")]);
    repository.set_available(vec![
        available("Alpha", "en"),
        available("Beta", "fr"),
        available("Gamma", "en"),
        available("Delta", "xx"),
    ]);

    let state = wait_for(&rx, |s| !s.items.is_empty());
    assert_eq!(labels(&state), vec!["Dex", "Local", "<choices>", "Beta"]);
    assert_eq!(state.language_choice, fr);
    let selector = state.language_choices().unwrap();
    assert_eq!(selector.selected, fr);
    assert_eq!(
        selector.choices,
        vec![
            LanguageChoice::All,
            LanguageChoice::One(Language::new("fr")),
            LanguageChoice::One(Language::new("en")),
            LanguageChoice::Others(vec![Language::new("xx")]),
        ]
    );
}

#[test]
fn single_language_filters_available_section() {
    let repository = loaded_repository();
    let presenter = CatalogsPresenter::new(&repository, vec!["en".to_string()]).unwrap();
    let (_subscription, rx) = presenter.subscribe_channel();
    wait_for(&rx, |s| s.items.len() == 7);

    let en = LanguageChoice::One(Language::new("en"));
    presenter.set_language_choice(en.clone()).unwrap();
    let state = wait_for(&rx, |s| s.language_choice == en && s.items.len() == 5);

    assert_eq!(labels(&state), vec!["Dex", "Local", "<choices>", "Alpha", "Gamma"]);
    assert_eq!(state.language_choices().unwrap().selected, en);
    assert_eq!(presenter.state(), state);
}

#[test]
fn others_choice_shows_unflagged_languages() {
    let repository = loaded_repository();
    let presenter = CatalogsPresenter::new(&repository, vec![]).unwrap();
    let (_subscription, rx) = presenter.subscribe_channel();
    wait_for(&rx, |s| s.items.len() == 7);

    let others = LanguageChoice::Others(vec![Language::new("xx")]);
    presenter.set_language_choice(others.clone()).unwrap();
    let state = wait_for(&rx, |s| s.language_choice == others && s.items.len() == 4);

    assert_eq!(labels(&state), vec!["Dex", "Local", "<choices>", "Delta"]);
}

#[test]
fn stale_choice_yields_empty_available_section() {
    let repository = loaded_repository();
    let presenter = CatalogsPresenter::new(&repository, vec![]).unwrap();
    let (_subscription, rx) = presenter.subscribe_channel();
    wait_for(&rx, |s| s.items.len() == 7);

    let korean = LanguageChoice::One(Language::new("ko"));
    presenter.set_language_choice(korean.clone()).unwrap();
    let state = wait_for(&rx, |s| s.language_choice == korean && s.items.len() == 3);

    assert_eq!(labels(&state), vec!["Dex", "Local", "<choices>"]);
}

#[test]
fn list_updates_recombine_with_current_choice() {
    let repository = loaded_repository();
    let presenter = CatalogsPresenter::new(&repository, vec![]).unwrap();
    let (_subscription, rx) = presenter.subscribe_channel();
    wait_for(&rx, |s| s.items.len() == 7);

    let fr = LanguageChoice::One(Language::new("fr"));
    presenter.set_language_choice(fr.clone()).unwrap();
    wait_for(&rx, |s| s.language_choice == fr && s.items.len() == 4);

    repository.set_available(vec![available("Beta", "fr"), available("Epsilon", "fr")]);
    let state = wait_for(&rx, |s| s.items.len() == 5);

    assert_eq!(labels(&state), vec!["Dex", "Local", "<choices>", "Beta", "Epsilon"]);
    assert_eq!(state.language_choice, fr);
}

#[test]
fn selector_disappears_without_available_catalogs() {
    let repository = loaded_repository();
    let presenter = CatalogsPresenter::new(&repository, vec![]).unwrap();
    let (_subscription, rx) = presenter.subscribe_channel();
    wait_for(&rx, |s| s.items.len() == 7);

    repository.set_available(vec![]);
    let state = wait_for(&rx, |s| s.items.len() == 2);

    assert_eq!(labels(&state), vec!["Dex", "Local"]);
    assert!(state.language_choices().is_none());
    assert!(state.catalogs().all(|c| !matches!(c, Catalog::Available(_))));
}

#[test]
fn upstream_failure_terminates_state_stream() {
    let repository = loaded_repository();
    let presenter = CatalogsPresenter::new(&repository, vec![]).unwrap();
    let (_subscription, rx) = presenter.subscribe_channel();
    wait_for(&rx, |s| s.items.len() == 7);

    repository.fail("index unreachable");

    let failure = loop {
        match rx.recv_timeout(TIMEOUT) {
            Ok(Signal::Failed(message)) => break message,
            Ok(Signal::Next(_)) => {}
            Err(e) => panic!("no failure received: {e}"),
        }
    };
    assert_eq!(failure, "index unreachable");
    assert_eq!(presenter.failure().as_deref(), Some("index unreachable"));

    // The loop exits right after publishing the failure.
    let deadline = Instant::now() + TIMEOUT;
    let err = loop {
        match presenter.set_language_choice(LanguageChoice::All) {
            Err(e) => break e,
            Ok(()) if Instant::now() < deadline => thread::sleep(Duration::from_millis(10)),
            Ok(()) => panic!("presenter still accepts actions after failure"),
        }
    };
    assert!(matches!(err, CatalogsError::Presenter(_)));

    // Late subscribers see the failure too.
    let (_late, late_rx) = presenter.subscribe_channel();
    assert_eq!(
        late_rx.recv_timeout(TIMEOUT),
        Ok(Signal::Failed("index unreachable".to_string()))
    );
}

#[test]
fn dropping_presenter_closes_state_stream() {
    let repository = loaded_repository();
    let presenter = CatalogsPresenter::new(&repository, vec![]).unwrap();
    let (_subscription, rx) = presenter.subscribe_channel();
    wait_for(&rx, |s| s.items.len() == 7);

    drop(presenter);
    repository.set_installed(vec![]);

    loop {
        match rx.recv_timeout(TIMEOUT) {
            Ok(Signal::Next(state)) => assert_eq!(state.items.len(), 7),
            Ok(Signal::Failed(message)) => panic!("unexpected failure: {message}"),
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => panic!("state stream still open after drop"),
        }
    }
}
