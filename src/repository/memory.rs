//! In-memory catalog repository.
//!
//! Holds the three catalog lists in relays. Useful for embedding the presenter
//! in a host that already owns the data, and as the backing store of
//! [`JsonCatalogRepository`](crate::repository::JsonCatalogRepository).

use crate::domain::{AvailableCatalog, InstalledCatalog, InternalCatalog};
use crate::reactive::{Relay, Subscription};
use crate::repository::backend::{CatalogObserver, CatalogRepository};

/// Repository whose lists are set programmatically.
///
/// Streams built by [`new`](Self::new) start with an empty list, so
/// subscribers receive a snapshot immediately. Streams built by
/// [`pending`](Self::pending) stay silent until their first `set_*`.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogRepository {
    internal: Relay<Vec<InternalCatalog>>,
    installed: Relay<Vec<InstalledCatalog>>,
    available: Relay<Vec<AvailableCatalog>>,
}

impl InMemoryCatalogRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            internal: Relay::with_value(Vec::new()),
            installed: Relay::with_value(Vec::new()),
            available: Relay::with_value(Vec::new()),
        }
    }

    /// A repository whose lists have not been loaded yet.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            internal: Relay::new(),
            installed: Relay::new(),
            available: Relay::new(),
        }
    }

    pub fn set_internal(&self, catalogs: Vec<InternalCatalog>) {
        tracing::debug!(count = catalogs.len(), "internal catalogs updated");
        self.internal.publish(catalogs);
    }

    pub fn set_installed(&self, catalogs: Vec<InstalledCatalog>) {
        tracing::debug!(count = catalogs.len(), "installed catalogs updated");
        self.installed.publish(catalogs);
    }

    pub fn set_available(&self, catalogs: Vec<AvailableCatalog>) {
        tracing::debug!(count = catalogs.len(), "available catalogs updated");
        self.available.publish(catalogs);
    }

    #[must_use]
    pub fn internal(&self) -> Vec<InternalCatalog> {
        self.internal.value().unwrap_or_default()
    }

    #[must_use]
    pub fn installed(&self) -> Vec<InstalledCatalog> {
        self.installed.value().unwrap_or_default()
    }

    #[must_use]
    pub fn available(&self) -> Vec<AvailableCatalog> {
        self.available.value().unwrap_or_default()
    }

    /// Terminates all three streams with `message`.
    pub fn fail(&self, message: &str) {
        tracing::debug!(error = %message, "catalog streams failed");
        self.internal.fail(message);
        self.installed.fail(message);
        self.available.fail(message);
    }
}

impl Default for InMemoryCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn subscribe_internal(&self, observer: CatalogObserver<InternalCatalog>) -> Subscription {
        self.internal.subscribe(observer)
    }

    fn subscribe_installed(&self, observer: CatalogObserver<InstalledCatalog>) -> Subscription {
        self.installed.subscribe(observer)
    }

    fn subscribe_available(&self, observer: CatalogObserver<AvailableCatalog>) -> Subscription {
        self.available.subscribe(observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::Signal;
    use std::sync::mpsc;

    fn available(name: &str, lang: &str) -> AvailableCatalog {
        AvailableCatalog {
            source_id: 1,
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

    #[test]
    fn subscribers_receive_initial_empty_snapshot_then_updates() {
        let repository = InMemoryCatalogRepository::new();
        let (tx, rx) = mpsc::channel();
        let _sub = repository.subscribe_available(Box::new(move |signal: &Signal<Vec<AvailableCatalog>>| {
            let _ = tx.send(signal.clone());
        }));

        repository.set_available(vec![available("a", "en")]);

        assert_eq!(rx.try_recv(), Ok(Signal::Next(vec![])));
        assert_eq!(rx.try_recv(), Ok(Signal::Next(vec![available("a", "en")])));
        assert_eq!(repository.available().len(), 1);
    }

    #[test]
    fn pending_streams_stay_silent_until_set() {
        let repository = InMemoryCatalogRepository::pending();
        let (tx, rx) = mpsc::channel();
        let _sub = repository.subscribe_available(Box::new(move |signal: &Signal<Vec<AvailableCatalog>>| {
            let _ = tx.send(signal.clone());
        }));

        assert_eq!(rx.try_recv(), Err(mpsc::TryRecvError::Empty));
        repository.set_available(vec![]);
        assert_eq!(rx.try_recv(), Ok(Signal::Next(vec![])));
    }

    #[test]
    fn fail_terminates_every_stream() {
        let repository = InMemoryCatalogRepository::new();
        let (tx, rx) = mpsc::channel();
        let _sub = repository.subscribe_internal(Box::new(move |signal: &Signal<Vec<InternalCatalog>>| {
            let _ = tx.send(signal.clone());
        }));

        repository.fail("index unreachable");

        assert_eq!(rx.try_recv(), Ok(Signal::Next(vec![])));
        assert_eq!(rx.try_recv(), Ok(Signal::Failed("index unreachable".to_string())));
        assert!(repository.installed().is_empty());
    }
}
