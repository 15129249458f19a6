//! Catalog repository abstraction.
//!
//! This module defines the [`CatalogRepository`] trait the presenter consumes.
//! A repository exposes three independent streams of catalog-list snapshots;
//! each stream replays its latest snapshot on subscribe and re-emits whenever
//! the list changes.
//!
//! # Design
//!
//! The trait only covers what the presenter reads. Fetching remote indexes and
//! installing packages belong to whoever feeds the repository.

use crate::domain::{AvailableCatalog, InstalledCatalog, InternalCatalog};
use crate::reactive::{Signal, Subscription};

/// Observer of one catalog stream.
pub type CatalogObserver<T> = Box<dyn Fn(&Signal<Vec<T>>) + Send>;

/// Source of catalog-list streams.
///
/// # Implementations
///
/// - [`InMemoryCatalogRepository`](crate::repository::InMemoryCatalogRepository): lists set programmatically
/// - [`JsonCatalogRepository`](crate::repository::JsonCatalogRepository): lists loaded from a JSON file
///
/// # Examples
///
/// ```
/// use catalogs::repository::{CatalogRepository, InMemoryCatalogRepository};
/// use catalogs::reactive::Signal;
/// use catalogs::AvailableCatalog;
///
/// let repository = InMemoryCatalogRepository::new();
/// let _subscription = repository.subscribe_available(Box::new(|signal: &Signal<Vec<AvailableCatalog>>| {
///     if let Signal::Next(catalogs) = signal {
///         println!("{} catalogs available", catalogs.len());
///     }
/// }));
/// ```
pub trait CatalogRepository: Send + Sync {
    /// Subscribes to catalogs bundled with the application.
    fn subscribe_internal(&self, observer: CatalogObserver<InternalCatalog>) -> Subscription;

    /// Subscribes to catalogs installed on the device.
    fn subscribe_installed(&self, observer: CatalogObserver<InstalledCatalog>) -> Subscription;

    /// Subscribes to catalogs listed by the remote index.
    fn subscribe_available(&self, observer: CatalogObserver<AvailableCatalog>) -> Subscription;
}
