//! Catalog repository layer.
//!
//! Supplies the presenter with three re-emitting streams of catalog lists.
//!
//! # Modules
//!
//! - `backend`: [`CatalogRepository`] trait consumed by the presenter
//! - `memory`: relay-backed repository with programmatic updates
//! - `json`: JSON file-backed repository with change-only reload
//! - `models`: on-disk file format

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::{CatalogObserver, CatalogRepository};
pub use json::JsonCatalogRepository;
pub use memory::InMemoryCatalogRepository;
pub use models::{CatalogFile, CATALOG_FILE_VERSION};
