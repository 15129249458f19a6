//! Domain layer for the catalogs crate.
//!
//! Core types independent of the repository, presenter runtime and rendering:
//!
//! - [`error`]: Error types and result aliases
//! - [`catalog`]: Catalog model at its three lifecycle stages
//! - [`language`]: Language codes and the language filter
//!
//! # Examples
//!
//! ```
//! use catalogs::domain::{Catalog, InternalCatalog, Result};
//!
//! fn local_source() -> Result<Catalog> {
//!     Ok(Catalog::Internal(InternalCatalog {
//!         source_id: 0,
//!         name: "Local source".to_string(),
//!         lang: "other".to_string(),
//!         description: String::new(),
//!     }))
//! }
//! # assert!(local_source().is_ok());
//! ```

pub mod catalog;
pub mod error;
pub mod language;

pub use catalog::{AvailableCatalog, Catalog, InstalledCatalog, InternalCatalog};
pub use error::{CatalogsError, Result};
pub use language::{Language, LanguageChoice, LanguageChoices};
