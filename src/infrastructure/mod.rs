//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the catalogs data lives on disk and which locales the user
//! reads, so the rest of the crate never touches the environment directly.

pub mod locale;
pub mod paths;

pub use locale::{detect_device_locales, language_of, normalize_locale};
pub use paths::{expand_tilde, get_data_dir};
