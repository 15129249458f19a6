//! Error types for the catalogs crate.
//!
//! This module defines the centralized error type [`CatalogsError`] and a type alias
//! [`Result`] used throughout the crate. All variants are implemented with the
//! `thiserror` crate.

use thiserror::Error;

/// The main error type for catalog operations.
///
/// Consolidates failures from the repository, presenter runtime, theme loading
/// and configuration. I/O errors convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use catalogs::CatalogsError;
///
/// fn validate_config() -> Result<(), CatalogsError> {
///     Err(CatalogsError::Config("width must be a number".to_string()))
/// }
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogsError {
    /// Reading or decoding catalog data failed, or an upstream catalog stream
    /// terminated with an error.
    #[error("Repository error: {0}")]
    Repository(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or lookup failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The presenter event loop is unavailable.
    ///
    /// Occurs when an action is dispatched after the loop has terminated,
    /// either through teardown or an upstream failure.
    #[error("Presenter error: {0}")]
    Presenter(String),

    /// Configuration is invalid or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogsError>;
