//! Terminal rendering of the catalogs screen.
//!
//! The presenter's state is turned into a [`UIViewModel`] and then into
//! ANSI-styled text using a [`Theme`]. Rendering is pure: it returns a string
//! and leaves writing it to the caller.
//!
//! # Modules
//!
//! - [`viewmodel`]: rows, chips and toolbar derived from the state
//! - [`renderer`]: [`render`] entry point
//! - `components`: toolbar, section header, catalog row, chips, empty state
//! - [`helpers`]: width, truncation and relative-time utilities
//! - [`theme`]: color schemes loaded from TOML

mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::{Theme, ThemeColors, BUILTIN_THEMES};
pub use viewmodel::{compute_viewmodel, CatalogRow, Chip, EmptyState, Row, ToolbarInfo, UIViewModel};
