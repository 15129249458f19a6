//! Screen components.
//!
//! Each component appends its lines to the output buffer and never emits a
//! trailing newline for the last line it draws; [`render_list`] joins them.
//!
//! - `toolbar`: title bar with section counts
//! - `section_header`: section title over a divider
//! - `catalog_row`: name, details and action of one catalog
//! - `language_chips`: the language selector, wrapped to the width
//! - `empty`: centered empty-state message

mod catalog_row;
mod empty;
mod language_chips;
mod section_header;
mod toolbar;

pub use empty::render_empty_state;
pub use toolbar::render_toolbar;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::Row;

/// Renders every row of the list, one or more lines each.
pub fn render_list(out: &mut Vec<String>, rows: &[Row], theme: &Theme, cols: usize) {
    for row in rows {
        match row {
            Row::SectionHeader(title) => section_header::render(out, title, theme, cols),
            Row::Catalog(catalog) => catalog_row::render(out, catalog, theme, cols),
            Row::LanguageChips(chips) => language_chips::render(out, chips, theme, cols),
            Row::Hint(text) => out.push(format!(
                "{}{}  {text}{}",
                Theme::dim(),
                Theme::fg(&theme.colors.empty_state_fg),
                Theme::reset()
            )),
        }
    }
}
