//! Top-level rendering entry point.
//!
//! ```text
//! CatalogsViewState → compute_viewmodel → UIViewModel → render → ANSI text
//! ```

use crate::presenter::CatalogsViewState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{compute_viewmodel, UIViewModel};

/// Renders `state` as ANSI-styled text `cols` columns wide.
///
/// The output has one line per screen row, newline-terminated, and does not
/// clear the screen.
///
/// # Example
///
/// ```rust
/// use catalogs::presenter::CatalogsViewState;
/// use catalogs::ui::{render, Theme};
///
/// let screen = render(&CatalogsViewState::default(), &Theme::default(), 40);
/// assert!(screen.contains("Catalogs"));
/// assert!(screen.contains("No catalogs"));
/// ```
#[must_use]
pub fn render(state: &CatalogsViewState, theme: &Theme, cols: usize) -> String {
    let _span = tracing::debug_span!("render", items = state.items.len(), cols).entered();
    render_viewmodel(&compute_viewmodel(state), theme, cols)
}

/// Renders an already computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let mut lines = Vec::with_capacity(vm.rows.len() * 2 + 4);

    components::render_toolbar(&mut lines, &vm.toolbar, theme, cols);
    match &vm.empty_state {
        Some(empty) => components::render_empty_state(&mut lines, empty, theme, cols),
        None => components::render_list(&mut lines, &vm.rows, theme, cols),
    }

    let mut screen = lines.join("\n");
    screen.push('\n');
    screen
}
