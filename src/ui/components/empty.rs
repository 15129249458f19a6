//! Empty state shown before any catalog list has content.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Two centered lines under a blank spacer.
pub fn render_empty_state(out: &mut Vec<String>, empty: &EmptyState, theme: &Theme, cols: usize) {
    out.push(String::new());
    out.push(format!(
        "{}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        center(&empty.message, cols),
        Theme::reset()
    ));
    out.push(format!(
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_secondary),
        center(&empty.subtitle, cols),
        Theme::reset()
    ));
}
