use crate::ui::helpers::{display_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToolbarInfo;

/// Bold title on the left, counts on the right, filling the width.
pub fn render_toolbar(out: &mut Vec<String>, toolbar: &ToolbarInfo, theme: &Theme, cols: usize) {
    let colors = &theme.colors;
    let fill = colors.toolbar_bg.as_deref().map(Theme::bg).unwrap_or_default();

    let title = format!(" {}", toolbar.title);
    let subtitle = truncate(
        &toolbar.subtitle,
        cols.saturating_sub(display_width(&title) + 2),
    );
    let gap = cols.saturating_sub(display_width(&title) + display_width(&subtitle) + 1);

    out.push(format!(
        "{fill}{}{}{title}{}{fill}{}{}{subtitle} {}",
        Theme::bold(),
        Theme::fg(&colors.toolbar_fg),
        Theme::reset(),
        Theme::fg(&colors.toolbar_fg),
        " ".repeat(gap),
        Theme::reset()
    ));
}
