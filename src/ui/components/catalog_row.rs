use crate::ui::helpers::{display_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CatalogRow;

const NSFW_BADGE: &str = "18+";

/// Two lines: name with the action label right-aligned, then details.
pub fn render(out: &mut Vec<String>, row: &CatalogRow, theme: &Theme, cols: usize) {
    let colors = &theme.colors;

    let badge_width = if row.nsfw { NSFW_BADGE.len() + 1 } else { 0 };
    let action_width = row.action.len() + 1;
    let name_room = cols.saturating_sub(2 + badge_width + action_width + 1);
    let name = truncate(&row.name, name_room);
    let gap = cols.saturating_sub(2 + display_width(&name) + badge_width + action_width);

    let mut first = format!("  {}{name}", Theme::fg(&colors.text_primary));
    if row.nsfw {
        first.push_str(&format!(" {}{NSFW_BADGE}", Theme::fg(&colors.nsfw_fg)));
    }
    first.push_str(&format!(
        "{}{}{}{}",
        " ".repeat(gap),
        Theme::bold(),
        Theme::fg(&colors.button_fg),
        row.action
    ));
    first.push_str(Theme::reset());
    out.push(first);

    out.push(format!(
        "  {}{}{}",
        Theme::fg(&colors.text_secondary),
        truncate(&row.detail, cols.saturating_sub(2)),
        Theme::reset()
    ));
}
