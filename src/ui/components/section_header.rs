use crate::ui::theme::Theme;

/// Blank spacer, bold title, divider underneath.
pub fn render(out: &mut Vec<String>, title: &str, theme: &Theme, cols: usize) {
    out.push(String::new());
    out.push(format!(
        "{}{} {title}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.section_header_fg),
        Theme::reset()
    ));
    out.push(format!(
        "{}{}{}",
        Theme::fg(&theme.colors.divider),
        "─".repeat(cols),
        Theme::reset()
    ));
}
