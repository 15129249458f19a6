use crate::ui::helpers::display_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::Chip;

/// Chips separated by one space, wrapped onto as many lines as needed.
pub fn render(out: &mut Vec<String>, chips: &[Chip], theme: &Theme, cols: usize) {
    let colors = &theme.colors;
    let mut line = String::from("  ");
    let mut used = 2;

    for chip in chips {
        let width = display_width(&chip.label) + 2;
        if used > 2 && used + width > cols {
            out.push(std::mem::replace(&mut line, String::from("  ")));
            used = 2;
        }

        let (fg, bg) = if chip.selected {
            (&colors.chip_selected_fg, &colors.chip_selected_bg)
        } else {
            (&colors.chip_fg, &colors.chip_bg)
        };
        if chip.selected {
            line.push_str(Theme::bold());
        }
        line.push_str(&format!(
            "{}{} {} {} ",
            Theme::fg(fg),
            Theme::bg(bg),
            chip.label,
            Theme::reset()
        ));
        used += width + 1;
    }

    out.push(line);
}
