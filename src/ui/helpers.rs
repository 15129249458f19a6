//! Shared rendering utilities.
//!
//! Widths are terminal columns as measured by `unicode-width`. Combining marks
//! take none and wide CJK takes two. Flags are counted as two columns whatever
//! the width tables say about regional indicator pairs, which matches how most
//! terminals draw them.

use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Clears the terminal and moves the cursor home.
pub const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Display width of `text` in terminal columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if !text.chars().any(is_regional_indicator) {
        return UnicodeWidthStr::width(text);
    }
    text.chars().map(column_width).sum()
}

// A flag is two regional indicators drawn as one double-width glyph.
const fn is_regional_indicator(c: char) -> bool {
    matches!(c, '\u{1F1E6}'..='\u{1F1FF}')
}

fn column_width(c: char) -> usize {
    if is_regional_indicator(c) {
        1
    } else {
        c.width().unwrap_or(0)
    }
}

/// Shortens `text` to at most `width` columns, ending with `…` when cut.
///
/// Zero-width characters stay attached to the character before them.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = column_width(c);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// `text` followed by spaces up to `width` columns.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(pad))
}

/// `text` centered in `width` columns; extra space goes right.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let len = display_width(text);
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len + left);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Relative age of a unix timestamp, e.g. `"5m ago"`.
///
/// Timestamps in the future read `"just now"`.
///
/// ```rust
/// use catalogs::ui::helpers::time_ago;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.timestamp_opt(10_000, 0).unwrap();
/// assert_eq!(time_ago(10_000 - 90, now), "1m ago");
/// assert_eq!(time_ago(10_000 - 7_200, now), "2h ago");
/// ```
#[must_use]
pub fn time_ago(timestamp: i64, now: DateTime<Utc>) -> String {
    let Some(then) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
        return "unknown".to_string();
    };

    let elapsed = now.signed_duration_since(then);
    if elapsed.num_seconds() < 60 {
        "just now".to_string()
    } else if elapsed.num_minutes() < 60 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn flags_are_two_columns() {
        assert_eq!(display_width("🇫🇷 FR"), 5);
        assert_eq!(display_width("abc"), 3);
    }

    #[test]
    fn precomposed_and_combining_marks() {
        assert_eq!(display_width("Truyện"), 6);
        assert_eq!(display_width("Tiếng Việt"), 10);
        // "e" followed by U+0301 COMBINING ACUTE ACCENT
        assert_eq!(display_width("Cafe\u{301}"), 4);
        assert_eq!(display_width("漫画"), 4);
    }

    #[test]
    fn truncation_keeps_every_column_that_fits() {
        assert_eq!(truncate("Tiếng Việt", 6), "Tiếng…");
        assert_eq!(truncate("Truyện Tranh", 7), "Truyện…");
        assert_eq!(truncate("Cafe\u{301} Manga", 5), "Cafe\u{301}…");
        assert_eq!(truncate("漫画ライブラリ", 5), "漫画…");
    }

    #[test]
    fn truncation_and_padding() {
        assert_eq!(truncate("Catalogs", 20), "Catalogs");
        assert_eq!(truncate("Catalogs", 5), "Cata…");
        assert_eq!(truncate("Catalogs", 0), "");
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(center("ab", 7), "  ab   ");
    }

    #[test]
    fn ages() {
        let now = Utc.timestamp_opt(1_000_000, 0).unwrap();
        assert_eq!(time_ago(1_000_000 + 30, now), "just now");
        assert_eq!(time_ago(1_000_000 - 10, now), "just now");
        assert_eq!(time_ago(1_000_000 - 3 * 86_400, now), "3d ago");
    }
}
