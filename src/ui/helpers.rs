//! Shared rendering utilities and helpers.
//!
//! Low-level helpers used across UI components: cursor positioning, search match
//! highlighting, and the number and text formatting used on country cards.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Ranges use UTF-8 character indices (inclusive start, exclusive end). Ranges
/// past the end of `text` are ignored, which happens when a highlighted name was
/// truncated for display. When `is_selected` is `true`, match highlighting is
/// disabled to avoid conflicting with selection background colors.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start >= chars.len() || start < current_pos {
            continue;
        }
        let end = end.min(chars.len());

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Truncates `text` to at most `max_chars` characters, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Formats an integer with `,` thousands separators.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an area in km², or `n/a` when unknown.
#[must_use]
pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(a) if a.is_finite() => format!("{a} km²"),
        _ => "n/a".to_string(),
    }
}

/// Enumerates languages as `1. en  2. fr`, or `none` for an empty list.
#[must_use]
pub fn enumerate_languages(languages: &[String]) -> String {
    if languages.is_empty() {
        return "none".to_string();
    }
    languages
        .iter()
        .enumerate()
        .map(|(i, lang)| format!("{}. {lang}", i + 1))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Number of characters `text` occupies, as used for padding calculations.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(38_000), "38,000");
        assert_eq!(format_thousands(1_402_112_000), "1,402,112,000");
    }

    #[test]
    fn area_formatting() {
        assert_eq!(format_area(Some(28748.0)), "28748 km²");
        assert_eq!(format_area(Some(2.02)), "2.02 km²");
        assert_eq!(format_area(None), "n/a");
    }

    #[test]
    fn truncation_is_char_safe() {
        assert_eq!(truncate("Åland Islands", 20), "Åland Islands");
        assert_eq!(truncate("Åland Islands", 8), "Åland...");
    }

    #[test]
    fn languages_are_enumerated() {
        let langs = vec!["English".to_string(), "French".to_string()];
        assert_eq!(enumerate_languages(&langs), "1. English  2. French");
        assert_eq!(enumerate_languages(&[]), "none");
    }
}
