//! Search bar component renderer.
//!
//! Renders the bordered filter box shown above the directory while the expanded
//! region's countries are being filtered.

use crate::ui::helpers::{char_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Filter: query_   │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// Long queries keep their tail visible. Returns the next available row position
/// (row + 3).
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let border = |left: char, right: char, r: usize| {
        position_cursor(r, 1);
        print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
        print!("{}", Theme::fg(&theme.colors.search_bar_border));
        print!("{left}{}{right}", "─".repeat(inner_width));
        print!("{}", Theme::reset());
    };

    border('┌', '┐', row);

    let prefix = " Filter: ";
    let room = inner_width.saturating_sub(char_width(prefix) + 1);
    let query = if char_width(&search.query) > room {
        let skip = char_width(&search.query) - room;
        search.query.chars().skip(skip).collect()
    } else {
        search.query.clone()
    };
    let search_text = truncate(&format!("{prefix}{query}_"), inner_width);
    let padding = inner_width.saturating_sub(char_width(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    border('└', '┘', row + 2);

    row + 3
}
