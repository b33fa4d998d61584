//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with totals
//! - [`footer`]: Keybinding hints
//! - [`search`]: Filter input box
//! - [`directory`]: Region headers, sort controls and country cards
//! - [`empty`]: Loading, empty and failure messages
//!
//! # Layout Modes
//!
//! - [`render_normal_mode`]: Header + Directory + Footer
//! - [`render_search_mode`]: Header + Search bar + Directory + Footer

mod directory;
mod empty;
mod footer;
mod header;
mod search;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UIViewModel};

use directory::render_directory_rows;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position (row + 1).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the bottom border and footer, the last two terminal rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let border_row = rows.saturating_sub(1);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(rows, &vm.footer, theme, cols);
}

/// Renders the normal mode layout (no search bar).
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Directory rows, blank padded]
/// [Border]
/// [Footer]
/// ```
///
/// Five lines are chrome; the rest belongs to the directory.
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_directory_rows(current_row, &vm.rows, theme, cols, rows.saturating_sub(1));

    render_bottom(vm, theme, cols, rows);
}

/// Renders the search mode layout.
///
/// Same as [`render_normal_mode`] with the three-line filter box inserted below
/// the header border.
pub fn render_search_mode(
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    render_directory_rows(current_row, &vm.rows, theme, cols, rows.saturating_sub(1));

    render_bottom(vm, theme, cols, rows);
}
