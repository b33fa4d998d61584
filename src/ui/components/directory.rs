//! Directory list component renderer.
//!
//! Draws region headers, the expanded region's sort controls and its country
//! cards. Every line is padded to the terminal width so stale output from a
//! previous frame never shows through.

use crate::ui::helpers::{
    char_width, enumerate_languages, position_cursor, render_highlighted_text, truncate,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CountryCard, DisplayRow, RegionRow, SortControl};

/// Left indentation for rows nested under a region header.
const INDENT: &str = "    ";

/// Renders the visible directory rows starting at `row`.
///
/// Rendering stops before `last_row` (exclusive) even if rows remain, so a card
/// that does not fit is cut rather than drawn over the footer. Remaining lines
/// up to `last_row` are blanked. Returns the first row not written.
pub fn render_directory_rows(
    row: usize,
    rows: &[DisplayRow],
    theme: &Theme,
    cols: usize,
    last_row: usize,
) -> usize {
    let mut current = row;

    for display_row in rows {
        if current >= last_row {
            break;
        }
        current = match display_row {
            DisplayRow::Region(region) => render_region_row(current, region, theme, cols),
            DisplayRow::SortControls(controls) => {
                render_sort_controls(current, controls, theme, cols)
            }
            DisplayRow::Card(card) => render_card(current, card, theme, cols, last_row),
        };
    }

    while current < last_row {
        position_cursor(current, 1);
        print!("{}", " ".repeat(cols));
        current += 1;
    }

    current
}

fn render_region_row(row: usize, region: &RegionRow, theme: &Theme, cols: usize) -> usize {
    let marker = if region.is_expanded { '▾' } else { '▸' };
    let text = truncate(
        &format!(" {marker} {} ({})", region.key, region.country_count),
        cols,
    );

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    if region.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.region_fg));
    }
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(char_width(&text))));
    print!("{}", Theme::reset());
    row + 1
}

fn render_sort_controls(row: usize, controls: &[SortControl], theme: &Theme, cols: usize) -> usize {
    let mut used = 0;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    let lead = format!("{INDENT}Sort: ");
    print!("{lead}");
    used += char_width(&lead);

    for control in controls {
        let label = format!("[{}] {}", control.key_hint, control.label);
        if used + char_width(&label) + 1 > cols {
            break;
        }
        if control.is_active {
            print!("{}", Theme::fg(&theme.colors.control_active_fg));
            print!("{}", Theme::bg(&theme.colors.control_active_bg));
            print!("{label}");
            print!("{}", Theme::reset());
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{label}");
        }
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!(" ");
        used += char_width(&label) + 1;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

fn render_card(row: usize, card: &CountryCard, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let mut current = row;

    if current < last_row {
        render_card_title(current, card, theme, cols);
        current += 1;
    }

    let density = if card.density == "n/a" {
        card.density.clone()
    } else {
        format!("{}/km²", card.density)
    };
    let details = [
        format!("Capital: {}  Region: {}", card.capital, card.region),
        format!(
            "Population: {}  Area: {}  Density: {density}",
            card.population, card.area
        ),
        format!("Timezones: {}", card.timezone_count),
        format!("Languages: {}", enumerate_languages(&card.languages)),
    ];

    for detail in details {
        if current >= last_row {
            break;
        }
        let text = truncate(&format!("{INDENT}  {detail}"), cols);
        position_cursor(current, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{text}");
        print!("{}", " ".repeat(cols.saturating_sub(char_width(&text))));
        print!("{}", Theme::reset());
        current += 1;
    }

    current
}

fn render_card_title(row: usize, card: &CountryCard, theme: &Theme, cols: usize) {
    let prefix = format!("{INDENT}● ");
    let suffix = if card.alpha2_code.is_empty() {
        String::new()
    } else {
        format!(" ({})", card.alpha2_code)
    };
    let room = cols.saturating_sub(char_width(&prefix) + char_width(&suffix));
    let name = truncate(&card.name, room);
    let used = char_width(&prefix) + char_width(&name) + char_width(&suffix);

    position_cursor(row, 1);
    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{prefix}");
    print!("{}", Theme::bold());
    render_highlighted_text(&name, &card.highlight_ranges, theme, card.is_selected);
    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{suffix}");
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
}
