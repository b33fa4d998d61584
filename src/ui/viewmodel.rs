//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready data: formatted numbers, selection flags and
//! highlight ranges.

/// Number of terminal lines a country card occupies.
pub const CARD_HEIGHT: usize = 5;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows inside the visible window, top to bottom.
    pub rows: Vec<DisplayRow>,

    /// Header information (title, totals).
    pub header: HeaderInfo,

    /// Footer information (keybindings).
    pub footer: FooterInfo,

    /// Message shown instead of the directory (loading, empty, failed).
    pub empty_state: Option<EmptyState>,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,
}

/// One row of the directory list.
#[derive(Debug, Clone)]
pub enum DisplayRow {
    /// A collapsible region header.
    Region(RegionRow),
    /// The sort controls of the expanded region.
    SortControls(Vec<SortControl>),
    /// A country detail card.
    Card(CountryCard),
}

impl DisplayRow {
    /// Number of terminal lines the row occupies.
    #[must_use]
    pub const fn height(&self) -> usize {
        match self {
            Self::Region(_) | Self::SortControls(_) => 1,
            Self::Card(_) => CARD_HEIGHT,
        }
    }
}

/// Display information for a region header.
#[derive(Debug, Clone)]
pub struct RegionRow {
    /// Region-key.
    pub key: String,
    /// Number of countries in the region.
    pub country_count: usize,
    /// Whether this region is the expanded one.
    pub is_expanded: bool,
    /// Whether the cursor is on this header.
    pub is_selected: bool,
}

/// A single sort control.
#[derive(Debug, Clone)]
pub struct SortControl {
    /// Control label ("Name", "Density").
    pub label: String,
    /// Key that applies this sort.
    pub key_hint: char,
    /// Whether this criterion is the active one.
    pub is_active: bool,
}

/// Display information for a country card.
#[derive(Debug, Clone)]
pub struct CountryCard {
    pub name: String,
    pub alpha2_code: String,
    pub capital: String,
    pub region: String,
    /// Population with thousands separators.
    pub population: String,
    /// Area in km², or `n/a`.
    pub area: String,
    /// Rounded density, or `n/a`.
    pub density: String,
    pub timezone_count: usize,
    pub languages: Vec<String>,
    /// Whether the cursor is on this card.
    pub is_selected: bool,
    /// Character ranges of the name to highlight (search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Message displayed instead of the directory.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "Loading countries...").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,

    /// Whether the message reports a failure.
    pub is_error: bool,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
