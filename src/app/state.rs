//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for the directory:
//! the grouped countries, which region is expanded, the active sort criterion, the
//! fetch status, and the cursor and search state used by the keyboard UI.
//!
//! # Transitions
//!
//! The behavioural core is a handful of explicit transitions, each a plain method
//! that the event handler calls:
//!
//! - [`AppState::begin_fetch`] / [`AppState::apply_fetch_result`]: the one-time load
//! - [`AppState::toggle_region`]: accordion expansion
//! - [`AppState::sort_region`]: re-sorting one region's list
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns a state snapshot into display rows with
//! windowing around the cursor. It never mutates state.
//!
//! # Example
//!
//! ```rust
//! use countrydir::{AppState, Country, SortCriterion, Theme};
//!
//! let mut state = AppState::new(Theme::default(), "https://example.invalid/all");
//! state.begin_fetch();
//! state.apply_fetch_result(Ok(vec![
//!     Country::new("Spain", "Europe", 47, Some(505.0)),
//!     Country::new("Malta", "Europe", 1, Some(0.3)),
//! ]));
//! state.toggle_region("Europe");
//! state.sort_region("Europe", SortCriterion::Density);
//! assert_eq!(state.directory.get("Europe").unwrap()[0].name, "Malta");
//! ```

use super::modes::{InputMode, LoadStatus, SearchFocus};
use crate::domain::{Country, RegionDirectory, RegionGroup, Result, SortCriterion};
use crate::fetch::FetchRequest;
use crate::ui::helpers::{format_area, format_thousands, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CountryCard, DisplayRow, EmptyState, FooterInfo, HeaderInfo, RegionRow, SearchBarInfo,
    SortControl, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Lines reserved for chrome in normal mode (blank, header, two borders, footer).
const NORMAL_CHROME_ROWS: usize = 5;

/// Lines reserved for chrome in search mode (normal chrome plus the 3-line search box).
const SEARCH_CHROME_ROWS: usize = 8;

/// Longest country name shown on a card before truncation.
const MAX_NAME_WIDTH: usize = 48;

/// A selectable position in the directory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// A region header, by group index.
    Region(usize),
    /// A country card inside the expanded region, by group and country index.
    Country { region: usize, country: usize },
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Countries grouped by region-key.
    ///
    /// Populated once by [`AppState::apply_fetch_result`]; afterwards only single
    /// regions are replaced by sorted copies.
    pub directory: RegionDirectory,

    /// Region-key of the expanded region, if any. At most one region is expanded.
    pub expanded_region: Option<String>,

    /// Criterion last applied, used to highlight the active sort control.
    pub sort_by: SortCriterion,

    /// Progress of the one-time fetch.
    pub load_status: LoadStatus,

    /// Whether the fetch action has been emitted. Never reset.
    pub fetch_issued: bool,

    /// Zero-based cursor position within [`AppState::entries`].
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Fuzzy filter applied to the expanded region's country names.
    pub search_query: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// URL of the countries endpoint.
    pub endpoint: String,
}

impl AppState {
    /// Creates an empty state: nothing loaded, no region expanded, name sort active.
    #[must_use]
    pub fn new(theme: Theme, endpoint: impl Into<String>) -> Self {
        Self {
            directory: RegionDirectory::default(),
            expanded_region: None,
            sort_by: SortCriterion::Name,
            load_status: LoadStatus::Idle,
            fetch_issued: false,
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            theme,
            endpoint: endpoint.into(),
        }
    }

    /// Marks the fetch as issued and returns the request to send.
    ///
    /// Returns `None` on every call after the first, so at most one request is
    /// made per plugin lifetime.
    pub fn begin_fetch(&mut self) -> Option<FetchRequest> {
        if self.fetch_issued {
            tracing::debug!("fetch already issued, ignoring");
            return None;
        }
        self.fetch_issued = true;
        self.load_status = LoadStatus::Loading;
        Some(FetchRequest::new(self.endpoint.clone()))
    }

    /// Folds the outcome of the fetch into state.
    ///
    /// - non-empty list: grouped into [`AppState::directory`]
    /// - empty list: directory left unchanged, status [`LoadStatus::Empty`]
    /// - error: directory left unchanged, status [`LoadStatus::Failed`]
    ///
    /// Results arriving while no fetch is in flight are ignored. Returns `true` if
    /// state changed.
    pub fn apply_fetch_result(&mut self, result: Result<Vec<Country>>) -> bool {
        if self.load_status != LoadStatus::Loading {
            tracing::debug!(status = ?self.load_status, "unexpected fetch result, ignoring");
            return false;
        }

        match result {
            Ok(countries) if countries.is_empty() => {
                tracing::debug!("countries endpoint returned an empty list");
                self.load_status = LoadStatus::Empty;
            }
            Ok(countries) => {
                let count = countries.len();
                self.directory = RegionDirectory::group(countries);
                tracing::debug!(
                    country_count = count,
                    region_count = self.directory.len(),
                    "countries grouped by region"
                );
                self.load_status = LoadStatus::Loaded {
                    count,
                    fetched_at: chrono::Utc::now(),
                };
                self.selected_index = 0;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load countries");
                self.load_status = LoadStatus::Failed {
                    reason: e.to_string(),
                };
            }
        }
        true
    }

    /// Expands `key`, or collapses it if it is already the expanded region.
    ///
    /// Either way the active sort label resets to [`SortCriterion::Name`] without
    /// re-sorting any list, any search is cleared, and the cursor moves to the
    /// region's header. Returns `false` for an unknown region-key.
    pub fn toggle_region(&mut self, key: &str) -> bool {
        if self.directory.get(key).is_none() {
            tracing::debug!(region = %key, "toggle on unknown region");
            return false;
        }

        if self.expanded_region.as_deref() == Some(key) {
            tracing::debug!(region = %key, "collapsing region");
            self.expanded_region = None;
        } else {
            tracing::debug!(region = %key, previous = ?self.expanded_region, "expanding region");
            self.expanded_region = Some(key.to_string());
        }

        self.sort_by = SortCriterion::Name;
        self.input_mode = InputMode::Normal;
        self.search_query.clear();
        self.select_region_header(key);
        true
    }

    /// Re-sorts one region's list by `criterion`.
    ///
    /// Only that region's list is replaced; other regions keep whatever order they
    /// had. The region becomes the expanded one and `sort_by` records `criterion`.
    /// Returns `false` for an unknown region-key.
    pub fn sort_region(&mut self, key: &str, criterion: SortCriterion) -> bool {
        let _span = tracing::debug_span!("sort_region", region = %key, criterion = ?criterion).entered();

        if !self.directory.sort_region(key, criterion) {
            tracing::debug!("sort on unknown region");
            return false;
        }

        if self.expanded_region.as_deref() != Some(key) {
            self.expanded_region = Some(key.to_string());
            self.select_region_header(key);
        }
        self.sort_by = criterion;
        self.clamp_selection();
        true
    }

    /// Sorts the expanded region, if there is one.
    pub fn sort_expanded(&mut self, criterion: SortCriterion) -> bool {
        match self.expanded_region.clone() {
            Some(key) => self.sort_region(&key, criterion),
            None => {
                tracing::debug!("no region expanded, ignoring sort");
                false
            }
        }
    }

    /// Selectable entries in display order.
    ///
    /// Every region header, followed (for the expanded region only) by the
    /// countries that pass the search filter.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries = Vec::new();
        for (region_idx, group) in self.directory.groups().enumerate() {
            entries.push(Entry::Region(region_idx));
            if self.is_expanded(group) {
                entries.extend(
                    self.visible_countries(group)
                        .into_iter()
                        .map(|country| Entry::Country { region: region_idx, country }),
                );
            }
        }
        entries
    }

    /// Returns the entry under the cursor.
    #[must_use]
    pub fn selected_entry(&self) -> Option<Entry> {
        self.entries().get(self.selected_index).copied()
    }

    /// Region-key of the header under the cursor, if the cursor is on a header.
    #[must_use]
    pub fn selected_region_key(&self) -> Option<String> {
        match self.selected_entry()? {
            Entry::Region(idx) => self.directory.groups().nth(idx).map(|g| g.key.clone()),
            Entry::Country { .. } => None,
        }
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        let len = self.entries().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        let len = self.entries().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Re-anchors the cursor after the search query changed.
    ///
    /// Keeps the cursor on the expanded region's header while typing so the
    /// filtered countries stay directly below it.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            query_len = self.search_query.len(),
            expanded = ?self.expanded_region
        )
        .entered();

        if let Some(key) = self.expanded_region.clone() {
            self.select_region_header(&key);
        }
        self.clamp_selection();

        tracing::debug!(entry_count = self.entries().len(), "search filter applied");
    }

    fn is_expanded(&self, group: &RegionGroup) -> bool {
        self.expanded_region.as_deref() == Some(group.key.as_str())
    }

    /// Indices of a group's countries that match the search query.
    fn visible_countries(&self, group: &RegionGroup) -> Vec<usize> {
        use fuzzy_matcher::FuzzyMatcher;

        let tokens: Vec<String> = self
            .search_query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        if tokens.is_empty() {
            return (0..group.countries.len()).collect();
        }

        let matcher = SkimMatcherV2::default();
        group
            .countries
            .iter()
            .enumerate()
            .filter(|(_, country)| {
                let name_lower = country.name.to_lowercase();
                tokens
                    .iter()
                    .all(|token| matcher.fuzzy_match(&name_lower, token).is_some())
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    fn select_region_header(&mut self, key: &str) {
        let Some(region_idx) = self.directory.keys().position(|k| k == key) else {
            return;
        };
        if let Some(pos) = self
            .entries()
            .iter()
            .position(|e| *e == Entry::Region(region_idx))
        {
            self.selected_index = pos;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.entries().len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// Produces an empty-state message until countries are loaded. Otherwise emits a
    /// header row per region, the sort controls and country cards for the expanded
    /// region, and trims the rows to a window that keeps the cursor visible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let header = self.compute_header();
        let footer = self.compute_footer();
        let search_bar = self.compute_search_bar();

        if let Some(empty_state) = self.compute_empty_state() {
            return UIViewModel {
                rows: vec![],
                header,
                footer,
                empty_state: Some(empty_state),
                search_bar: None,
            };
        }

        let entries = self.entries();
        let mut display_rows = Vec::with_capacity(entries.len() + 1);
        let mut selected_row = 0;
        let matcher = (!self.search_query.is_empty()).then(SkimMatcherV2::default);

        for (entry_idx, entry) in entries.iter().enumerate() {
            let is_selected = entry_idx == self.selected_index;
            if is_selected {
                selected_row = display_rows.len();
            }

            match *entry {
                Entry::Region(region_idx) => {
                    let Some(group) = self.directory.groups().nth(region_idx) else {
                        continue;
                    };
                    let is_expanded = self.is_expanded(group);
                    display_rows.push(DisplayRow::Region(RegionRow {
                        key: group.key.clone(),
                        country_count: group.countries.len(),
                        is_expanded,
                        is_selected,
                    }));
                    if is_expanded {
                        display_rows.push(DisplayRow::SortControls(self.compute_sort_controls()));
                    }
                }
                Entry::Country { region, country } => {
                    let Some(country) = self
                        .directory
                        .groups()
                        .nth(region)
                        .and_then(|g| g.countries.get(country))
                    else {
                        continue;
                    };
                    display_rows.push(DisplayRow::Card(self.compute_card(
                        country,
                        is_selected,
                        cols,
                        matcher.as_ref(),
                    )));
                }
            }
        }

        let available_rows = self.calculate_available_rows(rows);
        let heights: Vec<usize> = display_rows.iter().map(DisplayRow::height).collect();
        let (start, end) = visible_window(&heights, selected_row, available_rows);

        UIViewModel {
            rows: display_rows.drain(start..end).collect(),
            header,
            footer,
            empty_state: None,
            search_bar,
        }
    }

    fn compute_sort_controls(&self) -> Vec<SortControl> {
        SortCriterion::ALL
            .iter()
            .map(|criterion| SortControl {
                label: criterion.label().to_string(),
                key_hint: match criterion {
                    SortCriterion::Name => 'n',
                    SortCriterion::Density => 'd',
                },
                is_active: *criterion == self.sort_by,
            })
            .collect()
    }

    fn compute_card(
        &self,
        country: &Country,
        is_selected: bool,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> CountryCard {
        let name_width = MAX_NAME_WIDTH.min(cols.saturating_sub(12)).max(8);
        let name = truncate(&country.name, name_width);
        let visible_chars = if name == country.name {
            name_width
        } else {
            name_width.saturating_sub(3)
        };

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            highlight_ranges(m, &country.name, &self.search_query, visible_chars)
        });

        CountryCard {
            name,
            alpha2_code: country.alpha2_code.clone(),
            capital: country.capital.clone(),
            region: country.region.clone(),
            population: format_thousands(country.population),
            area: format_area(country.area),
            density: country.density_label(),
            timezone_count: country.timezones.len(),
            languages: country.languages.clone(),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match &self.load_status {
            LoadStatus::Loaded { count, fetched_at } => format!(
                " Countries ({count} in {} regions, fetched {} UTC) ",
                self.directory.len(),
                fetched_at.format("%H:%M")
            ),
            _ => " Countries ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.expanded_region.is_some()) {
            (InputMode::Search(SearchFocus::Typing), _) => {
                "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter"
            }
            (InputMode::Search(SearchFocus::Navigating), _) => {
                "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: toggle"
            }
            (InputMode::Normal, false) => "j/k or Ctrl+n/p: navigate  Enter: expand  q: quit",
            (InputMode::Normal, true) => {
                "j/k: navigate  Enter: expand/collapse  n: sort by name  d: sort by density  /: search  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let (message, subtitle, is_error) = match &self.load_status {
            LoadStatus::Idle => (
                "Waiting for permissions".to_string(),
                "Grant web access to load the country list".to_string(),
                false,
            ),
            LoadStatus::Loading => (
                "Loading countries...".to_string(),
                self.endpoint.clone(),
                false,
            ),
            LoadStatus::Empty => (
                "No countries".to_string(),
                "The endpoint returned an empty list".to_string(),
                false,
            ),
            LoadStatus::Failed { reason } => (
                "Could not load countries".to_string(),
                reason.clone(),
                true,
            ),
            LoadStatus::Loaded { .. } if self.directory.is_empty() => (
                "No countries".to_string(),
                String::new(),
                false,
            ),
            LoadStatus::Loaded { .. } => return None,
        };

        Some(EmptyState {
            message,
            subtitle,
            is_error,
        })
    }

    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(NORMAL_CHROME_ROWS),
            InputMode::Search(_) => total_rows.saturating_sub(SEARCH_CHROME_ROWS),
        }
    }
}

/// Chooses the range of rows to draw so the selected row is visible.
///
/// Up to half the budget is spent on rows above the selection, the rest below; any
/// budget left at the end of the list is given back to rows above. The selected row
/// is always included, even if it alone exceeds the budget.
#[must_use]
pub fn visible_window(heights: &[usize], selected: usize, budget: usize) -> (usize, usize) {
    if heights.is_empty() {
        return (0, 0);
    }
    let selected = selected.min(heights.len() - 1);

    let mut start = selected;
    let mut end = selected + 1;
    let mut used = heights[selected];

    let mut above = 0;
    while start > 0 && above + heights[start - 1] <= budget / 2 && used + heights[start - 1] <= budget {
        start -= 1;
        above += heights[start];
        used += heights[start];
    }

    while end < heights.len() && used + heights[end] <= budget {
        used += heights[end];
        end += 1;
    }

    while start > 0 && used + heights[start - 1] <= budget {
        start -= 1;
        used += heights[start];
    }

    (start, end)
}

/// Match ranges of every query token in `name`, limited to its first
/// `visible_chars` characters.
///
/// Tokens are matched independently, mirroring the filter, so word order in the
/// query does not matter.
fn highlight_ranges(
    matcher: &SkimMatcherV2,
    name: &str,
    query: &str,
    visible_chars: usize,
) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let mut indices: Vec<usize> = query
        .split_whitespace()
        .map(str::to_lowercase)
        .filter_map(|token| matcher.fuzzy_indices(name, &token))
        .flat_map(|(_score, indices)| indices)
        .filter(|&idx| idx < visible_chars)
        .collect();
    indices.sort_unstable();
    indices.dedup();
    coalesce_indices(&indices)
}

/// Coalesces sorted character indices into `(start, end)` ranges (exclusive end).
fn coalesce_indices(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
