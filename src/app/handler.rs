//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! host events, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Directory**: `ToggleSelected`, `ToggleRegion`, `Sort`, `SortRegion`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`,
//!   `Char`, `Backspace`, `Escape`
//! - **System**: `PermissionsResult`, `FetchCompleted`, `FetchFailed`
//!
//! # Example
//!
//! ```rust
//! use countrydir::{handle_event, Action, AppState, Event, Theme};
//!
//! let mut state = AppState::new(Theme::default(), "https://example.invalid/all");
//! let (_render, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(matches!(actions.as_slice(), [Action::FetchCountries(_)]));
//! # Ok::<(), countrydir::CountryDirError>(())
//! ```

use crate::app::modes::{InputMode, LoadStatus, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::{CountryDirError, Result};
use crate::domain::SortCriterion;
use crate::fetch::parse_response;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Closes the plugin pane.
    CloseFocus,

    /// Toggles the region whose header is under the cursor.
    ToggleSelected,
    /// Toggles a region by key.
    ToggleRegion {
        /// Region-key to toggle.
        key: String,
    },
    /// Sorts the expanded region.
    Sort(SortCriterion),
    /// Sorts a region by key.
    SortRegion {
        /// Region-key to sort.
        key: String,
        /// Criterion to apply.
        criterion: SortCriterion,
    },

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the filtered countries (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears search query and returns to normal mode.
    Escape,

    /// Reports the outcome of the permission request.
    ///
    /// A grant triggers the one-time countries fetch.
    PermissionsResult {
        /// Whether the requested permissions were granted.
        granted: bool,
    },

    /// Carries the raw response of the countries request.
    FetchCompleted {
        /// HTTP status reported by the host.
        status: u16,
        /// Response body.
        body: Vec<u8>,
    },

    /// Reports that the countries request could not be performed.
    FetchFailed {
        /// Error message describing the failure.
        error: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Currently every failure is folded into state (fetch and decode errors become
/// [`LoadStatus::Failed`]); the `Result` is kept for the shim's uniform handling.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ToggleSelected => {
            let Some(key) = state.selected_region_key() else {
                tracing::debug!("cursor is not on a region header");
                return Ok((false, vec![]));
            };
            Ok((state.toggle_region(&key), vec![]))
        }
        Event::ToggleRegion { key } => Ok((state.toggle_region(key), vec![])),
        Event::Sort(criterion) => {
            if matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }
            Ok((state.sort_expanded(*criterion), vec![]))
        }
        Event::SortRegion { key, criterion } => Ok((state.sort_region(key, *criterion), vec![])),
        Event::SearchMode => {
            if state.expanded_region.is_none() {
                tracing::debug!("search needs an expanded region");
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            if state.input_mode == InputMode::Normal && state.search_query.is_empty() {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.search_query, "leaving search mode");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }
            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }
            state.search_query.pop();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::warn!("web access denied - countries cannot be loaded");
                if state.load_status == LoadStatus::Idle {
                    state.load_status = LoadStatus::Failed {
                        reason: "Web access permission denied".to_string(),
                    };
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            }

            match state.begin_fetch() {
                Some(request) => {
                    tracing::debug!(url = %request.url, "requesting countries");
                    Ok((true, vec![Action::FetchCountries(request)]))
                }
                None => Ok((false, vec![])),
            }
        }
        Event::FetchCompleted { status, body } => {
            let result = parse_response(*status, body);
            Ok((state.apply_fetch_result(result), vec![]))
        }
        Event::FetchFailed { error } => {
            let result = Err(CountryDirError::FetchFailed(error.clone()));
            Ok((state.apply_fetch_result(result), vec![]))
        }
    }
}

/// Compact event name for span fields; avoids logging response bodies.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::FetchCompleted { status, body } => f
                .debug_struct("FetchCompleted")
                .field("status", status)
                .field("body_len", &body.len())
                .finish(),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    const BODY: &str = r#"[
        {"name": "Germany", "alpha2Code": "DE", "region": "Europe", "population": 83000000, "area": 357022.0},
        {"name": "Japan", "alpha2Code": "JP", "region": "Asia", "population": 125000000, "area": 377975.0},
        {"name": "Monaco", "alpha2Code": "MC", "region": "Europe", "population": 38000, "area": 2.02},
        {"name": "Bouvet Island", "alpha2Code": "BV", "region": "", "population": 0, "area": 49.0},
        {"name": "Austria", "alpha2Code": "AT", "region": "Europe", "population": 8900000, "area": 83871.0},
        {"name": "Bhutan", "alpha2Code": "BT", "region": "Asia", "population": 770000, "area": 38394.0},
        {"name": "Singapore", "alpha2Code": "SG", "region": "Asia", "population": 5600000, "area": 728.0}
    ]"#;

    fn run(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Theme::default(), "https://example.invalid/all");
        run(&mut state, Event::PermissionsResult { granted: true });
        run(
            &mut state,
            Event::FetchCompleted {
                status: 200,
                body: BODY.as_bytes().to_vec(),
            },
        );
        state
    }

    fn names(state: &AppState, key: &str) -> Vec<String> {
        state
            .directory
            .get(key)
            .unwrap()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    #[test]
    fn permission_grant_fetches_exactly_once() {
        let mut state = AppState::new(Theme::default(), "https://example.invalid/all");

        let (render, actions) = run(&mut state, Event::PermissionsResult { granted: true });
        assert!(render);
        assert_eq!(actions.len(), 1);
        let Action::FetchCountries(request) = &actions[0] else {
            panic!("expected a fetch action");
        };
        assert_eq!(request.url, "https://example.invalid/all");

        let (_, actions) = run(&mut state, Event::PermissionsResult { granted: true });
        assert!(actions.is_empty());
    }

    #[test]
    fn denied_permission_renders_failure() {
        let mut state = AppState::new(Theme::default(), "u");
        let (render, actions) = run(&mut state, Event::PermissionsResult { granted: false });
        assert!(render);
        assert!(actions.is_empty());
        assert!(matches!(state.load_status, LoadStatus::Failed { .. }));
    }

    #[test]
    fn successful_fetch_groups_countries() {
        let state = loaded_state();
        let keys: Vec<&str> = state.directory.keys().collect();
        assert_eq!(keys, vec!["Europe", "Asia", "no-region-given"]);
        assert_eq!(names(&state, "Europe"), vec!["Germany", "Monaco", "Austria"]);
        assert!(matches!(state.load_status, LoadStatus::Loaded { count: 7, .. }));
    }

    #[test]
    fn malformed_body_becomes_failed_state() {
        let mut state = AppState::new(Theme::default(), "u");
        run(&mut state, Event::PermissionsResult { granted: true });
        let (render, _) = run(
            &mut state,
            Event::FetchCompleted {
                status: 200,
                body: b"<html>gateway timeout</html>".to_vec(),
            },
        );
        assert!(render);
        assert!(matches!(
            state.load_status,
            LoadStatus::Failed { ref reason } if reason.starts_with("Malformed response")
        ));
        assert!(state.directory.is_empty());
    }

    #[test]
    fn transport_failure_becomes_failed_state() {
        let mut state = AppState::new(Theme::default(), "u");
        run(&mut state, Event::PermissionsResult { granted: true });
        run(
            &mut state,
            Event::FetchFailed {
                error: "connection refused".to_string(),
            },
        );
        assert_eq!(
            state.load_status,
            LoadStatus::Failed {
                reason: "Fetch failed: connection refused".to_string()
            }
        );
    }

    #[test]
    fn empty_response_is_no_data() {
        let mut state = AppState::new(Theme::default(), "u");
        run(&mut state, Event::PermissionsResult { granted: true });
        run(
            &mut state,
            Event::FetchCompleted {
                status: 200,
                body: b"[]".to_vec(),
            },
        );
        assert_eq!(state.load_status, LoadStatus::Empty);
        assert!(state.directory.is_empty());
    }

    #[test]
    fn toggle_scenario_through_events() {
        let mut state = loaded_state();

        run(&mut state, Event::ToggleRegion { key: "Europe".into() });
        assert_eq!(state.expanded_region.as_deref(), Some("Europe"));
        assert_eq!(state.sort_by, SortCriterion::Name);

        run(&mut state, Event::ToggleRegion { key: "Europe".into() });
        assert_eq!(state.expanded_region, None);

        run(&mut state, Event::ToggleRegion { key: "Europe".into() });
        run(&mut state, Event::ToggleRegion { key: "Asia".into() });
        assert_eq!(state.expanded_region.as_deref(), Some("Asia"));
        assert_eq!(state.sort_by, SortCriterion::Name);
    }

    #[test]
    fn keyboard_toggle_and_sort() {
        let mut state = loaded_state();

        run(&mut state, Event::ToggleSelected);
        assert_eq!(state.expanded_region.as_deref(), Some("Europe"));

        run(&mut state, Event::Sort(SortCriterion::Density));
        assert_eq!(names(&state, "Europe"), vec!["Monaco", "Germany", "Austria"]);
        assert_eq!(state.sort_by, SortCriterion::Density);

        // Cursor on a country card: Enter does nothing.
        run(&mut state, Event::KeyDown);
        let (render, _) = run(&mut state, Event::ToggleSelected);
        assert!(!render);
        assert_eq!(state.expanded_region.as_deref(), Some("Europe"));
    }

    #[test]
    fn sort_isolation_through_events() {
        let mut state = loaded_state();

        run(
            &mut state,
            Event::SortRegion {
                key: "Europe".into(),
                criterion: SortCriterion::Density,
            },
        );
        run(&mut state, Event::ToggleRegion { key: "Asia".into() });
        run(&mut state, Event::Sort(SortCriterion::Name));

        assert_eq!(names(&state, "Europe"), vec!["Monaco", "Germany", "Austria"]);
        assert_eq!(names(&state, "Asia"), vec!["Bhutan", "Japan", "Singapore"]);
    }

    #[test]
    fn search_typing_does_not_trigger_sort_keys() {
        let mut state = loaded_state();
        run(&mut state, Event::ToggleRegion { key: "Europe".into() });
        run(&mut state, Event::SearchMode);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));

        let (render, _) = run(&mut state, Event::Sort(SortCriterion::Density));
        assert!(!render);
        run(&mut state, Event::Char('m'));
        run(&mut state, Event::Char('o'));
        assert_eq!(state.search_query, "mo");

        run(&mut state, Event::Backspace);
        assert_eq!(state.search_query, "m");

        run(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

        run(&mut state, Event::ExitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn escape_in_normal_mode_keeps_cursor() {
        let mut state = loaded_state();
        run(&mut state, Event::ToggleRegion { key: "Europe".into() });
        run(&mut state, Event::KeyDown);
        run(&mut state, Event::KeyDown);
        assert_eq!(state.selected_index, 2);

        let (render, actions) = run(&mut state, Event::Escape);
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.selected_index, 2);
    }

    #[test]
    fn search_requires_expanded_region() {
        let mut state = loaded_state();
        let (render, _) = run(&mut state, Event::SearchMode);
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = loaded_state();
        let (render, actions) = run(&mut state, Event::CloseFocus);
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
