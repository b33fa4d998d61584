//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the countrydir library and the Zellij plugin
//! system: it translates host events into library events, runs the handler and
//! performs the resulting actions through host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; the grant triggers the single fetch
//! 3. **Update**: Map key and web events, delegate to the library
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `Enter`/`Space`: Expand or collapse the region under the cursor
//! - `n`: Sort expanded region by name
//! - `d`: Sort expanded region by density
//! - `/`: Filter the expanded region
//! - `q`: Close plugin
//!
//! Search mode:
//! - Characters: Type into the filter
//! - `Enter`: Move focus to the filtered countries
//! - `/`: Return to the filter input
//! - `Esc`: Exit search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use countrydir::fetch::FetchRequest;
use countrydir::{handle_event, Action, Config, Event, InputMode, SearchFocus, SortCriterion};

register_plugin!(State);

/// Longest host error text carried into the failure message.
const MAX_ERROR_CHARS: usize = 120;

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: countrydir::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: countrydir::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests `WebAccess` and subscribes to events.
    ///
    /// The fetch itself waits for the `PermissionRequestResult` event.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        countrydir::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(endpoint = %config.endpoint, theme = ?config.theme_name, "parsed configuration");
        self.app = countrydir::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a host event, runs the handler and executes its actions.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                if !FetchRequest::matches_context(&context) {
                    tracing::debug!(?context, "ignoring unrelated web request result");
                    return false;
                }
                Self::map_web_result(status, body)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        countrydir::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// While the filter input has focus every printable key is typed.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        let mode = self.app.input_mode;
        let typing = mode == InputMode::Search(SearchFocus::Typing);

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char('j') if !typing => Event::KeyDown,
            BareKey::Char('k') if !typing => Event::KeyUp,
            BareKey::Esc => match mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Enter if typing => Event::FocusResults,
            BareKey::Enter => Event::ToggleSelected,
            BareKey::Char(' ') if !typing => Event::ToggleSelected,
            BareKey::Char('n') if !typing => Event::Sort(SortCriterion::Name),
            BareKey::Char('d') if !typing => Event::Sort(SortCriterion::Density),
            BareKey::Char('q') if mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Char('/') => match mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Maps the countries response to an application event.
    ///
    /// Zellij reports transport failures as a non-2xx result whose body is the
    /// error text; that text becomes the failure reason.
    fn map_web_result(status: u16, body: Vec<u8>) -> Event {
        tracing::debug!(status, body_len = body.len(), "countries response received");

        if (200..300).contains(&status) {
            return Event::FetchCompleted { status, body };
        }

        let text = String::from_utf8_lossy(&body);
        let detail: String = text
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(MAX_ERROR_CHARS)
            .collect();
        let error = if detail.trim().is_empty() {
            format!("HTTP status {status}")
        } else {
            format!("HTTP status {status}: {}", detail.trim())
        };
        Event::FetchFailed { error }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchCountries(request) => {
                tracing::debug!(url = %request.url, "issuing web request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    FetchRequest::context(),
                );
            }
        }
    }
}
