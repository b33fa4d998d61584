//! countrydir: a Zellij plugin that browses the world's countries by region.
//!
//! On load the plugin fetches the full country list from a REST endpoint once,
//! groups it by region and shows an accordion of region headers. Expanding a
//! region reveals a sortable list of country cards (capital, population, area,
//! density, timezones, languages); only one region is open at a time.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Fetch Layer   │   │ Domain Layer  │
//! │ (ui/)         │   │ (fetch/)      │   │ (domain/)     │
//! │ - Rendering   │   │ - Request     │   │ - Country     │
//! │ - Theming     │   │ - Decoding    │   │ - Regions     │
//! │ - Components  │   │               │   │ - Sorting     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Country records, region grouping, sort criteria, errors
//! - [`fetch`]: The countries request and its response decoding
//! - [`infrastructure`]: Sandbox path helpers
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/countrydir.wasm" {
//!         endpoint "https://restcountries.eu/rest/v1/all"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    build `AppState`, request `WebAccess`, subscribe to events.
//! 2. **Permission Granted**: the handler emits a single `FetchCountries` action.
//! 3. **Web Result**: the body is decoded and grouped into a `RegionDirectory`.
//! 4. **Interaction**: regions are toggled and sorted from the keyboard.
//!
//! # Example
//!
//! ```rust
//! use countrydir::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let body = br#"[{"name":"Japan","region":"Asia","population":126000000,"area":377930}]"#;
//!
//! handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! handle_event(&mut state, &Event::FetchCompleted { status: 200, body: body.to_vec() })?;
//! handle_event(&mut state, &Event::ToggleRegion { key: "Asia".to_string() })?;
//!
//! assert_eq!(state.expanded_region.as_deref(), Some("Asia"));
//! # Ok::<(), countrydir::CountryDirError>(())
//! ```

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, LoadStatus, SearchFocus};
pub use domain::{Country, CountryDirError, RegionDirectory, Result, SortCriterion};
pub use fetch::DEFAULT_ENDPOINT;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/countrydir.wasm" {
///     endpoint "https://restcountries.eu/rest/v1/all"
///     theme "catppuccin-latte"
///     theme_file "~/.config/countrydir/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL of the countries endpoint. Default: [`DEFAULT_ENDPOINT`].
    pub endpoint: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. A leading `~` maps to the sandbox
    /// `/host` directory. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as absent.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use countrydir::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("endpoint".to_string(), "http://localhost:8080/all".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint, "http://localhost:8080/all");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            endpoint: value("endpoint").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }
}

/// Resolves the theme for `config`: file first, then name, then the default.
///
/// Load failures are logged and fall back to the default theme.
fn resolve_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Builds the initial application state from `config`.
///
/// The returned state is idle: the countries are requested once the host grants
/// web access.
///
/// ```rust
/// use countrydir::{initialize, Config, LoadStatus};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.load_status, LoadStatus::Idle);
/// assert!(state.directory.is_empty());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing countrydir plugin");

    AppState::new(resolve_theme(config), config.endpoint.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn blank_values_are_ignored() {
        let mut map = BTreeMap::new();
        map.insert("endpoint".to_string(), "   ".to_string());
        map.insert("theme".to_string(), String::new());
        map.insert("trace_level".to_string(), " debug ".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.theme_name, None);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn initialize_uses_configured_endpoint_and_theme() {
        let config = Config {
            endpoint: "http://localhost/all".to_string(),
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.endpoint, "http://localhost/all");
        assert_eq!(state.theme.name, "catppuccin-frappe");
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn theme_file_overrides_theme_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = toml::to_string(&Theme::default())
            .unwrap()
            .replace("catppuccin-mocha", "custom");
        file.write_all(custom.as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().to_string_lossy().to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "custom");
    }
}
