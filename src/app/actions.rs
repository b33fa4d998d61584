//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. Actions
//! bridge pure state transitions and effectful host calls, which only the plugin
//! shim (`main.rs`) performs.
//!
//! # Example
//!
//! ```rust
//! use countrydir::app::Action;
//! use countrydir::fetch::FetchRequest;
//!
//! let actions = vec![Action::FetchCountries(FetchRequest::new(
//!     "https://restcountries.eu/rest/v1/all",
//! ))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::fetch::FetchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Issues the GET request for the country list.
    ///
    /// Emitted at most once per plugin lifetime.
    FetchCountries(FetchRequest),
}
