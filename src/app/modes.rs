//! Input mode and load status state types for the application.
//!
//! These enums control how keys are interpreted and which top-level screen the
//! renderer draws.
//!
//! # State Machine
//!
//! Input modes:
//! - **Normal**: Cursor movement, region toggling, sorting
//! - **Search**: Filtering the expanded region's countries, either typing or
//!   navigating the filtered results
//!
//! Load status follows the single fetch:
//!
//! ```text
//! Idle ──grant──▶ Loading ──┬──▶ Loaded { .. }
//!                           ├──▶ Empty
//!                           └──▶ Failed { .. }
//! ```

use chrono::{DateTime, Utc};

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    Typing,

    /// User is moving through the filtered countries.
    ///
    /// Accepts j/k for movement and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), enter (toggle region), n/d (sort),
    /// / (search), q (quit).
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// Progress of the one-time countries fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No request issued yet (waiting for the web access permission).
    #[default]
    Idle,

    /// Request in flight.
    Loading,

    /// Countries were received and grouped.
    Loaded {
        /// Number of records received.
        count: usize,
        /// When the response was processed.
        fetched_at: DateTime<Utc>,
    },

    /// The endpoint answered with an empty list.
    Empty,

    /// The request or its decoding failed.
    Failed {
        /// Human-readable failure description.
        reason: String,
    },
}
