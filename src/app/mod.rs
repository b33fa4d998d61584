//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain, fetch and
//! UI layers. It implements the event-driven architecture that powers the
//! interactive directory.
//!
//! # Architecture
//!
//! ```text
//! Key / Web result → Events → Event Handler → State Transitions → Actions → Host calls
//!                                                                     │
//!                                 WebRequestResult ◀──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and load status types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, LoadStatus, SearchFocus};
pub use state::{AppState, Entry};
