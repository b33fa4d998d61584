//! User interface rendering layer.
//!
//! Turns view models into ANSI-styled terminal output through small rendering
//! components, with theme support and search match highlighting.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready data computed from application state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers
//! - [`helpers`]: Cursor, highlighting and number formatting helpers
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CountryCard, DisplayRow, EmptyState, FooterInfo, HeaderInfo, RegionRow, SearchBarInfo,
    SortControl, UIViewModel,
};
