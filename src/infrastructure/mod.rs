//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`; these helpers translate user
//! paths into that namespace and locate the plugin's data directory.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
