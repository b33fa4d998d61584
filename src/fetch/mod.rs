//! Loader for the countries endpoint.
//!
//! The plugin issues a single web request through Zellij's host API. The request is
//! described here as plain data so the application layer can emit it as an action,
//! and the response is decoded here so the shim only forwards raw bytes.
//!
//! # Architecture
//!
//! - `request`: Description of the outbound GET and its correlation context
//! - `response`: Status checking and JSON decoding into domain records

pub mod request;
pub mod response;

pub use request::{FetchRequest, DEFAULT_ENDPOINT};
pub use response::parse_response;
