//! Error types for the countrydir plugin.
//!
//! This module defines the centralized error type [`CountryDirError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! An empty country list is not an error: the loader reports it as `Ok(vec![])` and
//! the application renders the "no data" state.

use thiserror::Error;

/// The main error type for countrydir plugin operations.
///
/// Fetch and decode failures are recovered locally by the application layer, which
/// renders an explicit error state instead of the directory. The remaining variants
/// cover theme loading: an unreadable file or unparseable TOML.
///
/// # Examples
///
/// ```
/// use countrydir::CountryDirError;
///
/// let err = CountryDirError::FetchFailed("HTTP status 503".to_string());
/// assert_eq!(err.to_string(), "Fetch failed: HTTP status 503");
/// ```
#[derive(Debug, Error)]
pub enum CountryDirError {
    /// The countries request did not complete successfully.
    ///
    /// Covers transport failures reported by the host and any non-2xx status.
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// The response body was not a JSON array of country records.
    ///
    /// Automatically converts from `serde_json::Error` using the `#[from]` attribute.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for countrydir operations.
pub type Result<T> = std::result::Result<T, CountryDirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_response_wraps_serde_error() {
        let err: CountryDirError = serde_json::from_str::<Vec<u8>>("{")
            .map_err(CountryDirError::from)
            .unwrap_err();
        assert!(matches!(err, CountryDirError::MalformedResponse(_)));
        assert!(err.to_string().starts_with("Malformed response:"));
    }
}
