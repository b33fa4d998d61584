//! Outbound request description.
//!
//! Zellij echoes an arbitrary context map back with every `WebRequestResult`, which
//! is how the shim recognises the response to its own countries request.

use std::collections::BTreeMap;

/// Endpoint used when the configuration does not name one.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.eu/rest/v1/all";

/// Context key attached to the countries request.
const CONTEXT_KEY: &str = "countrydir_request";

/// Context value identifying the countries request.
const CONTEXT_VALUE: &str = "countries";

/// A GET request for the full country list.
///
/// No headers, query parameters, body, or authentication are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
}

impl FetchRequest {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Context map passed alongside the request and echoed back in the result.
    #[must_use]
    pub fn context() -> BTreeMap<String, String> {
        BTreeMap::from([(CONTEXT_KEY.to_string(), CONTEXT_VALUE.to_string())])
    }

    /// Returns `true` if a result's context belongs to a countries request.
    #[must_use]
    pub fn matches_context(context: &BTreeMap<String, String>) -> bool {
        context.get(CONTEXT_KEY).is_some_and(|v| v == CONTEXT_VALUE)
    }
}
