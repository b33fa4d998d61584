//! Decoding of the countries response.

use crate::domain::error::{CountryDirError, Result};
use crate::domain::Country;

/// Checks the HTTP status and decodes the body as a JSON array of countries.
///
/// An empty array is a valid, empty result.
///
/// # Errors
///
/// - [`CountryDirError::FetchFailed`] for any status outside `200..=299`
/// - [`CountryDirError::MalformedResponse`] if the body is not a JSON array of
///   country records
///
/// # Examples
///
/// ```
/// use countrydir::fetch::parse_response;
///
/// let body = br#"[{"name": "Chad", "region": "Africa", "population": 1, "area": 2.0}]"#;
/// let countries = parse_response(200, body)?;
/// assert_eq!(countries[0].name, "Chad");
///
/// assert!(parse_response(503, b"").is_err());
/// # Ok::<(), countrydir::CountryDirError>(())
/// ```
pub fn parse_response(status: u16, body: &[u8]) -> Result<Vec<Country>> {
    let _span = tracing::debug_span!("parse_response", status, body_len = body.len()).entered();

    if !(200..=299).contains(&status) {
        tracing::debug!(status, "countries request returned non-success status");
        return Err(CountryDirError::FetchFailed(format!("HTTP status {status}")));
    }

    let countries: Vec<Country> = serde_json::from_slice(body)?;
    tracing::debug!(country_count = countries.len(), "countries decoded");
    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_is_not_an_error() {
        assert!(parse_response(200, b"[]").unwrap().is_empty());
    }

    #[test]
    fn non_success_status_is_fetch_failure() {
        let err = parse_response(404, b"[]").unwrap_err();
        assert!(matches!(err, CountryDirError::FetchFailed(ref m) if m == "HTTP status 404"));
    }

    #[test]
    fn object_body_is_malformed() {
        let err = parse_response(200, br#"{"status": 404, "message": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, CountryDirError::MalformedResponse(_)));
    }

    #[test]
    fn truncated_body_is_malformed() {
        let err = parse_response(200, br#"[{"name": "Chad""#).unwrap_err();
        assert!(matches!(err, CountryDirError::MalformedResponse(_)));
    }

    #[test]
    fn one_null_code_does_not_reject_the_list() {
        let body = br#"[
            {"name": "Kosovo", "alpha2Code": null, "region": "Europe", "population": 1800000, "area": 10908.0},
            {"name": "Serbia", "alpha2Code": "RS", "region": "Europe", "population": 6900000, "area": 88361.0}
        ]"#;
        let countries = parse_response(200, body).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].alpha2_code, "");
    }

    #[test]
    fn decodes_records_in_order() {
        let body = br#"[
            {"name": "Norway", "alpha2Code": "NO", "region": "Europe", "population": 5, "area": 323802.0},
            {"name": "Nepal", "alpha2Code": "NP", "region": "Asia", "population": 29, "area": 147181.0}
        ]"#;
        let countries = parse_response(200, body).unwrap();
        let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Norway", "Nepal"]);
    }
}
