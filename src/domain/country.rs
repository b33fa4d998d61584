//! Country domain model.
//!
//! A [`Country`] is the subset of a REST countries record the directory consumes.
//! Deserialization is lenient: missing optional fields fall back to empty values and
//! unknown fields are ignored, so both the v1 and v2 shapes of the public API decode.

use serde::{Deserialize, Deserializer, Serialize};

/// A single country record as consumed by the directory.
///
/// # Fields
///
/// - `name`: Common English name
/// - `alpha2_code`: ISO 3166-1 alpha-2 code (`alpha2Code` on the wire)
/// - `capital`: Capital city, empty when the record has none
/// - `region`: Region name, possibly empty
/// - `population`: Head count, `0` when absent
/// - `area`: Surface area in km², `None` when absent or null
/// - `timezones`: UTC offsets in source order
/// - `languages`: Spoken languages in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alpha2_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capital: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: u64,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezones: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_languages")]
    pub languages: Vec<String>,
}

/// A language entry in either of the shapes served by the countries API.
#[derive(Deserialize)]
#[serde(untagged)]
enum LanguageEntry {
    Code(String),
    Detailed { name: String },
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_languages<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<LanguageEntry>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            LanguageEntry::Code(code) => code,
            LanguageEntry::Detailed { name } => name,
        })
        .collect())
}

impl Country {
    /// Creates a country with the fields the grouping and sorting logic reads.
    ///
    /// Remaining fields are left empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use countrydir::Country;
    ///
    /// let fr = Country::new("France", "Europe", 67_000_000, Some(551_695.0));
    /// assert_eq!(fr.region, "Europe");
    /// assert!(fr.density().is_some());
    /// ```
    #[must_use]
    pub fn new(name: &str, region: &str, population: u64, area: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            alpha2_code: String::new(),
            capital: String::new(),
            region: region.to_string(),
            population,
            area,
            timezones: Vec::new(),
            languages: Vec::new(),
        }
    }

    /// Population per km².
    ///
    /// Returns `None` when the area is missing, zero, negative or not finite, so
    /// the division never produces an infinity or NaN.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn density(&self) -> Option<f64> {
        self.area
            .filter(|area| area.is_finite() && *area > 0.0)
            .map(|area| self.population as f64 / area)
    }

    /// Density rounded to the nearest whole number, or `"n/a"`.
    #[must_use]
    pub fn density_label(&self) -> String {
        self.density()
            .map_or_else(|| "n/a".to_string(), |d| format!("{:.0}", d.round()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_v1_record() {
        let json = r#"{
            "name": "Albania",
            "alpha2Code": "AL",
            "capital": "Tirana",
            "region": "Europe",
            "population": 2886026,
            "area": 28748.0,
            "timezones": ["UTC+01:00"],
            "languages": ["sq"],
            "callingCodes": ["355"]
        }"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.alpha2_code, "AL");
        assert_eq!(country.capital, "Tirana");
        assert_eq!(country.languages, vec!["sq"]);
        assert_eq!(country.timezones.len(), 1);
    }

    #[test]
    fn decodes_detailed_languages_and_nulls() {
        let json = r#"{
            "name": "Antarctica",
            "alpha2Code": "AQ",
            "capital": null,
            "region": "",
            "population": 1000,
            "area": null,
            "languages": [{"iso639_1": "en", "name": "English"}, {"name": "Russian"}]
        }"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.capital, "");
        assert_eq!(country.region, "");
        assert_eq!(country.area, None);
        assert!(country.timezones.is_empty());
        assert_eq!(country.languages, vec!["English", "Russian"]);
    }

    #[test]
    fn null_alpha2_code_decodes_as_empty() {
        let json = r#"{"name": "Kosovo", "alpha2Code": null, "region": "Europe"}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.alpha2_code, "");
        assert_eq!(country.region, "Europe");
    }

    #[test]
    fn density_is_undefined_without_positive_area() {
        assert_eq!(Country::new("A", "X", 10, None).density(), None);
        assert_eq!(Country::new("B", "X", 10, Some(0.0)).density(), None);
        assert_eq!(Country::new("C", "X", 0, Some(0.0)).density(), None);
        assert_eq!(Country::new("D", "X", 10, Some(4.0)).density(), Some(2.5));
    }

    #[test]
    fn density_label_rounds_to_nearest() {
        assert_eq!(Country::new("A", "X", 10, Some(4.0)).density_label(), "3");
        assert_eq!(Country::new("B", "X", 10, Some(3.0)).density_label(), "3");
        assert_eq!(Country::new("C", "X", 10, None).density_label(), "n/a");
    }
}
