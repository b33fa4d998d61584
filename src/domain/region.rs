//! Region grouping of the fetched country list.
//!
//! [`RegionDirectory`] is the ordered mapping from region-key to the countries of
//! that region. Regions keep the order in which they were first seen in the fetched
//! list; countries keep their fetched order until their region is sorted.

use super::country::Country;
use super::sort::SortCriterion;

/// Region-key used for countries whose `region` field is empty.
pub const NO_REGION_KEY: &str = "no-region-given";

/// Returns the grouping key for a country.
#[must_use]
pub fn region_key(country: &Country) -> &str {
    if country.region.is_empty() {
        NO_REGION_KEY
    } else {
        &country.region
    }
}

/// One region and its countries.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionGroup {
    pub key: String,
    pub countries: Vec<Country>,
}

/// Countries grouped by region-key, in first-seen region order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionDirectory {
    groups: Vec<RegionGroup>,
}

impl RegionDirectory {
    /// Groups countries by region-key in a single left-to-right pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use countrydir::{Country, RegionDirectory};
    ///
    /// let directory = RegionDirectory::group(vec![
    ///     Country::new("Peru", "Americas", 1, None),
    ///     Country::new("Chad", "Africa", 1, None),
    ///     Country::new("Chile", "Americas", 1, None),
    /// ]);
    /// let keys: Vec<&str> = directory.keys().collect();
    /// assert_eq!(keys, vec!["Americas", "Africa"]);
    /// ```
    #[must_use]
    pub fn group(countries: Vec<Country>) -> Self {
        let mut groups: Vec<RegionGroup> = Vec::new();

        for country in countries {
            let key = region_key(&country);
            if let Some(group) = groups.iter_mut().find(|g| g.key == key) {
                group.countries.push(country);
            } else {
                groups.push(RegionGroup {
                    key: key.to_string(),
                    countries: vec![country],
                });
            }
        }

        Self { groups }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Total number of countries across all regions.
    #[must_use]
    pub fn country_count(&self) -> usize {
        self.groups.iter().map(|g| g.countries.len()).sum()
    }

    pub fn groups(&self) -> impl Iterator<Item = &RegionGroup> {
        self.groups.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[Country]> {
        self.groups
            .iter()
            .find(|g| g.key == key)
            .map(|g| g.countries.as_slice())
    }

    /// Replaces one region's list with a copy sorted by `criterion`.
    ///
    /// Every other region is left as it is. Returns `false` if `key` is unknown.
    pub fn sort_region(&mut self, key: &str, criterion: SortCriterion) -> bool {
        let Some(group) = self.groups.iter_mut().find(|g| g.key == key) else {
            return false;
        };
        group.countries = criterion.sorted(&group.countries);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Country> {
        vec![
            Country::new("Germany", "Europe", 83, Some(357.0)),
            Country::new("Japan", "Asia", 125, Some(377.0)),
            Country::new("Bouvet Island", "", 0, Some(49.0)),
            Country::new("France", "Europe", 67, Some(551.0)),
            Country::new("India", "Asia", 1400, Some(3287.0)),
            Country::new("Heard Island", "", 0, Some(412.0)),
        ]
    }

    #[test]
    fn every_record_lands_in_exactly_one_group_in_input_order() {
        let input = sample();
        let directory = RegionDirectory::group(input.clone());

        assert_eq!(directory.country_count(), input.len());
        for country in &input {
            let hits = directory
                .groups()
                .filter(|g| g.countries.contains(country))
                .count();
            assert_eq!(hits, 1, "{} grouped {hits} times", country.name);
        }

        let europe: Vec<&str> = directory
            .get("Europe")
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(europe, vec!["Germany", "France"]);
    }

    #[test]
    fn regions_keep_first_seen_order() {
        let directory = RegionDirectory::group(sample());
        let keys: Vec<&str> = directory.keys().collect();
        assert_eq!(keys, vec!["Europe", "Asia", NO_REGION_KEY]);
    }

    #[test]
    fn empty_region_uses_sentinel_key() {
        let directory = RegionDirectory::group(sample());
        assert!(directory.get("").is_none());
        let unassigned = directory.get(NO_REGION_KEY).unwrap();
        assert_eq!(unassigned.len(), 2);
        assert_eq!(unassigned[0].name, "Bouvet Island");
    }

    #[test]
    fn empty_input_yields_empty_directory() {
        let directory = RegionDirectory::group(vec![]);
        assert!(directory.is_empty());
        assert_eq!(directory.country_count(), 0);
    }

    #[test]
    fn sort_region_only_touches_target() {
        let mut directory = RegionDirectory::group(sample());
        let asia_before = directory.get("Asia").unwrap().to_vec();

        assert!(directory.sort_region("Europe", SortCriterion::Name));

        let europe: Vec<&str> = directory
            .get("Europe")
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(europe, vec!["France", "Germany"]);
        assert_eq!(directory.get("Asia").unwrap(), asia_before.as_slice());
        assert!(!directory.sort_region("Oceania", SortCriterion::Name));
    }
}
