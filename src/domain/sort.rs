//! Sort criteria for a region's country list.
//!
//! Both comparators are used with the standard library's stable sort, so countries
//! that compare equal keep their current relative order.

use super::country::Country;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Criterion applied to a single region's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortCriterion {
    /// Ascending by raw string comparison of the name (byte-wise, case-sensitive).
    #[default]
    Name,
    /// Descending by population density; undefined densities sort last.
    Density,
}

impl SortCriterion {
    /// All criteria in the order the sort controls are drawn.
    pub const ALL: [Self; 2] = [Self::Name, Self::Density];

    /// Label shown on the sort control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Density => "Density",
        }
    }

    /// Compares two countries under this criterion.
    #[must_use]
    pub fn compare(self, a: &Country, b: &Country) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Density => match (a.density(), b.density()) {
                (Some(da), Some(db)) => db.total_cmp(&da),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }

    /// Returns a sorted copy of `countries`, leaving the input untouched.
    #[must_use]
    pub fn sorted(self, countries: &[Country]) -> Vec<Country> {
        let mut sorted = countries.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(countries: &[Country]) -> Vec<&str> {
        countries.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn name_sort_is_raw_and_case_sensitive() {
        let countries = vec![
            Country::new("albania", "Europe", 1, Some(1.0)),
            Country::new("Zambia", "Africa", 1, Some(1.0)),
            Country::new("Åland Islands", "Europe", 1, Some(1.0)),
            Country::new("Austria", "Europe", 1, Some(1.0)),
        ];
        let sorted = SortCriterion::Name.sorted(&countries);
        assert_eq!(names(&sorted), vec!["Austria", "Zambia", "albania", "Åland Islands"]);
    }

    #[test]
    fn name_sort_is_idempotent() {
        let countries = vec![
            Country::new("Chad", "Africa", 1, None),
            Country::new("Benin", "Africa", 1, None),
            Country::new("Angola", "Africa", 1, None),
        ];
        let once = SortCriterion::Name.sorted(&countries);
        let twice = SortCriterion::Name.sorted(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn density_sort_is_non_increasing_with_undefined_last() {
        let countries = vec![
            Country::new("Sparse", "X", 10, Some(100.0)),
            Country::new("NoArea", "X", 50, None),
            Country::new("Dense", "X", 1_000, Some(1.0)),
            Country::new("ZeroArea", "X", 5, Some(0.0)),
            Country::new("Middle", "X", 500, Some(10.0)),
        ];
        let sorted = SortCriterion::Density.sorted(&countries);
        assert_eq!(
            names(&sorted),
            vec!["Dense", "Middle", "Sparse", "NoArea", "ZeroArea"]
        );

        let densities: Vec<f64> = sorted.iter().filter_map(Country::density).collect();
        for pair in densities.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn density_sort_keeps_ties_in_place() {
        let countries = vec![
            Country::new("First", "X", 10, Some(5.0)),
            Country::new("Second", "X", 20, Some(10.0)),
        ];
        let sorted = SortCriterion::Density.sorted(&countries);
        assert_eq!(names(&sorted), vec!["First", "Second"]);
    }
}
