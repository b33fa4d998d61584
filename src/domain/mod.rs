//! Domain layer for the countrydir plugin.
//!
//! This module contains the core domain types and business logic for the plugin,
//! independent of Zellij-specific APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`country`]: Country record model and density computation
//! - [`region`]: Region grouping of the fetched list
//! - [`sort`]: Name and density sort criteria
//!
//! # Examples
//!
//! ```
//! use countrydir::domain::{Country, RegionDirectory, SortCriterion};
//!
//! let mut directory = RegionDirectory::group(vec![
//!     Country::new("Malta", "Europe", 500_000, Some(316.0)),
//!     Country::new("Iceland", "Europe", 360_000, Some(103_000.0)),
//! ]);
//! directory.sort_region("Europe", SortCriterion::Name);
//! assert_eq!(directory.get("Europe").unwrap()[0].name, "Iceland");
//! ```

pub mod country;
pub mod error;
pub mod region;
pub mod sort;

pub use country::Country;
pub use error::{CountryDirError, Result};
pub use region::{region_key, RegionDirectory, RegionGroup, NO_REGION_KEY};
pub use sort::SortCriterion;
