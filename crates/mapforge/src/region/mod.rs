//! Region resolution: raw text tokens to canonical geographic anchors.
//!
//! Two static reference tables back the resolver:
//!
//! - **Countries**: ISO 3166-1 alpha-2, alpha-3, common UN numeric codes and
//!   English short names, each mapped to a centroid.
//! - **Indonesian provinces**: the 38 provinces keyed by canonical uppercase
//!   name. Their polygons live in a shared boundary file, not per row.
//!
//! Unknown tokens are not errors. Callers record them in a skip-set and move on.
//!
//! # Example
//!
//! ```
//! use mapforge::region::{RegionMode, RegionResolver};
//!
//! let resolver = RegionResolver::new();
//! let anchor = resolver.resolve("IDN", RegionMode::Country).unwrap();
//! assert_eq!(anchor, resolver.resolve("ID", RegionMode::Country).unwrap());
//! ```

mod countries;
mod provinces;
mod resolver;

pub use countries::{COUNTRIES, CountryRecord};
pub use provinces::{PROVINCE_ALIASES, PROVINCES, ProvinceRecord};
pub use resolver::{BoundaryAsset, Centroid, RegionAnchor, RegionMode, RegionResolver};
