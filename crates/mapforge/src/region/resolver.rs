//! Token normalization and anchor lookup.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::countries::{COUNTRIES, CountryRecord};
use super::provinces::{PROVINCE_ALIASES, PROVINCES, ProvinceRecord};

/// Prefix word stripped from province tokens ("PROVINSI JAWA BARAT").
const PROVINCE_PREFIX: &str = "PROVINSI";

/// Country lookup keyed by alpha-2, alpha-3, numeric code and upper-case name.
static COUNTRY_INDEX: Lazy<HashMap<String, &'static CountryRecord>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(COUNTRIES.len() * 3);
    for record in COUNTRIES {
        index.insert(record.alpha2.to_string(), record);
        index.insert(record.alpha3.to_string(), record);
        if let Some(numeric) = record.numeric {
            index.insert(numeric.to_string(), record);
        }
        index.entry(record.name.to_uppercase()).or_insert(record);
    }
    index
});

static PROVINCE_INDEX: Lazy<HashMap<&'static str, &'static ProvinceRecord>> =
    Lazy::new(|| PROVINCES.iter().map(|p| (p.name, p)).collect());

static ALIAS_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PROVINCE_ALIASES.iter().copied().collect());

/// Which reference table a region column is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionMode {
    /// ISO codes, UN numeric codes or English country names.
    Country,
    /// Indonesian province names.
    IndonesiaProvince,
}

/// A shared boundary-polygon resource served by the static-asset host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryAsset {
    IndonesiaProvinces,
    WorldCountries,
}

impl BoundaryAsset {
    /// File name of the asset, also used as the key under a layer folder.
    pub fn file_name(&self) -> &'static str {
        match self {
            BoundaryAsset::IndonesiaProvinces => "indonesia-provinces.geojson",
            BoundaryAsset::WorldCountries => "countries.geojson",
        }
    }
}

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub lat: f64,
    pub lon: f64,
}

/// Canonical geographic anchor for a normalized region token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionAnchor {
    /// Canonical uppercase key (ISO alpha-3 for countries, province name otherwise).
    pub key: String,
    /// Representative point.
    pub centroid: Centroid,
    /// Shared polygon resource the region's shape lives in, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<BoundaryAsset>,
}

/// Resolves raw region tokens against the static country and province tables.
///
/// Resolution is pure: the same token and mode always yield the same anchor.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionResolver;

impl RegionResolver {
    /// Create a resolver over the built-in tables.
    pub fn new() -> Self {
        Self
    }

    /// Normalize a raw token the way region keys are stored.
    ///
    /// Always upper-cases, trims and collapses inner whitespace. In province
    /// mode the "PROVINSI" prefix word is dropped and aliases are applied.
    pub fn normalize(&self, token: &str, mode: RegionMode) -> String {
        let upper = collapse_whitespace(&token.to_uppercase());
        match mode {
            RegionMode::Country => upper,
            RegionMode::IndonesiaProvince => {
                let cleaned = collapse_whitespace(&upper.replace(PROVINCE_PREFIX, " "));
                match ALIAS_INDEX.get(cleaned.as_str()) {
                    Some(canonical) => canonical.to_string(),
                    None => cleaned,
                }
            }
        }
    }

    /// Resolve a token to its anchor, or `None` when it is unknown.
    pub fn resolve(&self, token: &str, mode: RegionMode) -> Option<RegionAnchor> {
        match mode {
            RegionMode::Country => self.resolve_country(token),
            RegionMode::IndonesiaProvince => self.resolve_province(token),
        }
    }

    fn resolve_country(&self, token: &str) -> Option<RegionAnchor> {
        let key = self.normalize(token, RegionMode::Country);
        let record = COUNTRY_INDEX
            .get(&key)
            .or_else(|| strip_numeric_padding(&key).and_then(|k| COUNTRY_INDEX.get(k)))?;

        Some(RegionAnchor {
            key: record.alpha3.to_string(),
            centroid: Centroid {
                lat: record.lat,
                lon: record.lon,
            },
            boundary: Some(BoundaryAsset::WorldCountries),
        })
    }

    fn resolve_province(&self, token: &str) -> Option<RegionAnchor> {
        let cleaned = self.normalize(token, RegionMode::IndonesiaProvince);
        let record = PROVINCE_INDEX.get(cleaned.as_str()).or_else(|| {
            let raw = collapse_whitespace(&token.to_uppercase());
            PROVINCE_INDEX.get(raw.as_str())
        })?;

        Some(RegionAnchor {
            key: record.name.to_string(),
            centroid: Centroid {
                lat: record.lat,
                lon: record.lon,
            },
            boundary: Some(BoundaryAsset::IndonesiaProvinces),
        })
    }

    /// Number of countries in the reference table.
    pub fn country_count(&self) -> usize {
        COUNTRIES.len()
    }

    /// Number of provinces in the reference table.
    pub fn province_count(&self) -> usize {
        PROVINCES.len()
    }
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// "004" -> "4"; `None` when the token is not an all-digit, zero-padded code.
fn strip_numeric_padding(key: &str) -> Option<&str> {
    if key.len() > 1 && key.starts_with('0') && key.bytes().all(|b| b.is_ascii_digit()) {
        let trimmed = key.trim_start_matches('0');
        (!trimmed.is_empty()).then_some(trimmed)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso2_and_iso3_share_centroid() {
        let resolver = RegionResolver::new();
        for record in COUNTRIES {
            let a = resolver.resolve(record.alpha2, RegionMode::Country).unwrap();
            let b = resolver.resolve(record.alpha3, RegionMode::Country).unwrap();
            assert_eq!(a, b, "{} / {}", record.alpha2, record.alpha3);
        }
    }

    #[test]
    fn test_country_name_and_numeric_codes() {
        let resolver = RegionResolver::new();
        let by_name = resolver.resolve(" indonesia ", RegionMode::Country).unwrap();
        let by_code = resolver.resolve("360", RegionMode::Country).unwrap();
        let padded = resolver.resolve("004", RegionMode::Country).unwrap();

        assert_eq!(by_name.key, "IDN");
        assert_eq!(by_name, by_code);
        assert_eq!(padded.key, "AFG");
        assert_eq!(by_code.boundary, Some(BoundaryAsset::WorldCountries));
        assert_eq!(by_name.centroid.lat, -0.789275);
        assert_eq!(by_name.centroid.lon, 113.921327);
    }

    #[test]
    fn test_unknown_country_is_none() {
        let resolver = RegionResolver::new();
        assert!(resolver.resolve("XX", RegionMode::Country).is_none());
        assert!(resolver.resolve("", RegionMode::Country).is_none());
        assert!(resolver.resolve("000", RegionMode::Country).is_none());
    }

    #[test]
    fn test_province_prefix_and_aliases() {
        let resolver = RegionResolver::new();
        assert_eq!(
            resolver.normalize("Provinsi Jawa  Barat", RegionMode::IndonesiaProvince),
            "JAWA BARAT"
        );
        assert_eq!(
            resolver.normalize("diy", RegionMode::IndonesiaProvince),
            "DAERAH ISTIMEWA YOGYAKARTA"
        );
        assert_eq!(
            resolver.normalize("DI Yogyakarta", RegionMode::IndonesiaProvince),
            "DAERAH ISTIMEWA YOGYAKARTA"
        );
        assert_eq!(resolver.normalize("DKI", RegionMode::IndonesiaProvince), "DKI JAKARTA");

        let anchor = resolver
            .resolve("PROVINSI DKI JAKARTA", RegionMode::IndonesiaProvince)
            .unwrap();
        assert_eq!(anchor.key, "DKI JAKARTA");
        assert_eq!(anchor.boundary, Some(BoundaryAsset::IndonesiaProvinces));

        let jogja = resolver.resolve("DI YOGYAKARTA", RegionMode::IndonesiaProvince).unwrap();
        assert_eq!(jogja.key, "DAERAH ISTIMEWA YOGYAKARTA");
        assert_eq!(jogja.centroid.lat, -7.875385);
    }

    #[test]
    fn test_province_table_has_all_provinces() {
        let resolver = RegionResolver::new();
        assert_eq!(resolver.province_count(), 38);
        for p in PROVINCES {
            assert!(resolver.resolve(p.name, RegionMode::IndonesiaProvince).is_some());
        }
        assert!(resolver.resolve("PAPUA BARAT DAYA", RegionMode::IndonesiaProvince).is_some());
    }

    #[test]
    fn test_country_mode_does_not_strip_province_prefix() {
        let resolver = RegionResolver::new();
        assert_eq!(resolver.normalize(" provinsi bali", RegionMode::Country), "PROVINSI BALI");
    }
}
