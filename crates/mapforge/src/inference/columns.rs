//! Region/time/value role assignment for tabular headers.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::candidates::{CandidateSet, first_match};
use crate::error::{MapforgeError, Result};
use crate::region::RegionMode;

/// Substrings in a sample value that point at an Indonesian place name.
static INDONESIA_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)indonesia|jawa|sumatera").expect("valid hint pattern"));

/// Resolved assignment of semantic roles to header names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoles {
    /// Header holding region identity.
    pub region_column: String,
    /// Table the region tokens resolve against.
    pub region_mode: RegionMode,
    /// Header holding the period, if any. Absent means one implicit "all" period.
    pub time_column: Option<String>,
    /// Header holding the numeric value.
    pub value_column: String,
}

/// Parse a numeric cell, ignoring thousands separators.
///
/// Returns `None` for empty, unparsable or non-finite input.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Infers column roles from headers and a sample row.
#[derive(Debug, Clone, Default)]
pub struct ColumnInference {
    candidates: CandidateSet,
}

impl ColumnInference {
    /// Create an inference engine with the built-in candidate lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inference engine with custom candidate lists.
    pub fn with_candidates(candidates: CandidateSet) -> Self {
        Self { candidates }
    }

    /// The candidate lists in use.
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Assign region, time and value roles.
    ///
    /// An explicit value column must exist in `headers`; otherwise the value
    /// column comes from the candidate list, then from the first remaining
    /// header whose sample parses as a number.
    pub fn infer(
        &self,
        headers: &[String],
        sample_row: &IndexMap<&str, &str>,
        explicit_value_column: Option<&str>,
    ) -> Result<ColumnRoles> {
        let (region_column, region_mode) = self
            .region_column(headers, sample_row)
            .ok_or_else(|| MapforgeError::NoRegionColumn {
                headers: headers.to_vec(),
            })?;

        let time_column = self.time_column(headers);

        let value_column = match explicit_value_column {
            Some(name) if headers.iter().any(|h| h == name) => name.to_string(),
            Some(name) => {
                return Err(MapforgeError::ColumnNotFound {
                    column: name.to_string(),
                    headers: headers.to_vec(),
                });
            }
            None => self
                .value_column(headers, sample_row, &region_column, time_column.as_deref())
                .ok_or_else(|| MapforgeError::NoValueColumn {
                    headers: headers.to_vec(),
                })?,
        };

        debug!(
            region = %region_column,
            mode = ?region_mode,
            time = time_column.as_deref().unwrap_or("all"),
            value = %value_column,
            "inferred column roles"
        );

        Ok(ColumnRoles {
            region_column,
            region_mode,
            time_column,
            value_column,
        })
    }

    /// Find the region column and the table it resolves against.
    ///
    /// Province headers win over country headers. Failing both, the first
    /// column whose sample value mentions an Indonesian place is promoted to
    /// province mode.
    pub fn region_column(
        &self,
        headers: &[String],
        sample_row: &IndexMap<&str, &str>,
    ) -> Option<(String, RegionMode)> {
        self.region_column_from(&self.candidates.province, headers, sample_row)
    }

    /// [`region_column`](Self::region_column) for point layers, which use the
    /// narrower `point_province` header list.
    pub fn point_region_column(
        &self,
        headers: &[String],
        sample_row: &IndexMap<&str, &str>,
    ) -> Option<(String, RegionMode)> {
        self.region_column_from(&self.candidates.point_province, headers, sample_row)
    }

    fn region_column_from(
        &self,
        province: &[String],
        headers: &[String],
        sample_row: &IndexMap<&str, &str>,
    ) -> Option<(String, RegionMode)> {
        if let Some(column) = first_match(headers, province) {
            return Some((column, RegionMode::IndonesiaProvince));
        }
        if let Some(column) = first_match(headers, &self.candidates.country) {
            return Some((column, RegionMode::Country));
        }

        headers
            .iter()
            .find(|h| {
                sample_row
                    .get(h.as_str())
                    .is_some_and(|v| INDONESIA_HINT.is_match(v))
            })
            .map(|h| (h.clone(), RegionMode::IndonesiaProvince))
    }

    /// Find the period column, if any.
    pub fn time_column(&self, headers: &[String]) -> Option<String> {
        first_match(headers, &self.candidates.time)
    }

    fn value_column(
        &self,
        headers: &[String],
        sample_row: &IndexMap<&str, &str>,
        region_column: &str,
        time_column: Option<&str>,
    ) -> Option<String> {
        if let Some(column) = first_match(headers, &self.candidates.value) {
            return Some(column);
        }

        headers
            .iter()
            .filter(|h| h.as_str() != region_column && Some(h.as_str()) != time_column)
            .find(|h| {
                sample_row
                    .get(h.as_str())
                    .and_then(|v| parse_numeric(v))
                    .is_some()
            })
            .cloned()
    }

    /// Resolve latitude/longitude columns.
    ///
    /// Explicit names must exist. A missing side is auto-detected from the
    /// candidate lists. Returns `None` unless both sides resolve.
    pub fn coordinate_columns(
        &self,
        headers: &[String],
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Option<(String, String)>> {
        let pick = |explicit: Option<&str>, candidates: &[String]| -> Result<Option<String>> {
            match explicit {
                Some(name) if headers.iter().any(|h| h == name) => Ok(Some(name.to_string())),
                Some(name) => Err(MapforgeError::ColumnNotFound {
                    column: name.to_string(),
                    headers: headers.to_vec(),
                }),
                None => Ok(first_match(headers, candidates)),
            }
        };

        let lat = pick(latitude, &self.candidates.latitude)?;
        let lon = pick(longitude, &self.candidates.longitude)?;

        Ok(lat.zip(lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample<'a>(pairs: &[(&'a str, &'a str)]) -> IndexMap<&'a str, &'a str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_point_region_column_ignores_generic_region_header() {
        let engine = ColumnInference::new();
        let h = headers(&["country", "region", "value"]);
        let row = sample(&[("country", "IDN"), ("region", "Asia"), ("value", "1")]);

        assert_eq!(
            engine.region_column(&h, &row),
            Some(("region".to_string(), RegionMode::IndonesiaProvince))
        );
        assert_eq!(
            engine.point_region_column(&h, &row),
            Some(("country".to_string(), RegionMode::Country))
        );
    }

    #[test]
    fn test_province_priority() {
        let engine = ColumnInference::new();
        let h = headers(&["country", "provinsi", "tahun", "value"]);
        let roles = engine.infer(&h, &IndexMap::new(), None).unwrap();

        assert_eq!(roles.region_column, "provinsi");
        assert_eq!(roles.region_mode, RegionMode::IndonesiaProvince);
        assert_eq!(roles.time_column.as_deref(), Some("tahun"));
        assert_eq!(roles.value_column, "value");
    }

    #[test]
    fn test_country_and_sdmx_headers() {
        let engine = ColumnInference::new();
        let h = headers(&["REF_AREA", "TIME_PERIOD", "OBS_VALUE"]);
        let roles = engine.infer(&h, &IndexMap::new(), None).unwrap();

        assert_eq!(roles.region_column, "REF_AREA");
        assert_eq!(roles.region_mode, RegionMode::Country);
        assert_eq!(roles.time_column.as_deref(), Some("TIME_PERIOD"));
        assert_eq!(roles.value_column, "OBS_VALUE");
    }

    #[test]
    fn test_region_from_sample_values() {
        let engine = ColumnInference::new();
        let h = headers(&["nama", "jumlah"]);
        let s = sample(&[("nama", "Jawa Barat"), ("jumlah", "1,200")]);
        let roles = engine.infer(&h, &s, None).unwrap();

        assert_eq!(roles.region_column, "nama");
        assert_eq!(roles.region_mode, RegionMode::IndonesiaProvince);
        assert_eq!(roles.time_column, None);
        assert_eq!(roles.value_column, "jumlah");
    }

    #[test]
    fn test_numeric_fallback_skips_region_and_time() {
        let engine = ColumnInference::new();
        let h = headers(&["iso3", "year", "label", "gini"]);
        let s = sample(&[("iso3", "IDN"), ("year", "2020"), ("label", "n/a"), ("gini", "38.2")]);
        let roles = engine.infer(&h, &s, None).unwrap();

        assert_eq!(roles.value_column, "gini");
    }

    #[test]
    fn test_explicit_value_column() {
        let engine = ColumnInference::new();
        let h = headers(&["country", "value", "population"]);
        let roles = engine.infer(&h, &IndexMap::new(), Some("population")).unwrap();
        assert_eq!(roles.value_column, "population");

        let err = engine.infer(&h, &IndexMap::new(), Some("gdp")).unwrap_err();
        match err {
            MapforgeError::ColumnNotFound { column, headers } => {
                assert_eq!(column, "gdp");
                assert_eq!(headers.len(), 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_region_and_value() {
        let engine = ColumnInference::new();
        let h = headers(&["name", "note"]);
        let s = sample(&[("name", "Paris"), ("note", "capital")]);
        assert!(matches!(
            engine.infer(&h, &s, None),
            Err(MapforgeError::NoRegionColumn { .. })
        ));

        let h = headers(&["country", "note"]);
        let s = sample(&[("country", "FR"), ("note", "capital")]);
        assert!(matches!(
            engine.infer(&h, &s, None),
            Err(MapforgeError::NoValueColumn { .. })
        ));
    }

    #[test]
    fn test_coordinate_columns() {
        let engine = ColumnInference::new();
        let h = headers(&["name", "Latitude", "lng"]);
        assert_eq!(
            engine.coordinate_columns(&h, None, None).unwrap(),
            Some(("Latitude".to_string(), "lng".to_string()))
        );
        assert_eq!(engine.coordinate_columns(&headers(&["lat"]), None, None).unwrap(), None);
        assert!(engine.coordinate_columns(&h, Some("lat_deg"), None).is_err());
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("1,234.5"), Some(1234.5));
        assert_eq!(parse_numeric(" 42 "), Some(42.0));
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("NaN"), None);
    }
}
