//! Header candidate lists used for column inference.

use serde::{Deserialize, Serialize};

const PROVINCE: &[&str] = &[
    "provinsi", "PROVINSI", "Propinsi", "province", "Province", "daerah", "DAERAH", "wilayah",
    "WILAYAH", "location", "region",
];

/// Point layers skip the generic `location`/`region` headers, which often
/// hold continents or free text rather than province names.
const POINT_PROVINCE: &[&str] = &[
    "provinsi", "PROVINSI", "province", "Province", "daerah", "DAERAH", "wilayah", "WILAYAH",
];

const COUNTRY: &[&str] = &[
    "REF_AREA", "REF_AREA_ISO2", "REF_AREA_ISO3", "Code", "code", "ISO2", "ISO3", "ISO_A2",
    "ISO_A3", "country_code", "CountryCode", "COUNTRY", "Country", "country", "iso_code",
    "ISO_CODE", "iso2", "iso3",
];

const TIME: &[&str] = &[
    "Year", "year", "YEAR", "TIME_PERIOD", "Date", "date", "TIME", "TIMEE", "Timee", "timee",
    "TAHUN", "Tahun", "tahun",
];

const VALUE: &[&str] = &[
    "Value",
    "value",
    "VALUE",
    "OBS_VALUE",
    "GDP",
    "gdp",
    "GDP per capita, PPP (constant 2021 international $)",
    "Amount",
    "amount",
    "Count",
    "count",
    "Total",
    "total",
];

const LATITUDE: &[&str] = &["latitude", "lat", "y", "LAT", "Latitude", "LATITUDE"];

const LONGITUDE: &[&str] = &[
    "longitude", "lon", "lng", "x", "long", "LON", "Longitude", "LONGITUDE",
];

/// Header names recognised for each column role.
///
/// Matching is exact and case-sensitive; the lists carry the casings seen in
/// real exports (BPS, OECD SDMX, World Bank).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateSet {
    pub province: Vec<String>,
    pub point_province: Vec<String>,
    pub country: Vec<String>,
    pub time: Vec<String>,
    pub value: Vec<String>,
    pub latitude: Vec<String>,
    pub longitude: Vec<String>,
}

impl Default for CandidateSet {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            province: owned(PROVINCE),
            point_province: owned(POINT_PROVINCE),
            country: owned(COUNTRY),
            time: owned(TIME),
            value: owned(VALUE),
            latitude: owned(LATITUDE),
            longitude: owned(LONGITUDE),
        }
    }
}

/// First header, in header order, that appears in `candidates`.
pub(crate) fn first_match(headers: &[String], candidates: &[String]) -> Option<String> {
    headers
        .iter()
        .find(|h| candidates.iter().any(|c| c == *h))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_follows_header_order() {
        let candidates = CandidateSet::default();
        let headers = vec!["country".to_string(), "REF_AREA".to_string()];
        assert_eq!(first_match(&headers, &candidates.country), Some("country".to_string()));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let candidates = CandidateSet::default();
        let headers = vec!["VaLuE".to_string()];
        assert_eq!(first_match(&headers, &candidates.value), None);
    }

    #[test]
    fn test_point_province_list_excludes_generic_headers() {
        let candidates = CandidateSet::default();
        let headers = vec!["region".to_string(), "location".to_string()];
        assert_eq!(first_match(&headers, &candidates.province), Some("region".to_string()));
        assert_eq!(first_match(&headers, &candidates.point_province), None);
    }
}
