//! Region x period value tables for shaded-map rendering.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tracing::{debug, info};

use super::builder::FeatureBuilder;
use super::report::SkipReport;
use crate::error::{MapforgeError, Result};
use crate::inference::{ColumnRoles, parse_numeric};
use crate::input::TabularDataset;
use crate::progress::RowProgress;
use crate::region::{BoundaryAsset, RegionMode};

/// Period label used when the dataset has no time column.
pub const IMPLICIT_PERIOD: &str = "all";

/// Choropleth payload: `data[region][period] = value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "choropleth")]
pub struct ChoroplethDataset {
    /// Period labels in display order (see [`sort_periods`]).
    pub years: Vec<String>,
    pub value_column: String,
    /// Header the region keys came from.
    pub country_column: String,
    pub data: IndexMap<String, IndexMap<String, f64>>,
    pub min_value: f64,
    pub max_value: f64,
    /// Shared boundary file to join region keys against, if not the world map.
    pub geojson_file: Option<String>,
}

impl ChoroplethDataset {
    pub fn region_count(&self) -> usize {
        self.data.len()
    }

    pub fn period_count(&self) -> usize {
        self.years.len()
    }

    pub fn value(&self, region: &str, period: &str) -> Option<f64> {
        self.data.get(region)?.get(period).copied()
    }

    /// Recompute `min_value`/`max_value` from `data`.
    pub fn recompute_bounds(&mut self) {
        let (min, max) = self
            .data
            .values()
            .flat_map(|periods| periods.values().copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        self.min_value = min;
        self.max_value = max;
    }

    /// Serialize to a compact JSON document.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// A built choropleth layer.
#[derive(Debug, Clone)]
pub struct ChoroplethLayer {
    pub dataset: ChoroplethDataset,
    /// Boundary asset that must accompany the dataset when published.
    pub boundary: Option<BoundaryAsset>,
    pub report: SkipReport,
}

impl FeatureBuilder {
    /// Build the nested region -> period -> value table.
    pub fn build_choropleth(&self, dataset: &TabularDataset, roles: &ColumnRoles) -> Result<ChoroplethLayer> {
        self.build_choropleth_with_progress(dataset, roles, &RowProgress::silent())
    }

    /// [`build_choropleth`](Self::build_choropleth) with per-N-rows progress updates.
    pub fn build_choropleth_with_progress(
        &self,
        dataset: &TabularDataset,
        roles: &ColumnRoles,
        progress: &RowProgress<'_>,
    ) -> Result<ChoroplethLayer> {
        if dataset.is_empty() {
            return Err(MapforgeError::EmptyResult("dataset has no rows".to_string()));
        }

        let region_col = require(dataset, &roles.region_column)?;
        let value_col = require(dataset, &roles.value_column)?;
        let time_col = roles
            .time_column
            .as_deref()
            .map(|name| require(dataset, name))
            .transpose()?;
        debug!(roles = ?roles, rows = dataset.row_count(), "building choropleth");

        let total = dataset.row_count();
        let mut report = SkipReport::with_total(total);
        let mut data: IndexMap<String, IndexMap<String, f64>> = IndexMap::new();
        let mut periods: IndexSet<String> = IndexSet::new();

        for (idx, row) in dataset.rows.iter().enumerate() {
            progress.tick(idx + 1, total);

            let cell = |col: usize| row.get(col).map_or("", String::as_str);

            let region = self.resolver.normalize(cell(region_col), roles.region_mode);
            if region.is_empty() {
                report.empty_region_rows += 1;
                continue;
            }

            let Some(value) = parse_numeric(cell(value_col)) else {
                report.unparsable_rows += 1;
                continue;
            };

            let period = match time_col {
                Some(col) => period_label(cell(col)),
                None => IMPLICIT_PERIOD.to_string(),
            };

            periods.insert(period.clone());
            data.entry(region).or_default().insert(period, value);
            report.rows_accepted += 1;
        }

        report.log(&roles.value_column);

        if data.is_empty() {
            return Err(MapforgeError::EmptyResult(format!(
                "no rows with a region and numeric '{}' out of {total}",
                roles.value_column
            )));
        }

        let boundary = match roles.region_mode {
            RegionMode::IndonesiaProvince => Some(BoundaryAsset::IndonesiaProvinces),
            RegionMode::Country => None,
        };

        let years = sort_periods(periods.into_iter().collect());
        info!(regions = data.len(), periods = years.len(), "choropleth built");

        // A repeated (region, period) keeps its last value; bounds cover stored cells only.
        let mut output = ChoroplethDataset {
            years,
            value_column: roles.value_column.clone(),
            country_column: roles.region_column.clone(),
            data,
            min_value: f64::INFINITY,
            max_value: f64::NEG_INFINITY,
            geojson_file: boundary.map(|b| b.file_name().to_string()),
        };
        output.recompute_bounds();

        Ok(ChoroplethLayer {
            dataset: output,
            boundary,
            report,
        })
    }
}

/// Reduce a raw time cell to its period label.
///
/// Date-like values keep only the part before the first `-`
/// (`"2021-06-30"` becomes `"2021"`).
pub fn period_label(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.split_once('-') {
        Some((year, _)) => year.trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Order period labels for display.
///
/// All-digit labels sort ascending by integer value. Any other label sorts as
/// if it were 0, so it lands before the numeric ones; the sort is stable, so
/// non-numeric labels keep their first-seen order. Mixing the two kinds in one
/// dataset gives an ordering with no real meaning.
pub fn sort_periods(mut periods: Vec<String>) -> Vec<String> {
    periods.sort_by_key(|label| period_sort_key(label));
    periods
}

fn period_sort_key(label: &str) -> u128 {
    if !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()) {
        label.parse().unwrap_or(u128::MAX)
    } else {
        0
    }
}

fn require(dataset: &TabularDataset, name: &str) -> Result<usize> {
    dataset
        .column_index(name)
        .ok_or_else(|| MapforgeError::ColumnNotFound {
            column: name.to_string(),
            headers: dataset.headers.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> TabularDataset {
        TabularDataset::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    fn roles(region: &str, mode: RegionMode, time: Option<&str>, value: &str) -> ColumnRoles {
        ColumnRoles {
            region_column: region.to_string(),
            region_mode: mode,
            time_column: time.map(String::from),
            value_column: value.to_string(),
        }
    }

    #[test]
    fn test_sort_periods() {
        let sorted = sort_periods(vec!["2021".into(), "2019".into(), "2020".into()]);
        assert_eq!(sorted, vec!["2019", "2020", "2021"]);

        let mixed = sort_periods(vec!["2021".into(), "Q1".into()]);
        assert_eq!(mixed, vec!["Q1", "2021"]);

        let numeric = sort_periods(vec!["10".into(), "9".into()]);
        assert_eq!(numeric, vec!["9", "10"]);
    }

    #[test]
    fn test_period_label() {
        assert_eq!(period_label("2021-06-30"), "2021");
        assert_eq!(period_label(" 2019 "), "2019");
        assert_eq!(period_label("2020-Q3"), "2020");
    }

    #[test]
    fn test_single_cell_round_trip() {
        let data = table(&["country", "year", "value"], &[&["id", "2020", "1,500.5"]]);
        let layer = FeatureBuilder::new()
            .build_choropleth(&data, &roles("country", RegionMode::Country, Some("year"), "value"))
            .unwrap();

        let ds = &layer.dataset;
        assert_eq!(ds.data.len(), 1);
        assert_eq!(ds.value("ID", "2020"), Some(1500.5));
        assert_eq!(ds.min_value, 1500.5);
        assert_eq!(ds.max_value, 1500.5);
        assert_eq!(ds.years, vec!["2020"]);
        assert_eq!(ds.geojson_file, None);
        assert!(layer.report.is_clean());
    }

    #[test]
    fn test_implicit_period_and_skips() {
        let data = table(
            &["country", "value"],
            &[&["FR", "3"], &["DE", ""], &["", "5"], &["IT", "n/a"], &["ES", "-2"]],
        );
        let layer = FeatureBuilder::new()
            .build_choropleth(&data, &roles("country", RegionMode::Country, None, "value"))
            .unwrap();

        let ds = &layer.dataset;
        assert_eq!(ds.years, vec![IMPLICIT_PERIOD]);
        assert_eq!(ds.region_count(), 2);
        assert_eq!(ds.min_value, -2.0);
        assert_eq!(ds.max_value, 3.0);
        assert_eq!(layer.report.unparsable_rows, 2);
        assert_eq!(layer.report.empty_region_rows, 1);
    }

    #[test]
    fn test_repeated_cell_keeps_last_value() {
        let data = table(
            &["country", "year", "value"],
            &[&["FR", "2020", "100"], &["FR", "2020", "4"], &["DE", "2020", "7"]],
        );
        let layer = FeatureBuilder::new()
            .build_choropleth(&data, &roles("country", RegionMode::Country, Some("year"), "value"))
            .unwrap();

        let ds = &layer.dataset;
        assert_eq!(ds.value("FR", "2020"), Some(4.0));
        assert_eq!((ds.min_value, ds.max_value), (4.0, 7.0));
    }

    #[test]
    fn test_yogyakarta_spellings_share_one_region() {
        let data = table(
            &["provinsi", "tahun", "nilai"],
            &[
                &["DIY", "2020", "1"],
                &["DI Yogyakarta", "2021", "2"],
                &["Daerah Istimewa Yogyakarta", "2022", "3"],
            ],
        );
        let layer = FeatureBuilder::new()
            .build_choropleth(
                &data,
                &roles("provinsi", RegionMode::IndonesiaProvince, Some("tahun"), "nilai"),
            )
            .unwrap();

        let ds = &layer.dataset;
        assert_eq!(
            ds.data.keys().collect::<Vec<_>>(),
            vec!["DAERAH ISTIMEWA YOGYAKARTA"]
        );
        assert_eq!(ds.data["DAERAH ISTIMEWA YOGYAKARTA"].len(), 3);
        assert_eq!(ds.value("DAERAH ISTIMEWA YOGYAKARTA", "2021"), Some(2.0));
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let mut data = table(
            &["country", "year", "value"],
            &[&["IDN", "2020", "1.5"]],
        );
        data.rows.push(vec!["MYS".to_string(), "2020".to_string()]);
        data.rows.push(Vec::new());
        let layer = FeatureBuilder::new()
            .build_choropleth(&data, &roles("country", RegionMode::Country, Some("year"), "value"))
            .unwrap();

        assert_eq!(layer.dataset.data.len(), 1);
        assert_eq!(layer.report.unparsable_rows, 1);
        assert_eq!(layer.report.empty_region_rows, 1);
    }

    #[test]
    fn test_province_mode_attaches_boundary() {
        let data = table(
            &["provinsi", "tahun", "nilai"],
            &[
                &["PROVINSI ACEH", "2021-01-01", "4"],
                &["DIY", "2020", "7"],
                &["Aceh", "2020", "2"],
            ],
        );
        let layer = FeatureBuilder::new()
            .build_choropleth(
                &data,
                &roles("provinsi", RegionMode::IndonesiaProvince, Some("tahun"), "nilai"),
            )
            .unwrap();

        let ds = &layer.dataset;
        assert_eq!(layer.boundary, Some(BoundaryAsset::IndonesiaProvinces));
        assert_eq!(ds.geojson_file.as_deref(), Some("indonesia-provinces.geojson"));
        assert_eq!(ds.years, vec!["2020", "2021"]);
        assert_eq!(ds.value("ACEH", "2021"), Some(4.0));
        assert_eq!(ds.value("ACEH", "2020"), Some(2.0));
        assert_eq!(ds.value("DAERAH ISTIMEWA YOGYAKARTA", "2020"), Some(7.0));
    }

    #[test]
    fn test_empty_dataset_is_empty_result() {
        let data = table(&["country", "value"], &[]);
        let err = FeatureBuilder::new()
            .build_choropleth(&data, &roles("country", RegionMode::Country, None, "value"))
            .unwrap_err();
        assert!(matches!(err, MapforgeError::EmptyResult(_)));
    }

    #[test]
    fn test_json_shape() {
        let data = table(&["country", "value"], &[&["US", "1"]]);
        let layer = FeatureBuilder::new()
            .build_choropleth(&data, &roles("country", RegionMode::Country, None, "value"))
            .unwrap();
        let json = serde_json::to_value(&layer.dataset).unwrap();

        assert_eq!(json["type"], "choropleth");
        assert_eq!(json["country_column"], "country");
        assert_eq!(json["data"]["US"]["all"], 1.0);
        assert!(json["geojson_file"].is_null());
    }

    #[test]
    fn test_recompute_bounds() {
        let data = table(&["country", "value"], &[&["US", "1"], &["FR", "9"]]);
        let mut ds = FeatureBuilder::new()
            .build_choropleth(&data, &roles("country", RegionMode::Country, None, "value"))
            .unwrap()
            .dataset;
        ds.data.shift_remove("FR");
        ds.recompute_bounds();
        assert_eq!((ds.min_value, ds.max_value), (1.0, 1.0));
    }
}
