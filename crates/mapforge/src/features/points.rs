//! Point-feature layers from coordinate columns or geocoded regions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::builder::FeatureBuilder;
use super::geojson::{POPUP_PROPERTY, PointFeature, PointFeatureCollection, PointGeometry};
use super::report::SkipReport;
use crate::error::{MapforgeError, Result};
use crate::input::TabularDataset;
use crate::progress::RowProgress;
use crate::region::RegionMode;

/// Caller choices for a point layer. Unset coordinate columns are auto-detected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOptions {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    /// Column duplicated into the `_popup` property.
    pub popup: Option<String>,
}

impl PointOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coordinates(mut self, latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        self.latitude = Some(latitude.into());
        self.longitude = Some(longitude.into());
        self
    }

    pub fn with_popup(mut self, column: impl Into<String>) -> Self {
        self.popup = Some(column.into());
        self
    }
}

/// Where point geometry came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometrySource {
    /// Parsed from latitude/longitude columns.
    Coordinates { latitude: String, longitude: String },
    /// Geocoded through the region resolver.
    Region { column: String, mode: RegionMode },
}

impl GeometrySource {
    /// Short label for status messages.
    pub fn describe(&self) -> &'static str {
        match self {
            GeometrySource::Coordinates { .. } => "coordinates",
            GeometrySource::Region {
                mode: RegionMode::Country,
                ..
            } => "country geocoding",
            GeometrySource::Region {
                mode: RegionMode::IndonesiaProvince,
                ..
            } => "province geocoding",
        }
    }
}

/// A built point layer.
#[derive(Debug, Clone)]
pub struct PointLayer {
    pub collection: PointFeatureCollection,
    pub source: GeometrySource,
    pub report: SkipReport,
}

#[derive(Clone, Copy)]
enum Locator {
    Coordinates { lat: usize, lon: usize },
    Region { col: usize, mode: RegionMode },
}

impl FeatureBuilder {
    /// Build a point feature collection, one feature per placeable row.
    pub fn build_points(&self, dataset: &TabularDataset, options: &PointOptions) -> Result<PointLayer> {
        self.build_points_with_progress(dataset, options, &RowProgress::silent())
    }

    /// [`build_points`](Self::build_points) with per-N-rows progress updates.
    pub fn build_points_with_progress(
        &self,
        dataset: &TabularDataset,
        options: &PointOptions,
        progress: &RowProgress<'_>,
    ) -> Result<PointLayer> {
        if dataset.is_empty() {
            return Err(MapforgeError::EmptyResult("dataset has no rows".to_string()));
        }

        let source = self.geometry_source(dataset, options)?;
        let locator = match &source {
            GeometrySource::Coordinates { latitude, longitude } => Locator::Coordinates {
                lat: column_index(dataset, latitude)?,
                lon: column_index(dataset, longitude)?,
            },
            GeometrySource::Region { column, mode } => Locator::Region {
                col: column_index(dataset, column)?,
                mode: *mode,
            },
        };
        debug!(source = ?source, rows = dataset.row_count(), "building point layer");

        let popup = options
            .popup
            .as_deref()
            .map(|c| column_index(dataset, c))
            .transpose()?;
        let total = dataset.row_count();
        let mut report = SkipReport::with_total(total);
        let mut features = Vec::new();

        for (idx, row) in dataset.rows.iter().enumerate() {
            progress.tick(idx + 1, total);

            let geometry = match locator {
                Locator::Coordinates { lat: lat_col, lon: lon_col } => {
                    let lat = row.get(lat_col).and_then(|c| parse_coordinate(c));
                    let lon = row.get(lon_col).and_then(|c| parse_coordinate(c));
                    match (lat, lon) {
                        (Some(lat), Some(lon)) if lat == 0.0 && lon == 0.0 => {
                            report.zero_coordinate_rows += 1;
                            continue;
                        }
                        (Some(lat), Some(lon)) => PointGeometry::new(lat, lon),
                        _ => {
                            report.unparsable_rows += 1;
                            continue;
                        }
                    }
                }
                Locator::Region { col, mode } => {
                    let token = row.get(col).map_or("", |c| c.trim());
                    if token.is_empty() {
                        report.empty_region_rows += 1;
                        continue;
                    }
                    match self.resolver.resolve(token, mode) {
                        Some(anchor) => PointGeometry::new(anchor.centroid.lat, anchor.centroid.lon),
                        None => {
                            report.unresolved(&self.resolver.normalize(token, mode));
                            continue;
                        }
                    }
                }
            };

            let mut properties: IndexMap<String, String> = dataset
                .headers
                .iter()
                .zip(row)
                .enumerate()
                .filter(|(col, _)| match locator {
                    Locator::Coordinates { lat, lon } => *col != lat && *col != lon,
                    Locator::Region { .. } => true,
                })
                .map(|(_, (header, value))| (header.clone(), value.clone()))
                .collect();

            if let Some(col) = popup {
                let label = row.get(col).cloned().unwrap_or_default();
                properties.insert(POPUP_PROPERTY.to_string(), label);
            }

            features.push(PointFeature {
                geometry,
                properties,
            });
        }

        report.rows_accepted = features.len();
        report.log(source.describe());

        if features.is_empty() {
            return Err(MapforgeError::EmptyResult(format!(
                "no placeable rows out of {total} ({})",
                source.describe()
            )));
        }

        info!(points = features.len(), source = source.describe(), "point layer built");

        Ok(PointLayer {
            collection: PointFeatureCollection { features },
            source,
            report,
        })
    }

    /// Decide between coordinate columns and region geocoding.
    ///
    /// Region geocoding only considers province headers that name provinces
    /// outright, so a generic `region` column does not shadow a country one.
    pub fn geometry_source(
        &self,
        dataset: &TabularDataset,
        options: &PointOptions,
    ) -> Result<GeometrySource> {
        let headers = &dataset.headers;

        if let Some((latitude, longitude)) = self.inference.coordinate_columns(
            headers,
            options.latitude.as_deref(),
            options.longitude.as_deref(),
        )? {
            return Ok(GeometrySource::Coordinates { latitude, longitude });
        }

        self.inference
            .point_region_column(headers, &dataset.sample_row())
            .map(|(column, mode)| GeometrySource::Region { column, mode })
            .ok_or_else(|| MapforgeError::NoGeometryColumns {
                headers: headers.clone(),
            })
    }
}

fn column_index(dataset: &TabularDataset, name: &str) -> Result<usize> {
    dataset
        .column_index(name)
        .ok_or_else(|| MapforgeError::ColumnNotFound {
            column: name.to_string(),
            headers: dataset.headers.clone(),
        })
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
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

    #[test]
    fn test_coordinate_rows_and_sentinel_zero() {
        let data = table(
            &["name", "lat", "lon"],
            &[
                &["Jakarta", "-6.2", "106.8"],
                &["Null Island", "0", "0.0"],
                &["Broken", "abc", "10"],
                &["Equator", "0", "32.5"],
            ],
        );
        let layer = FeatureBuilder::new().build_points(&data, &PointOptions::new()).unwrap();

        assert_eq!(layer.collection.len(), 2);
        assert_eq!(layer.report.zero_coordinate_rows, 1);
        assert_eq!(layer.report.unparsable_rows, 1);

        let first = &layer.collection.features[0];
        assert_eq!(first.geometry.coordinates(), [106.8, -6.2]);
        assert_eq!(first.properties.keys().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn test_country_geocoding_with_popup() {
        let data = table(
            &["REF_AREA", "OBS_VALUE"],
            &[&["IDN", "5.0"], &["ZZZ", "1"], &["my", "4.2"], &["", "3"]],
        );
        let options = PointOptions::new().with_popup("OBS_VALUE");
        let layer = FeatureBuilder::new().build_points(&data, &options).unwrap();

        assert_eq!(
            layer.source,
            GeometrySource::Region {
                column: "REF_AREA".to_string(),
                mode: RegionMode::Country
            }
        );
        assert_eq!(layer.collection.len(), 2);
        assert_eq!(layer.collection.features[0].popup(), Some("5.0"));
        assert_eq!(layer.collection.features[0].properties["REF_AREA"], "IDN");
        assert!(layer.report.unresolved_regions.contains("ZZZ"));
        assert_eq!(layer.report.empty_region_rows, 1);
    }

    #[test]
    fn test_province_geocoding() {
        let data = table(
            &["provinsi", "jumlah"],
            &[&["Provinsi Bali", "10"], &["DIY", "3"], &["Atlantis", "1"]],
        );
        let layer = FeatureBuilder::new().build_points(&data, &PointOptions::new()).unwrap();

        assert_eq!(layer.collection.len(), 2);
        assert_eq!(layer.collection.features[0].geometry.lat(), -8.409518);
        assert!(layer.report.unresolved_regions.contains("ATLANTIS"));
    }

    #[test]
    fn test_generic_region_header_falls_through_to_country() {
        let data = table(
            &["country", "region", "value"],
            &[&["IDN", "Asia", "1"], &["FRA", "Europe", "2"]],
        );
        let layer = FeatureBuilder::new().build_points(&data, &PointOptions::new()).unwrap();

        assert_eq!(
            layer.source,
            GeometrySource::Region {
                column: "country".to_string(),
                mode: RegionMode::Country
            }
        );
        assert_eq!(layer.collection.len(), 2);
        assert_eq!(layer.collection.features[1].properties["region"], "Europe");
        assert!(layer.report.unresolved_regions.is_empty());
    }

    #[test]
    fn test_yogyakarta_spellings_geocode_to_one_anchor() {
        let data = table(
            &["provinsi"],
            &[&["DIY"], &["DI Yogyakarta"], &["Daerah Istimewa Yogyakarta"]],
        );
        let layer = FeatureBuilder::new().build_points(&data, &PointOptions::new()).unwrap();

        assert_eq!(layer.collection.len(), 3);
        for feature in &layer.collection.features {
            assert_eq!(feature.geometry.lat(), -7.875385);
        }
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let mut coords = table(&["name", "lat", "lon"], &[&["Jakarta", "-6.2", "106.8"]]);
        coords.rows.push(vec!["Truncated".to_string(), "-7.0".to_string()]);
        let layer = FeatureBuilder::new()
            .build_points(&coords, &PointOptions::new().with_popup("lon"))
            .unwrap();
        assert_eq!(layer.collection.len(), 1);
        assert_eq!(layer.report.unparsable_rows, 1);

        let mut regions = table(&["label", "REF_AREA"], &[&["home", "IDN"]]);
        regions.rows.push(vec!["lost".to_string()]);
        let layer = FeatureBuilder::new()
            .build_points(&regions, &PointOptions::new())
            .unwrap();
        assert_eq!(layer.collection.len(), 1);
        assert_eq!(layer.report.empty_region_rows, 1);
    }

    #[test]
    fn test_all_rows_skipped_is_empty_result() {
        let data = table(&["lat", "lon"], &[&["0", "0"], &["x", "y"]]);
        let err = FeatureBuilder::new()
            .build_points(&data, &PointOptions::new())
            .unwrap_err();
        assert!(matches!(err, MapforgeError::EmptyResult(_)));
    }

    #[test]
    fn test_unknown_popup_column_is_rejected() {
        let data = table(&["lat", "lon"], &[&["1", "2"]]);
        let err = FeatureBuilder::new()
            .build_points(&data, &PointOptions::new().with_popup("label"))
            .unwrap_err();
        assert!(matches!(err, MapforgeError::ColumnNotFound { column, .. } if column == "label"));
    }

    #[test]
    fn test_empty_dataset_is_empty_result() {
        let data = table(&["lat", "lon"], &[]);
        let err = FeatureBuilder::new()
            .build_points(&data, &PointOptions::new())
            .unwrap_err();
        assert!(matches!(err, MapforgeError::EmptyResult(_)));
    }

    #[test]
    fn test_no_geometry_columns() {
        let data = table(&["name", "score"], &[&["a", "1"]]);
        let err = FeatureBuilder::new()
            .build_points(&data, &PointOptions::new())
            .unwrap_err();
        assert!(matches!(err, MapforgeError::NoGeometryColumns { .. }));
    }
}
