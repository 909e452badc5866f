//! GeoJSON point feature collection.

use indexmap::IndexMap;
use serde::Serialize;

/// Property key that carries the designated popup text.
pub const POPUP_PROPERTY: &str = "_popup";

/// GeoJSON `Point`. Coordinates are stored in `[longitude, latitude]` order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Point")]
pub struct PointGeometry {
    coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            coordinates: [lon, lat],
        }
    }

    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn lon(&self) -> f64 {
        self.coordinates[0]
    }

    /// Raw `[lon, lat]` pair.
    pub fn coordinates(&self) -> [f64; 2] {
        self.coordinates
    }
}

/// A GeoJSON `Feature` with point geometry and string properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct PointFeature {
    pub geometry: PointGeometry,
    pub properties: IndexMap<String, String>,
}

impl PointFeature {
    /// The `_popup` property, if one was designated.
    pub fn popup(&self) -> Option<&str> {
        self.properties.get(POPUP_PROPERTY).map(|s| s.as_str())
    }
}

/// A GeoJSON `FeatureCollection` of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct PointFeatureCollection {
    pub features: Vec<PointFeature>,
}

impl PointFeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Serialize to a compact GeoJSON document.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
