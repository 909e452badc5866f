//! Output storage and layer catalog.
//!
//! The core hands finished layers to a [`LayerStore`] (object storage in a
//! deployment) and registers them in a [`LayerCatalog`] (a metadata
//! database). [`DirectoryStore`] implements both on a local directory:
//!
//! ```text
//! out/
//! ├── catalog.json
//! ├── rainfall_2023/
//! │   └── data.geojson
//! └── gdp/
//!     ├── choropleth.json
//!     └── indonesia-provinces.geojson
//! ```

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::error::{MapforgeError, Result};
use crate::region::BoundaryAsset;

pub const GEOJSON_CONTENT_TYPE: &str = "application/geo+json";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// File name of the point-layer document under a layer folder.
pub const POINTS_FILE: &str = "data.geojson";
/// File name of the choropleth document under a layer folder.
pub const CHOROPLETH_FILE: &str = "choropleth.json";
/// Catalog file at the root of a [`DirectoryStore`].
pub const CATALOG_FILE: &str = "catalog.json";

/// Persists layer payloads under string keys.
pub trait LayerStore: Send + Sync {
    fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()>;

    /// Copy a shared boundary asset to `key`. `Ok(false)` when the asset is
    /// not available.
    fn copy_asset(&self, asset: BoundaryAsset, key: &str) -> Result<bool>;
}

/// Registers published layers.
pub trait LayerCatalog: Send + Sync {
    /// Insert a record and return its id.
    fn insert_layer(&self, record: LayerRecord) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Tiles,
    Geojson,
    Choropleth,
}

/// Catalog metadata for one published layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerRecord {
    pub name: String,
    /// Storage prefix the layer's files live under.
    pub folder: String,
    pub description: String,
    pub source_link: Option<String>,
    pub layer_type: LayerType,
    pub created_at: DateTime<Utc>,
}

impl LayerRecord {
    pub fn new(name: impl Into<String>, folder: impl Into<String>, layer_type: LayerType) -> Self {
        Self {
            name: name.into(),
            folder: folder.into(),
            description: String::new(),
            source_link: None,
            layer_type,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_source_link(mut self, link: Option<String>) -> Self {
        self.source_link = link;
        self
    }
}

/// A catalog row: the record plus its assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(flatten)]
    pub record: LayerRecord,
}

/// Restrict a layer name to `[A-Za-z0-9_-]`, replacing anything else with `_`.
pub fn sanitize_layer_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect()
}

/// `<folder>/<file>` storage key.
pub fn layer_key(folder: &str, file: &str) -> String {
    format!("{folder}/{file}")
}

/// [`LayerStore`] and [`LayerCatalog`] backed by a local directory.
#[derive(Debug)]
pub struct DirectoryStore {
    root: PathBuf,
    assets: Option<PathBuf>,
    catalog_lock: Mutex<()>,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            assets: None,
            catalog_lock: Mutex::new(()),
        }
    }

    /// Directory holding shared boundary files such as `indonesia-provinces.geojson`.
    pub fn with_assets(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets = Some(dir.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path a key maps to. Keys may not escape the root.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let relative = Path::new(key);
        let safe = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(MapforgeError::Storage(format!("invalid storage key '{key}'")));
        }
        Ok(self.root.join(relative))
    }

    /// Every catalog entry, oldest first.
    pub fn layers(&self) -> Result<Vec<CatalogEntry>> {
        let path = self.root.join(CATALOG_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&path).map_err(|source| MapforgeError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            MapforgeError::Storage(format!("failed to parse catalog '{}': {e}", path.display()))
        })
    }

    fn write_catalog(&self, entries: &[CatalogEntry]) -> Result<()> {
        let path = self.root.join(CATALOG_FILE);
        create_parent(&path)?;
        let file = File::create(&path).map_err(|source| MapforgeError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), entries)?;
        Ok(())
    }
}

impl LayerStore for DirectoryStore {
    fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()> {
        let path = self.path_for(key)?;
        create_parent(&path)?;
        fs::write(&path, bytes).map_err(|source| MapforgeError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(key, content_type, bytes = bytes.len(), "stored object");
        Ok(())
    }

    fn copy_asset(&self, asset: BoundaryAsset, key: &str) -> Result<bool> {
        let Some(dir) = &self.assets else {
            warn!(asset = asset.file_name(), "no asset directory configured");
            return Ok(false);
        };
        let source = dir.join(asset.file_name());
        if !source.is_file() {
            warn!(path = %source.display(), "boundary asset not found");
            return Ok(false);
        }

        let target = self.path_for(key)?;
        create_parent(&target)?;
        fs::copy(&source, &target).map_err(|e| MapforgeError::Io {
            path: target.clone(),
            source: e,
        })?;
        debug!(asset = asset.file_name(), key, "copied boundary asset");
        Ok(true)
    }
}

impl LayerCatalog for DirectoryStore {
    fn insert_layer(&self, record: LayerRecord) -> Result<String> {
        let _guard = self
            .catalog_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut entries = self.layers()?;
        let id = record_id(&record, entries.len());
        info!(id = %id, name = %record.name, layer_type = ?record.layer_type, "layer registered");
        entries.push(CatalogEntry {
            id: id.clone(),
            record,
        });
        self.write_catalog(&entries)?;
        Ok(id)
    }
}

/// Short content-derived id: first 12 hex chars of SHA-256 over the folder,
/// timestamp and catalog position.
fn record_id(record: &LayerRecord, position: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(record.folder.as_bytes());
    hasher.update(record.created_at.to_rfc3339().as_bytes());
    hasher.update(position.to_le_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..12].to_string()
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| MapforgeError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_layer_name() {
        assert_eq!(sanitize_layer_name("GDP per capita (2023)"), "GDP_per_capita__2023_");
        assert_eq!(sanitize_layer_name("rain-fall_v2"), "rain-fall_v2");
        assert_eq!(sanitize_layer_name("../etc"), "___etc");
    }

    #[test]
    fn test_put_writes_under_root() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::new(dir.path());
        store
            .put(&layer_key("rain", POINTS_FILE), b"{}", GEOJSON_CONTENT_TYPE)
            .unwrap();
        assert_eq!(fs::read(dir.path().join("rain/data.geojson")).unwrap(), b"{}");
    }

    #[test]
    fn test_keys_cannot_escape_root() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::new(dir.path());
        assert!(store.put("../x.json", b"{}", JSON_CONTENT_TYPE).is_err());
        assert!(store.put("/abs.json", b"{}", JSON_CONTENT_TYPE).is_err());
        assert!(store.put("", b"{}", JSON_CONTENT_TYPE).is_err());
    }

    #[test]
    fn test_copy_asset_missing_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::new(dir.path());
        let key = layer_key("gdp", BoundaryAsset::IndonesiaProvinces.file_name());
        assert!(!store.copy_asset(BoundaryAsset::IndonesiaProvinces, &key).unwrap());

        let assets = TempDir::new().unwrap();
        fs::write(assets.path().join("indonesia-provinces.geojson"), b"{\"type\":\"FeatureCollection\"}")
            .unwrap();
        let store = store.with_assets(assets.path());
        assert!(store.copy_asset(BoundaryAsset::IndonesiaProvinces, &key).unwrap());
        assert!(dir.path().join("gdp/indonesia-provinces.geojson").is_file());
    }

    #[test]
    fn test_catalog_appends_records() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::new(dir.path());

        let first = store
            .insert_layer(LayerRecord::new("Rain", "rain", LayerType::Geojson).with_description("CSV layer (3 points)"))
            .unwrap();
        let second = store
            .insert_layer(LayerRecord::new("GDP", "gdp", LayerType::Choropleth))
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(first.len(), 12);

        let layers = store.layers().unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].id, first);
        assert_eq!(layers[0].record.description, "CSV layer (3 points)");
        assert_eq!(layers[1].record.layer_type, LayerType::Choropleth);

        let raw: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.path().join(CATALOG_FILE)).unwrap()).unwrap();
        assert_eq!(raw[1]["layer_type"], "choropleth");
        assert_eq!(raw[0]["name"], "Rain");
    }
}
