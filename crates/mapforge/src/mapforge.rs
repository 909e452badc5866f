//! Main Mapforge struct: job orchestration over the core pipeline.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::correlation::{CorrelationConfig, CorrelationEngine, CorrelationResult};
use crate::error::{MapforgeError, Result};
use crate::features::{ChoroplethLayer, FeatureBuilder, PointLayer, PointOptions};
use crate::inference::CandidateSet;
use crate::input::{Parser, ParserConfig, TabularDataset};
use crate::progress::{NoopProgress, ProgressSink, RowProgress, TaskStatus};
use crate::store::{
    CHOROPLETH_FILE, GEOJSON_CONTENT_TYPE, JSON_CONTENT_TYPE, LayerCatalog, LayerRecord, LayerStore,
    LayerType, POINTS_FILE, layer_key, sanitize_layer_name,
};

/// Default number of rows between progress updates.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;

/// Configuration for a [`Mapforge`] instance.
#[derive(Debug, Clone)]
pub struct MapforgeConfig {
    pub parser: ParserConfig,
    /// Header candidates for column inference.
    pub inference: CandidateSet,
    pub correlation: CorrelationConfig,
    /// Rows between progress updates while building a layer. Zero disables them.
    pub progress_interval: usize,
}

impl Default for MapforgeConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            inference: CandidateSet::default(),
            correlation: CorrelationConfig::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Catalog fields supplied by whoever uploads the layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerMetadata {
    pub name: String,
    /// Replaces the generated description when set.
    pub description: Option<String>,
    pub source_link: Option<String>,
}

impl LayerMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_source_link(mut self, link: impl Into<String>) -> Self {
        self.source_link = Some(link.into());
        self
    }
}

/// Where a published layer ended up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedLayer {
    /// Catalog id.
    pub id: String,
    pub folder: String,
    pub layer_type: LayerType,
    /// Storage keys written for this layer.
    pub keys: Vec<String>,
    pub description: String,
}

/// The CSV-to-map-layer pipeline and correlation engine behind one handle.
///
/// Every job method takes a task key and reports [`TaskStatus`] updates for it
/// through the configured [`ProgressSink`]. Build methods stop at 60%;
/// `publish_*` takes the task to `done`. A terminal error is reported as an
/// `error` status before it is returned.
///
/// # Example
///
/// ```no_run
/// use mapforge::{LayerMetadata, Mapforge, PointOptions};
/// use mapforge::store::DirectoryStore;
///
/// let mapforge = Mapforge::new();
/// let store = DirectoryStore::new("out");
/// let layer = mapforge.points_from_path("job-1", "stations.csv", &PointOptions::new())?;
/// let published = mapforge.publish_points("job-1", &layer, &LayerMetadata::new("stations"), &store, &store)?;
/// println!("{} -> {:?}", published.id, published.keys);
/// # Ok::<(), mapforge::MapforgeError>(())
/// ```
pub struct Mapforge {
    config: MapforgeConfig,
    parser: Parser,
    builder: FeatureBuilder,
    engine: CorrelationEngine,
    progress: Arc<dyn ProgressSink>,
}

impl Default for Mapforge {
    fn default() -> Self {
        Self::new()
    }
}

impl Mapforge {
    /// Create an instance with default configuration and no progress reporting.
    pub fn new() -> Self {
        Self::with_config(MapforgeConfig::default())
    }

    pub fn with_config(config: MapforgeConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser.clone()),
            builder: FeatureBuilder::with_candidates(config.inference.clone()),
            engine: CorrelationEngine::with_config(config.correlation.clone()),
            progress: Arc::new(NoopProgress),
            config,
        }
    }

    /// Send task status updates to `sink`.
    pub fn with_progress(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.progress = sink;
        self
    }

    pub fn config(&self) -> &MapforgeConfig {
        &self.config
    }

    pub fn builder(&self) -> &FeatureBuilder {
        &self.builder
    }

    /// Read a CSV file and build a point layer from it.
    pub fn points_from_path(&self, task: &str, path: impl AsRef<Path>, options: &PointOptions) -> Result<PointLayer> {
        let dataset = self.read(task, path.as_ref())?;
        self.points(task, &dataset, options)
    }

    /// Build a point layer from an already parsed table.
    pub fn points(&self, task: &str, dataset: &TabularDataset, options: &PointOptions) -> Result<PointLayer> {
        let _span = info_span!("points", task).entered();
        self.tracked(task, || {
            if dataset.is_empty() {
                return Err(MapforgeError::EmptyResult("dataset has no rows".to_string()));
            }
            let source = self.builder.geometry_source(dataset, options)?;
            self.report(task, TaskStatus::converting(20, format!("Using {}", source.describe())));

            self.report(task, TaskStatus::converting(30, "Parsing data..."));
            let rows = RowProgress::new(self.progress.as_ref(), task, self.config.progress_interval, 30, 60);
            let layer = self.builder.build_points_with_progress(dataset, options, &rows)?;

            self.report(
                task,
                TaskStatus::converting(60, format!("Built {} points", layer.collection.len())),
            );
            Ok(layer)
        })
    }

    /// Read a CSV file and build a choropleth layer from it.
    pub fn choropleth_from_path(
        &self,
        task: &str,
        path: impl AsRef<Path>,
        value_column: Option<&str>,
    ) -> Result<ChoroplethLayer> {
        let dataset = self.read(task, path.as_ref())?;
        self.choropleth(task, &dataset, value_column)
    }

    /// Infer column roles and build a choropleth layer.
    pub fn choropleth(&self, task: &str, dataset: &TabularDataset, value_column: Option<&str>) -> Result<ChoroplethLayer> {
        let _span = info_span!("choropleth", task).entered();
        self.tracked(task, || {
            if dataset.is_empty() {
                return Err(MapforgeError::EmptyResult("dataset has no rows".to_string()));
            }

            let roles = self
                .builder
                .inference()
                .infer(&dataset.headers, &dataset.sample_row(), value_column)?;
            self.report(
                task,
                TaskStatus::converting(
                    25,
                    format!(
                        "Columns: region={}, time={}, value={}",
                        roles.region_column,
                        roles.time_column.as_deref().unwrap_or("-"),
                        roles.value_column
                    ),
                ),
            );

            self.report(task, TaskStatus::converting(30, "Parsing data..."));
            let rows = RowProgress::new(self.progress.as_ref(), task, self.config.progress_interval, 30, 60);
            let layer = self.builder.build_choropleth_with_progress(dataset, &roles, &rows)?;

            self.report(
                task,
                TaskStatus::converting(
                    60,
                    format!(
                        "Built {} regions over {} periods",
                        layer.dataset.region_count(),
                        layer.dataset.period_count()
                    ),
                ),
            );
            Ok(layer)
        })
    }

    /// Run the correlation engine and mark the task done.
    pub fn correlate(&self, task: &str, x_name: &str, x: &[f64], y_name: &str, y: &[f64]) -> Result<CorrelationResult> {
        let _span = info_span!("correlate", task).entered();
        self.tracked(task, || {
            self.report(task, TaskStatus::converting(10, "Computing correlation..."));
            let result = self.engine.analyze(x_name, x, y_name, y)?;
            self.report(
                task,
                TaskStatus::done(format!("{} relationship (r = {:.2})", result.classification.kind, result.score)),
            );
            Ok(result)
        })
    }

    /// Store a point layer as `<folder>/data.geojson` and register it.
    pub fn publish_points(
        &self,
        task: &str,
        layer: &PointLayer,
        metadata: &LayerMetadata,
        store: &dyn LayerStore,
        catalog: &dyn LayerCatalog,
    ) -> Result<PublishedLayer> {
        self.tracked(task, || {
            let folder = folder_for(&metadata.name)?;
            let key = layer_key(&folder, POINTS_FILE);
            store.put(&key, &layer.collection.to_json_bytes()?, GEOJSON_CONTENT_TYPE)?;

            let description = metadata
                .description
                .clone()
                .unwrap_or_else(|| format!("CSV layer ({} points)", layer.collection.len()));
            self.register(task, metadata, folder, LayerType::Geojson, description, vec![key], catalog)
        })
    }

    /// Store a choropleth as `<folder>/choropleth.json`, copy its boundary
    /// asset next to it and register it.
    ///
    /// A missing boundary asset is logged and the layer is still published.
    pub fn publish_choropleth(
        &self,
        task: &str,
        layer: &ChoroplethLayer,
        metadata: &LayerMetadata,
        store: &dyn LayerStore,
        catalog: &dyn LayerCatalog,
    ) -> Result<PublishedLayer> {
        self.tracked(task, || {
            let folder = folder_for(&metadata.name)?;
            let key = layer_key(&folder, CHOROPLETH_FILE);
            store.put(&key, &layer.dataset.to_json_bytes()?, JSON_CONTENT_TYPE)?;
            let mut keys = vec![key];

            if let Some(asset) = layer.boundary {
                let asset_key = layer_key(&folder, asset.file_name());
                if store.copy_asset(asset, &asset_key)? {
                    keys.push(asset_key);
                }
            }

            let description = metadata.description.clone().unwrap_or_else(|| {
                format!(
                    "Heatmap ({} regions, {} periods)",
                    layer.dataset.region_count(),
                    layer.dataset.period_count()
                )
            });
            self.register(task, metadata, folder, LayerType::Choropleth, description, keys, catalog)
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn register(
        &self,
        task: &str,
        metadata: &LayerMetadata,
        folder: String,
        layer_type: LayerType,
        description: String,
        keys: Vec<String>,
        catalog: &dyn LayerCatalog,
    ) -> Result<PublishedLayer> {
        self.report(task, TaskStatus::converting(90, "Saving metadata..."));
        let record = LayerRecord::new(metadata.name.clone(), folder.clone(), layer_type)
            .with_description(description.clone())
            .with_source_link(metadata.source_link.clone());
        let id = catalog.insert_layer(record)?;

        info!(id = %id, folder = %folder, files = keys.len(), "layer published");
        self.report(task, TaskStatus::done(format!("Layer '{}' published", metadata.name)));

        Ok(PublishedLayer {
            id,
            folder,
            layer_type,
            keys,
            description,
        })
    }

    fn read(&self, task: &str, path: &Path) -> Result<TabularDataset> {
        self.tracked(task, || {
            self.report(task, TaskStatus::converting(10, "Reading CSV..."));
            let (dataset, source) = self.parser.parse_file(path)?;
            info!(
                file = %source.file,
                rows = source.row_count,
                columns = source.column_count,
                hash = %source.hash,
                "loaded source"
            );
            Ok(dataset)
        })
    }

    fn report(&self, task: &str, status: TaskStatus) {
        self.progress.report(task, status);
    }

    /// Run `job`, reporting an `error` status if it fails.
    fn tracked<T>(&self, task: &str, job: impl FnOnce() -> Result<T>) -> Result<T> {
        job().inspect_err(|err| self.report(task, TaskStatus::error(err)))
    }
}

fn folder_for(name: &str) -> Result<String> {
    let folder = sanitize_layer_name(name);
    if folder.is_empty() {
        return Err(MapforgeError::Config(format!("layer name '{name}' is empty")));
    }
    Ok(folder)
}
