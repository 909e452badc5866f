//! Mapforge: CSV-to-map-layer pipeline and statistical relationship engine.
//!
//! Mapforge turns loosely structured tabular exports into web map layers and
//! compares numeric layers against each other.
//!
//! # Core Pieces
//!
//! - **Column inference**: guess which headers hold regions, periods and values
//! - **Region resolution**: ISO codes, country names and Indonesian provinces to anchors
//! - **Feature building**: GeoJSON point sets and region x period choropleth tables
//! - **Correlation**: multi-metric relationship classification with outlier checks
//!
//! Ingestion is best-effort: rows that cannot be placed are skipped and counted,
//! and only a job that produces nothing fails.
//!
//! # Example
//!
//! ```no_run
//! use mapforge::Mapforge;
//!
//! let mapforge = Mapforge::new();
//! let layer = mapforge.choropleth_from_path("job-1", "gdp.csv", None).unwrap();
//!
//! println!("Regions: {}", layer.dataset.region_count());
//! println!("Periods: {:?}", layer.dataset.years);
//! ```

pub mod correlation;
pub mod error;
pub mod features;
pub mod inference;
pub mod input;
pub mod progress;
pub mod region;
pub mod store;

mod mapforge;

pub use crate::mapforge::{
    DEFAULT_PROGRESS_INTERVAL, LayerMetadata, Mapforge, MapforgeConfig, PublishedLayer,
};
pub use correlation::{CorrelationConfig, CorrelationEngine, CorrelationResult};
pub use error::{MapforgeError, Result};
pub use features::{
    ChoroplethDataset, ChoroplethLayer, FeatureBuilder, PointFeatureCollection, PointLayer,
    PointOptions, SkipReport,
};
pub use inference::{CandidateSet, ColumnInference, ColumnRoles};
pub use input::{SourceMetadata, TabularDataset};
pub use progress::{MemoryProgress, NoopProgress, ProgressSink, TaskStatus};
pub use region::{RegionMode, RegionResolver};
