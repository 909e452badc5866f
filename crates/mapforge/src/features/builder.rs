//! Shared state for the point and choropleth builders.

use crate::inference::{CandidateSet, ColumnInference};
use crate::region::RegionResolver;

/// Turns a [`TabularDataset`](crate::input::TabularDataset) into map layers.
///
/// Both builders ingest best-effort: rows that cannot be placed are skipped and
/// counted, and only an empty result aborts the job.
#[derive(Debug, Clone, Default)]
pub struct FeatureBuilder {
    pub(super) resolver: RegionResolver,
    pub(super) inference: ColumnInference,
}

impl FeatureBuilder {
    /// Create a builder with the built-in candidate lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with custom header candidates.
    pub fn with_candidates(candidates: CandidateSet) -> Self {
        Self {
            resolver: RegionResolver::new(),
            inference: ColumnInference::with_candidates(candidates),
        }
    }

    /// The column inference engine used for auto-detection.
    pub fn inference(&self) -> &ColumnInference {
        &self.inference
    }
}
