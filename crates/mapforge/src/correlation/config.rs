//! Tunable thresholds for relationship classification.

use serde::{Deserialize, Serialize};

/// Heuristic constants used by [`CorrelationEngine`](super::CorrelationEngine).
///
/// The defaults are product-tuned cut-offs, not derived from a statistical
/// model. Partial TOML tables override only the fields they name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// `|pearson|` below this (with the other two) means no relationship.
    pub none_pearson: f64,
    /// `|spearman|` below this (with the other two) means no relationship.
    pub none_spearman: f64,
    /// Mutual information below this (with the other two) means no relationship.
    pub none_mutual_info: f64,
    /// How far `|spearman|` must exceed `|pearson|` to call the shape monotonic.
    pub nonlinear_gap: f64,
    /// Mutual information above this with weak Pearson means a complex dependency.
    pub complex_mutual_info: f64,
    /// Pearson ceiling for the complex-dependency branch.
    pub complex_pearson: f64,
    pub strong: f64,
    pub moderate_strong: f64,
    pub moderate: f64,
    /// Absolute z-score above which an observation is flagged.
    pub outlier_z: f64,
    /// Pearson change that makes flagged outliers influential.
    pub influence_delta: f64,
    /// p-value cut-off for `significant`.
    pub significance: f64,
    /// Below this many pairs confidence is low.
    pub low_confidence_n: usize,
    /// Below this many pairs confidence is at most medium.
    pub medium_confidence_n: usize,
    /// Neighbour count for the mutual information estimator.
    pub mi_neighbors: usize,
    /// Seed for the tie-breaking jitter added before the neighbour search.
    pub mi_seed: u64,
    /// Points per fitted regression curve.
    pub curve_samples: usize,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            none_pearson: 0.3,
            none_spearman: 0.3,
            none_mutual_info: 0.2,
            nonlinear_gap: 0.08,
            complex_mutual_info: 0.4,
            complex_pearson: 0.3,
            strong: 0.7,
            moderate_strong: 0.5,
            moderate: 0.3,
            outlier_z: 2.0,
            influence_delta: 0.05,
            significance: 0.05,
            low_confidence_n: 15,
            medium_confidence_n: 30,
            mi_neighbors: 3,
            mi_seed: 42,
            curve_samples: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_table_keeps_defaults() {
        let config: CorrelationConfig = serde_json::from_str(r#"{"strong": 0.8}"#).unwrap();
        assert_eq!(config.strong, 0.8);
        assert_eq!(config.moderate, 0.3);
        assert_eq!(config.mi_neighbors, 3);
    }
}
