//! Statistical relationship engine.
//!
//! [`CorrelationEngine::analyze`] compares two numeric series and returns a
//! [`CorrelationResult`] with:
//!
//! - Pearson (with p-value), Spearman, Kendall tau-b and k-NN mutual information
//! - a relationship classification with strength, direction and confidence
//! - z-score outliers and their influence on Pearson r
//! - linear, quadratic, logarithmic and power curve fits
//! - a markdown narrative and the scatter payload for a chart
//!
//! ```
//! use mapforge::correlation::{CorrelationEngine, RelationshipType};
//!
//! let x: Vec<f64> = (1..=10).map(f64::from).collect();
//! let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
//!
//! let result = CorrelationEngine::new().analyze("x", &x, "y", &y).unwrap();
//! assert_eq!(result.classification.kind, RelationshipType::Linear);
//! assert_eq!(result.score, 1.0);
//! ```

mod classify;
mod config;
mod insight;
mod metrics;
mod mutual_info;
mod outliers;
mod regression;

pub use classify::{Classification, Confidence, Direction, RelationshipType, Strength, classify};
pub use config::CorrelationConfig;
pub use insight::render as render_narrative;
pub use metrics::{CorrelationMetrics, kendall_tau_b, pearson, pearson_p_value, spearman};
pub use mutual_info::mutual_information;
pub use outliers::OutlierReport;
pub use regression::{CurvePoints, RegressionFit, RegressionModel, Regressions, fit_model};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{MapforgeError, Result};

/// Fewest paired observations `analyze` accepts.
pub const MIN_OBSERVATIONS: usize = 3;

/// Paired series as plotted by the chart component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub x_label: String,
    pub y_label: String,
}

/// Everything the presentation layer needs for one comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Pearson r rounded to two decimals.
    pub score: f64,
    pub metrics: CorrelationMetrics,
    pub classification: Classification,
    /// Indices refer to positions in the caller's original series.
    pub outliers: OutlierReport,
    pub narrative: String,
    pub regressions: Regressions,
    pub chart: ScatterChart,
}

/// Runs the correlation pipeline with a fixed [`CorrelationConfig`].
#[derive(Debug, Clone, Default)]
pub struct CorrelationEngine {
    config: CorrelationConfig,
}

impl CorrelationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CorrelationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CorrelationConfig {
        &self.config
    }

    /// Compare `x` (named `x_name`) against `y` (named `y_name`).
    ///
    /// Pairs where either side is NaN or infinite are dropped before any
    /// metric is computed.
    ///
    /// # Errors
    ///
    /// `SeriesLengthMismatch` when the slices differ in length, and
    /// `InsufficientData` when fewer than [`MIN_OBSERVATIONS`] pairs remain.
    pub fn analyze(&self, x_name: &str, x: &[f64], y_name: &str, y: &[f64]) -> Result<CorrelationResult> {
        if x.len() != y.len() {
            return Err(MapforgeError::SeriesLengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }

        let positions: Vec<usize> = (0..x.len())
            .filter(|&i| x[i].is_finite() && y[i].is_finite())
            .collect();
        if positions.len() < MIN_OBSERVATIONS {
            return Err(MapforgeError::InsufficientData {
                required: MIN_OBSERVATIONS,
                found: positions.len(),
            });
        }

        let xs: Vec<f64> = positions.iter().map(|&i| x[i]).collect();
        let ys: Vec<f64> = positions.iter().map(|&i| y[i]).collect();
        debug!(
            pairs = xs.len(),
            dropped = x.len() - xs.len(),
            "correlating {x_name} against {y_name}"
        );

        let metrics = CorrelationMetrics::compute(&xs, &ys, &self.config);
        let outliers = outliers::detect(&xs, &ys, metrics.pearson, &self.config);
        let classification = classify(&metrics, outliers.influential, &self.config);
        let regressions = Regressions::fit(&xs, &ys, self.config.curve_samples);
        let narrative = insight::render(x_name, y_name, &metrics, &classification, &outliers);

        info!(
            kind = classification.kind.as_str(),
            pearson = metrics.pearson,
            n = metrics.n,
            outliers = outliers.len(),
            "correlation analysed"
        );

        Ok(CorrelationResult {
            score: (metrics.pearson * 100.0).round() / 100.0,
            metrics,
            classification,
            outliers: outliers.remap(&positions),
            narrative,
            regressions,
            chart: ScatterChart {
                x: xs,
                y: ys,
                x_label: x_name.to_string(),
                y_label: y_name.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: i32) -> Vec<f64> {
        (1..=n).map(f64::from).collect()
    }

    #[test]
    fn test_perfect_line() {
        let x = grid(10);
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        let result = CorrelationEngine::new().analyze("x", &x, "y", &y).unwrap();

        assert!((result.metrics.pearson - 1.0).abs() < 1e-9);
        assert_eq!(result.classification.kind, RelationshipType::Linear);
        assert_eq!(result.classification.strength, Some(Strength::Strong));
        assert_eq!(result.classification.direction, Some(Direction::Positive));
        assert!(result.classification.significant);
        // n = 10 is below the low-confidence sample size
        assert_eq!(result.classification.confidence, Confidence::Low);
        assert_eq!(
            result.regressions.linear.as_ref().unwrap().equation,
            "y = 2.00000x + 1.00000"
        );
        assert!(result.regressions.power.is_some());
    }

    #[test]
    fn test_uncorrelated_noise_is_none() {
        let x = grid(10);
        let y = vec![4.2, 9.1, 1.3, 7.7, 5.0, 2.8, 8.4, 3.6, 6.9, 4.9];
        let result = CorrelationEngine::new().analyze("x", &x, "noise", &y).unwrap();

        assert!(result.metrics.pearson.abs() < 0.3);
        assert_eq!(result.classification.kind, RelationshipType::None);
        assert_eq!(result.classification.strength, None);
        assert_eq!(result.classification.direction, None);
        assert_eq!(result.narrative, "No clear correlation found between x and noise.");
    }

    #[test]
    fn test_non_finite_pairs_dropped_and_indices_mapped_back() {
        let mut x = grid(12);
        let mut y: Vec<f64> = x.iter().map(|v| v * 2.0).collect();
        x.insert(0, f64::NAN);
        y.insert(0, 5.0);
        y[6] = 200.0;

        let result = CorrelationEngine::new().analyze("x", &x, "y", &y).unwrap();
        assert_eq!(result.metrics.n, 12);
        assert_eq!(result.chart.x.len(), 12);
        assert_eq!(result.outliers.indices, vec![6]);
        assert!(result.outliers.influential);
    }

    #[test]
    fn test_errors() {
        let engine = CorrelationEngine::new();
        let err = engine.analyze("a", &[1.0, 2.0], "b", &[1.0]).unwrap_err();
        assert!(matches!(err, MapforgeError::SeriesLengthMismatch { left: 2, right: 1 }));

        let err = engine
            .analyze("a", &[1.0, 2.0, f64::NAN], "b", &[1.0, 2.0, 3.0])
            .unwrap_err();
        assert!(matches!(err, MapforgeError::InsufficientData { required: 3, found: 2 }));
    }

    #[test]
    fn test_constant_series_reports_zero() {
        let x = grid(6);
        let y = vec![4.0; 6];
        let result = CorrelationEngine::new().analyze("x", &x, "flat", &y).unwrap();
        assert_eq!(result.metrics.pearson, 0.0);
        assert_eq!(result.metrics.p_value, 1.0);
        assert_eq!(result.classification.kind, RelationshipType::None);
    }
}
