//! Z-score outlier flagging and Pearson sensitivity check.

use serde::{Deserialize, Serialize};

use super::config::CorrelationConfig;
use super::metrics::{mean, pearson, population_std};

/// Flagged observations and their effect on the Pearson coefficient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    /// Flagged positions, ascending.
    pub indices: Vec<usize>,
    /// Pearson r with the flagged points removed, when enough points remain.
    pub pearson_without: Option<f64>,
    /// `|pearson_without - pearson|`.
    pub delta: Option<f64>,
    /// The change exceeds the configured influence threshold.
    pub influential: bool,
}

impl OutlierReport {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Rewrite indices through `positions` (local index -> caller index).
    pub(crate) fn remap(mut self, positions: &[usize]) -> Self {
        for idx in &mut self.indices {
            *idx = positions[*idx];
        }
        self
    }
}

/// Flag points whose |z| exceeds the threshold on either axis and measure how
/// much removing them moves Pearson r.
pub(crate) fn detect(x: &[f64], y: &[f64], pearson_all: f64, config: &CorrelationConfig) -> OutlierReport {
    let zx = z_scores(x);
    let zy = z_scores(y);

    let indices: Vec<usize> = (0..x.len())
        .filter(|&i| zx[i].abs() > config.outlier_z || zy[i].abs() > config.outlier_z)
        .collect();

    if indices.is_empty() {
        return OutlierReport::default();
    }

    let keep: Vec<usize> = (0..x.len()).filter(|i| indices.binary_search(i).is_err()).collect();
    if keep.len() < 3 {
        return OutlierReport {
            indices,
            ..Default::default()
        };
    }

    let kx: Vec<f64> = keep.iter().map(|&i| x[i]).collect();
    let ky: Vec<f64> = keep.iter().map(|&i| y[i]).collect();
    let without = pearson(&kx, &ky);
    let delta = (without - pearson_all).abs();

    OutlierReport {
        indices,
        pearson_without: Some(without),
        delta: Some(delta),
        influential: delta > config.influence_delta,
    }
}

/// Population z-scores; all zero for a constant series.
fn z_scores(values: &[f64]) -> Vec<f64> {
    let m = mean(values);
    let sd = population_std(values);
    if sd == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - m) / sd).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_outliers_on_uniform_grid() {
        let x: Vec<f64> = (1..=20).map(f64::from).collect();
        let report = detect(&x, &x, 1.0, &CorrelationConfig::default());
        assert!(report.is_empty());
        assert!(!report.influential);
    }

    #[test]
    fn test_extreme_point_is_flagged_and_influential() {
        let x: Vec<f64> = (1..=12).map(f64::from).collect();
        let mut y: Vec<f64> = x.iter().map(|v| v * 2.0).collect();
        y[5] = 200.0;
        let r = pearson(&x, &y);
        let report = detect(&x, &y, r, &CorrelationConfig::default());

        assert_eq!(report.indices, vec![5]);
        assert!((report.pearson_without.unwrap() - 1.0).abs() < 1e-12);
        assert!(report.influential);
    }

    #[test]
    fn test_remap_to_caller_positions() {
        let report = OutlierReport {
            indices: vec![0, 2],
            ..Default::default()
        };
        assert_eq!(report.remap(&[1, 4, 7]).indices, vec![1, 7]);
    }
}
