//! Least-squares curve fits returned as sampled coordinate arrays.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::metrics::{mean, population_std};
use crate::error::{MapforgeError, Result};

/// Fitted model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressionModel {
    Linear,
    Poly2,
    Log,
    Power,
}

impl RegressionModel {
    pub fn name(&self) -> &'static str {
        match self {
            RegressionModel::Linear => "linear",
            RegressionModel::Poly2 => "poly2",
            RegressionModel::Log => "log",
            RegressionModel::Power => "power",
        }
    }
}

/// Sampled curve for an external chart component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurvePoints {
    /// Ascending x positions.
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// One successful fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionFit {
    pub model: RegressionModel,
    /// Linear/poly2: ascending powers of x. Log: `[a, b]` of `a + b ln x`.
    /// Power: `[a, b]` of `a x^b`.
    pub coefficients: Vec<f64>,
    pub equation: String,
    pub r_squared: f64,
    pub curve: CurvePoints,
}

/// All attempted fits; a model that could not be fitted is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Regressions {
    pub linear: Option<RegressionFit>,
    pub poly2: Option<RegressionFit>,
    pub log: Option<RegressionFit>,
    pub power: Option<RegressionFit>,
}

impl Regressions {
    /// Attempt every model. Failures are logged and the model omitted.
    pub fn fit(x: &[f64], y: &[f64], samples: usize) -> Self {
        let attempt = |model: RegressionModel| match fit_model(model, x, y, samples) {
            Ok(fit) => Some(fit),
            Err(err) => {
                debug!(model = model.name(), error = %err, "regression omitted");
                None
            }
        };
        Self {
            linear: attempt(RegressionModel::Linear),
            poly2: attempt(RegressionModel::Poly2),
            log: attempt(RegressionModel::Log),
            power: attempt(RegressionModel::Power),
        }
    }

    /// Successful fits in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = &RegressionFit> {
        [&self.linear, &self.poly2, &self.log, &self.power]
            .into_iter()
            .flatten()
    }
}

/// Fit a single model.
pub fn fit_model(model: RegressionModel, x: &[f64], y: &[f64], samples: usize) -> Result<RegressionFit> {
    let fail = |reason: &str| MapforgeError::Fit {
        model: model.name(),
        reason: reason.to_string(),
    };

    if x.len() != y.len() || x.is_empty() {
        return Err(fail("series are empty or of unequal length"));
    }

    let coefficients = match model {
        RegressionModel::Linear => polyfit(x, y, 1).map_err(fail)?,
        RegressionModel::Poly2 => polyfit(x, y, 2).map_err(fail)?,
        RegressionModel::Log => {
            if x.iter().any(|&v| v <= 0.0) {
                return Err(fail("x contains non-positive values"));
            }
            let lx: Vec<f64> = x.iter().map(|v| v.ln()).collect();
            polyfit(&lx, y, 1).map_err(fail)?
        }
        RegressionModel::Power => {
            if x.iter().chain(y).any(|&v| v <= 0.0) {
                return Err(fail("x or y contains non-positive values"));
            }
            let lx: Vec<f64> = x.iter().map(|v| v.ln()).collect();
            let ly: Vec<f64> = y.iter().map(|v| v.ln()).collect();
            let line = polyfit(&lx, &ly, 1).map_err(fail)?;
            vec![line[0].exp(), line[1]]
        }
    };

    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(fail("non-finite coefficient"));
    }

    let predict = |v: f64| evaluate(model, &coefficients, v);
    let fitted: Vec<f64> = x.iter().map(|&v| predict(v)).collect();
    let r_squared = r_squared(y, &fitted);
    let curve = sample_curve(x, samples, predict);

    Ok(RegressionFit {
        model,
        equation: equation(model, &coefficients),
        coefficients,
        r_squared,
        curve,
    })
}

fn evaluate(model: RegressionModel, c: &[f64], x: f64) -> f64 {
    match model {
        RegressionModel::Linear | RegressionModel::Poly2 => {
            c.iter().rev().fold(0.0, |acc, coef| acc * x + coef)
        }
        RegressionModel::Log => c[0] + c[1] * x.ln(),
        RegressionModel::Power => c[0] * x.powf(c[1]),
    }
}

/// Least-squares polynomial of `degree`, coefficients in ascending powers.
///
/// x is centered and scaled before solving the normal equations, then the
/// coefficients are expanded back to the raw basis.
fn polyfit(x: &[f64], y: &[f64], degree: usize) -> std::result::Result<Vec<f64>, &'static str> {
    let mut distinct = x.to_vec();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();
    if distinct.len() <= degree {
        return Err("not enough distinct x values");
    }

    let center = mean(x);
    let scale = match population_std(x) {
        s if s > 0.0 => s,
        _ => 1.0,
    };
    let t: Vec<f64> = x.iter().map(|v| (v - center) / scale).collect();

    let size = degree + 1;
    let mut matrix = vec![vec![0.0; size + 1]; size];
    for (ti, yi) in t.iter().zip(y) {
        let powers: Vec<f64> = (0..=2 * degree).map(|p| ti.powi(p as i32)).collect();
        for row in 0..size {
            for col in 0..size {
                matrix[row][col] += powers[row + col];
            }
            matrix[row][size] += powers[row] * yi;
        }
    }

    let scaled = solve(matrix).ok_or("singular normal equations")?;
    Ok(expand(&scaled, center, scale))
}

/// Gaussian elimination with partial pivoting on an augmented matrix.
fn solve(mut m: Vec<Vec<f64>>) -> Option<Vec<f64>> {
    let n = m.len();
    for col in 0..n {
        let pivot = (col..n).max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))?;
        if m[pivot][col].abs() < 1e-12 {
            return None;
        }
        m.swap(col, pivot);
        for row in (col + 1)..n {
            let factor = m[row][col] / m[col][col];
            for k in col..=n {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    let mut out = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n).map(|k| m[row][k] * out[k]).sum();
        out[row] = (m[row][n] - tail) / m[row][row];
    }
    Some(out)
}

/// Rewrite `sum c_k ((x - center) / scale)^k` in powers of x.
fn expand(coefs: &[f64], center: f64, scale: f64) -> Vec<f64> {
    let mut out = vec![0.0; coefs.len()];
    // (x - center)^k expanded by the binomial theorem
    for (k, c) in coefs.iter().enumerate() {
        let factor = c / scale.powi(k as i32);
        for j in 0..=k {
            out[j] += factor * binomial(k, j) as f64 * (-center).powi((k - j) as i32);
        }
    }
    out
}

fn binomial(n: usize, k: usize) -> u64 {
    (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i as u64 + 1))
}

fn r_squared(y: &[f64], fitted: &[f64]) -> f64 {
    let m = mean(y);
    let ss_tot: f64 = y.iter().map(|v| (v - m).powi(2)).sum();
    let ss_res: f64 = y.iter().zip(fitted).map(|(a, b)| (a - b).powi(2)).sum();
    if ss_tot == 0.0 {
        return if ss_res < 1e-12 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}

fn sample_curve(x: &[f64], samples: usize, predict: impl Fn(f64) -> f64) -> CurvePoints {
    let lo = x.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let samples = samples.max(2);
    let step = (hi - lo) / (samples - 1) as f64;

    let xs: Vec<f64> = (0..samples).map(|i| lo + step * i as f64).collect();
    let ys = xs.iter().map(|&v| predict(v)).collect();
    CurvePoints { x: xs, y: ys }
}

// =============================================================================
// EQUATIONS
// =============================================================================

fn equation(model: RegressionModel, c: &[f64]) -> String {
    match model {
        RegressionModel::Linear => format!("y = {:.5}x {}", c[1], signed(c[0])),
        RegressionModel::Poly2 => {
            format!("y = {:.5}x^2 {}x {}", c[2], signed(c[1]), signed(c[0]))
        }
        RegressionModel::Log => format!("y = {:.5} {}·ln(x)", c[0], signed(c[1])),
        RegressionModel::Power => format!("y = {:.5}x^{:.5}", c[0], c[1]),
    }
}

/// `"+ 1.00000"` / `"- 1.00000"`.
fn signed(v: f64) -> String {
    if v < 0.0 {
        format!("- {:.5}", -v)
    } else {
        format!("+ {:.5}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Vec<f64> {
        (1..=10).map(f64::from).collect()
    }

    #[test]
    fn test_linear_fit_recovers_line() {
        let x = grid();
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        let fit = fit_model(RegressionModel::Linear, &x, &y, 50).unwrap();

        assert!((fit.coefficients[0] - 1.0).abs() < 1e-9);
        assert!((fit.coefficients[1] - 2.0).abs() < 1e-9);
        assert_eq!(fit.equation, "y = 2.00000x + 1.00000");
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert_eq!(fit.curve.x.len(), 50);
        assert_eq!(fit.curve.x[0], 1.0);
        assert!((fit.curve.x[49] - 10.0).abs() < 1e-12);
        assert!(fit.curve.x.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_poly2_fit() {
        let x = grid();
        let y: Vec<f64> = x.iter().map(|v| 0.5 * v * v - 3.0 * v + 4.0).collect();
        let fit = fit_model(RegressionModel::Poly2, &x, &y, 20).unwrap();

        assert!((fit.coefficients[2] - 0.5).abs() < 1e-8);
        assert!((fit.coefficients[1] + 3.0).abs() < 1e-8);
        assert!((fit.coefficients[0] - 4.0).abs() < 1e-8);
        assert_eq!(fit.equation, "y = 0.50000x^2 - 3.00000x + 4.00000");
    }

    #[test]
    fn test_log_and_power_fits() {
        let x = grid();
        let y_log: Vec<f64> = x.iter().map(|v| 1.0 + 2.0 * v.ln()).collect();
        let log = fit_model(RegressionModel::Log, &x, &y_log, 10).unwrap();
        assert!((log.coefficients[1] - 2.0).abs() < 1e-9);
        assert_eq!(log.equation, "y = 1.00000 + 2.00000·ln(x)");

        let y_pow: Vec<f64> = x.iter().map(|v| 3.0 * v.powf(1.5)).collect();
        let power = fit_model(RegressionModel::Power, &x, &y_pow, 10).unwrap();
        assert!((power.coefficients[0] - 3.0).abs() < 1e-9);
        assert!((power.coefficients[1] - 1.5).abs() < 1e-9);
        assert_eq!(power.equation, "y = 3.00000x^1.50000");
    }

    #[test]
    fn test_domain_failures_are_omitted() {
        let x = vec![-1.0, 0.0, 1.0, 2.0];
        let y = vec![1.0, 2.0, 3.0, 4.0];
        let fits = Regressions::fit(&x, &y, 10);

        assert!(fits.linear.is_some());
        assert!(fits.poly2.is_some());
        assert!(fits.log.is_none());
        assert!(fits.power.is_none());
        assert_eq!(fits.iter().count(), 2);

        let err = fit_model(RegressionModel::Log, &x, &y, 10).unwrap_err();
        assert!(matches!(err, MapforgeError::Fit { model: "log", .. }));
    }

    #[test]
    fn test_constant_x_cannot_be_fitted() {
        let fits = Regressions::fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0], 10);
        assert_eq!(fits.iter().count(), 0);
    }

    #[test]
    fn test_negative_intercept_formatting() {
        let x = grid();
        let y: Vec<f64> = x.iter().map(|v| -0.25 * v - 1.5).collect();
        let fit = fit_model(RegressionModel::Linear, &x, &y, 10).unwrap();
        assert_eq!(fit.equation, "y = -0.25000x - 1.50000");
    }
}
