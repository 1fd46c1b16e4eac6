//! Ridge Regression

use crate::InferenceError;
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Narrow interface over a fitted regression model
pub trait Regressor {
    /// Predict a scalar from an already-scaled feature vector
    fn predict(&self, features: &[f64]) -> f64;
}

/// Linear regression with an L2 penalty baked into the fitted weights.
///
/// The penalty only enters at fit time; prediction is a plain linear
/// combination plus intercept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RidgeRegression {
    weights: Vec<f64>,
    intercept: f64,
}

impl RidgeRegression {
    /// Fit coefficients by solving the centered normal equations
    /// `(Xcᵀ Xc + αI) w = Xcᵀ yc`. Centering keeps the intercept out of
    /// the penalty; it is recovered from the column means afterwards.
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>, alpha: f64) -> Result<Self, InferenceError> {
        if x.nrows() == 0 {
            return Err(InferenceError::FitFailed("no training rows".to_string()));
        }
        if x.nrows() != y.len() {
            return Err(InferenceError::DimensionMismatch {
                expected: x.nrows(),
                actual: y.len(),
            });
        }
        if alpha < 0.0 {
            return Err(InferenceError::FitFailed(format!(
                "negative penalty alpha {alpha}"
            )));
        }

        let x_means = x
            .mean_axis(Axis(0))
            .ok_or_else(|| InferenceError::FitFailed("no feature columns".to_string()))?;
        let y_mean = y.mean().unwrap_or(0.0);

        let x_centered = x - &x_means;
        let y_centered = y - y_mean;

        let mut gram = x_centered.t().dot(&x_centered);
        for i in 0..gram.nrows() {
            gram[[i, i]] += alpha;
        }
        let rhs = x_centered.t().dot(&y_centered);

        let weights = solve_linear_system(gram, rhs)?;
        let intercept = y_mean
            - x_means
                .iter()
                .zip(weights.iter())
                .map(|(m, w)| m * w)
                .sum::<f64>();

        debug!(dimension = weights.len(), alpha, "fitted ridge regression");
        Ok(Self { weights, intercept })
    }

    /// Fitted coefficient vector
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Fitted intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Regressor for RidgeRegression {
    fn predict(&self, features: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

/// Gaussian elimination with partial pivoting.
///
/// The ridge gram matrix is symmetric positive definite for alpha > 0, so
/// the singular branch only fires on degenerate input (alpha = 0 with
/// collinear columns).
fn solve_linear_system(
    mut a: Array2<f64>,
    mut b: Array1<f64>,
) -> Result<Vec<f64>, InferenceError> {
    let n = b.len();

    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if a[[row, col]].abs() > a[[pivot, col]].abs() {
                pivot = row;
            }
        }
        if a[[pivot, col]].abs() < 1e-12 {
            return Err(InferenceError::FitFailed(
                "singular normal-equations matrix".to_string(),
            ));
        }
        if pivot != col {
            for k in 0..n {
                a.swap([col, k], [pivot, k]);
            }
            b.swap(col, pivot);
        }
        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            for k in col..n {
                let upper = a[[col, k]];
                a[[row, k]] -= factor * upper;
            }
            let rhs_pivot = b[col];
            b[row] -= factor * rhs_pivot;
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in row + 1..n {
            sum -= a[[row, k]] * x[k];
        }
        x[row] = sum / a[[row, row]];
    }
    Ok(x)
}
