//! Feature Scaling

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// Narrow interface over a fitted feature scaler
pub trait Scaler {
    /// Scale a feature vector using statistics captured at fit time
    fn transform(&self, features: &[f64]) -> Vec<f64>;
}

/// Z-score scaler with per-column statistics captured at fit time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f64>,
    std_devs: Vec<f64>,
}

impl StandardScaler {
    /// Fit column means and standard deviations over a feature matrix.
    ///
    /// Standard deviations are population (divide by n). A column with no
    /// variance gets a divisor of 1.0 so it passes through unscaled.
    pub fn fit(matrix: &Array2<f64>) -> Self {
        let n = matrix.nrows().max(1) as f64;
        let means = matrix
            .mean_axis(Axis(0))
            .map(|m| m.to_vec())
            .unwrap_or_else(|| vec![0.0; matrix.ncols()]);

        let std_devs = (0..matrix.ncols())
            .map(|col| {
                let mean = means[col];
                let variance = matrix
                    .column(col)
                    .iter()
                    .map(|v| (v - mean) * (v - mean))
                    .sum::<f64>()
                    / n;
                let std_dev = variance.sqrt();
                if std_dev > 0.0 {
                    std_dev
                } else {
                    1.0
                }
            })
            .collect();

        Self { means, std_devs }
    }

    /// Number of columns the scaler was fitted on
    pub fn dimension(&self) -> usize {
        self.means.len()
    }

    /// Fitted column means
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Fitted column standard deviations
    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Vec<f64> {
        features
            .iter()
            .zip(self.means.iter().zip(self.std_devs.iter()))
            .map(|(value, (mean, std_dev))| (value - mean) / std_dev)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_statistics() {
        let matrix = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let scaler = StandardScaler::fit(&matrix);

        assert_eq!(scaler.means(), &[2.0, 20.0]);
        // population std of [1,2,3] is sqrt(2/3)
        assert!((scaler.std_devs()[0] - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_mean_row_transforms_to_zero() {
        let matrix = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let scaler = StandardScaler::fit(&matrix);

        let scaled = scaler.transform(&[2.0, 20.0]);
        assert!(scaled.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_zero_variance_column_passes_through() {
        let matrix = array![[5.0, 1.0], [5.0, 2.0], [5.0, 3.0]];
        let scaler = StandardScaler::fit(&matrix);

        let scaled = scaler.transform(&[7.0, 2.0]);
        // divisor forced to 1.0, so the constant column just centers
        assert_eq!(scaled[0], 2.0);
        assert!(scaled[1].abs() < 1e-12);
    }
}
