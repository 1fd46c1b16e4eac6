//! Productivity Prediction Pipeline

use crate::ridge::{Regressor, RidgeRegression};
use crate::scaler::{Scaler, StandardScaler};
use crate::InferenceError;
use dataset::TrainingSet;
use feature_engine::{DerivedFeatures, WorkObservation, FEATURE_DIMENSION};
use ndarray::{Array1, Array2};
use serde::Serialize;
use tracing::info;

/// Result of a productivity prediction
#[derive(Debug, Clone, Serialize)]
pub struct ProductivityPrediction {
    /// Predicted score, rounded to 2 decimal digits
    pub score: f64,
    /// Unrounded engineered features, exposed for transparency
    pub features: DerivedFeatures,
}

/// Fitted scaler + ridge pipeline for productivity scoring.
///
/// Both stages are fitted over the derived-feature matrix in
/// `FEATURE_NAMES` column order, and prediction feeds vectors in the same
/// order. The two must never diverge: the model consumes positions, so a
/// reordering silently corrupts every prediction.
pub struct ProductivityPipeline {
    scaler: StandardScaler,
    regressor: RidgeRegression,
}

impl ProductivityPipeline {
    /// Fit the pipeline over a training set.
    ///
    /// Runs the feature derivation row-wise over the full set, then fits
    /// the scaler statistics and the ridge coefficients on the resulting
    /// matrix.
    pub fn fit(training: &TrainingSet, alpha: f64) -> Result<Self, InferenceError> {
        if training.is_empty() {
            return Err(InferenceError::FitFailed(
                "empty training set".to_string(),
            ));
        }

        let rows = training.len();
        let mut matrix = Array2::zeros((rows, FEATURE_DIMENSION));
        for (i, obs) in training.observations.iter().enumerate() {
            let vector = DerivedFeatures::from_observation(obs).to_vector();
            for (j, value) in vector.iter().enumerate() {
                matrix[[i, j]] = *value;
            }
        }

        let scaler = StandardScaler::fit(&matrix);

        let mut scaled = Array2::zeros((rows, FEATURE_DIMENSION));
        for (i, row) in matrix.rows().into_iter().enumerate() {
            let values: Vec<f64> = row.iter().copied().collect();
            for (j, value) in scaler.transform(&values).into_iter().enumerate() {
                scaled[[i, j]] = value;
            }
        }

        let targets = Array1::from_vec(training.targets.clone());
        let regressor = RidgeRegression::fit(&scaled, &targets, alpha)?;

        info!(rows, alpha, "productivity pipeline fitted");
        Ok(Self { scaler, regressor })
    }

    /// Predict a productivity score for one observation.
    ///
    /// Infallible once the pipeline exists: derivation is total and both
    /// stages are already fitted. Callers holding no pipeline must surface
    /// [`InferenceError::ModelUnavailable`] instead of calling this.
    pub fn predict(&self, obs: &WorkObservation) -> ProductivityPrediction {
        let features = DerivedFeatures::from_observation(obs);
        let scaled = self.scaler.transform(&features.to_vector());
        let raw = self.regressor.predict(&scaled);

        ProductivityPrediction {
            score: round_to_cents(raw),
            features,
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
