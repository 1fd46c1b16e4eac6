//! Prediction Engine
//!
//! Fitted preprocessing and model inference for the workforce services:
//! the productivity scaler + ridge pipeline fitted at startup, and the
//! attrition classifiers loaded from parameter artifacts.

mod classifier;
mod pipeline;
mod ridge;
mod scaler;

pub use classifier::{
    AttritionClassifier, CategoricalColumn, FeatureEncoder, LogisticModel, NumericColumn,
    PipelineArtifact,
};
pub use pipeline::{ProductivityPipeline, ProductivityPrediction};
pub use ridge::{Regressor, RidgeRegression};
pub use scaler::{Scaler, StandardScaler};

use thiserror::Error;

/// Errors during model fitting or inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Startup fit/load failed and no model is available
    #[error("Model is not initialized")]
    ModelUnavailable,
    #[error("Model fit failed: {0}")]
    FitFailed(String),
    #[error("Model artifact error: {0}")]
    ArtifactError(String),
    #[error("Invalid input dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
