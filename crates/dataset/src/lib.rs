//! Training Dataset Loading
//!
//! Reads the productivity training CSV into observations and targets for
//! the startup fit.

mod loader;

pub use loader::{TrainingRecord, TrainingSet};

use thiserror::Error;

/// Errors while loading a training set
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read training data: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed training data: {0}")]
    Csv(#[from] csv::Error),
    #[error("Training data contains no rows")]
    Empty,
}
