//! Feature Engineering Engine
//!
//! Deterministic derivation of productivity-model features from raw shift
//! observations.

mod features;
mod observation;

pub use features::{DerivedFeatures, FEATURE_DIMENSION, FEATURE_NAMES};
pub use observation::{EmployeeProfile, WorkObservation};
