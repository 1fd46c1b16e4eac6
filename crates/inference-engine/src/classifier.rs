//! Attrition Classifier Artifacts
//!
//! The attrition services do not train anything in-process; they load
//! fitted parameters from JSON artifacts. An artifact carries the encoder
//! (numeric z-score statistics plus one-hot category lists) and the
//! logistic coefficients, which is everything inference needs.

use crate::InferenceError;
use feature_engine::EmployeeProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Profile fields an artifact may reference as numeric columns
const NUMERIC_COLUMNS: [&str; 5] = [
    "age",
    "monthly_income",
    "years_at_company",
    "promotions",
    "performance_rating",
];

/// Profile fields an artifact may reference as categorical columns
const CATEGORICAL_COLUMNS: [&str; 5] = [
    "gender",
    "education",
    "department",
    "job_role",
    "overtime",
];

/// Fitted statistics for one numeric column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericColumn {
    pub name: String,
    pub mean: f64,
    pub std_dev: f64,
}

/// One-hot category list for one categorical column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalColumn {
    pub name: String,
    pub categories: Vec<String>,
}

/// Fitted preprocessor: z-scored numerics followed by one-hot blocks.
///
/// Output column order is the numeric columns in listed order, then each
/// categorical column's categories in listed order. The coefficient
/// vector of the paired model is fitted against exactly that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureEncoder {
    pub numeric: Vec<NumericColumn>,
    pub categorical: Vec<CategoricalColumn>,
}

impl FeatureEncoder {
    /// Width of the encoded vector
    pub fn output_dimension(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|c| c.categories.len())
                .sum::<usize>()
    }

    /// Encode a profile into the fitted column order.
    ///
    /// A categorical value outside the fitted list encodes as an all-zero
    /// block rather than an error, matching how the offline encoder was
    /// configured to handle unknown categories.
    pub fn encode(&self, profile: &EmployeeProfile) -> Result<Vec<f64>, InferenceError> {
        let mut encoded = Vec::with_capacity(self.output_dimension());

        for column in &self.numeric {
            let value = numeric_value(profile, &column.name)?;
            let divisor = if column.std_dev > 0.0 {
                column.std_dev
            } else {
                1.0
            };
            encoded.push((value - column.mean) / divisor);
        }

        for column in &self.categorical {
            let value = categorical_value(profile, &column.name)?;
            for category in &column.categories {
                encoded.push(if category == value { 1.0 } else { 0.0 });
            }
        }

        Ok(encoded)
    }

    fn validate_column_names(&self) -> Result<(), InferenceError> {
        for column in &self.numeric {
            if !NUMERIC_COLUMNS.contains(&column.name.as_str()) {
                return Err(InferenceError::ArtifactError(format!(
                    "unknown numeric column '{}'",
                    column.name
                )));
            }
        }
        for column in &self.categorical {
            if !CATEGORICAL_COLUMNS.contains(&column.name.as_str()) {
                return Err(InferenceError::ArtifactError(format!(
                    "unknown categorical column '{}'",
                    column.name
                )));
            }
        }
        Ok(())
    }
}

fn numeric_value(profile: &EmployeeProfile, name: &str) -> Result<f64, InferenceError> {
    match name {
        "age" => Ok(profile.age as f64),
        "monthly_income" => Ok(profile.monthly_income),
        "years_at_company" => Ok(profile.years_at_company as f64),
        "promotions" => Ok(profile.promotions as f64),
        "performance_rating" => Ok(profile.performance_rating as f64),
        other => Err(InferenceError::ArtifactError(format!(
            "unknown numeric column '{other}'"
        ))),
    }
}

fn categorical_value<'a>(
    profile: &'a EmployeeProfile,
    name: &str,
) -> Result<&'a str, InferenceError> {
    match name {
        "gender" => Ok(&profile.gender),
        "education" => Ok(&profile.education),
        "department" => Ok(&profile.department),
        "job_role" => Ok(&profile.job_role),
        "overtime" => Ok(&profile.overtime),
        other => Err(InferenceError::ArtifactError(format!(
            "unknown categorical column '{other}'"
        ))),
    }
}

/// Fitted logistic model over the encoded vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    /// Probability of the positive (attrition) class
    pub fn predict_proba(&self, encoded: &[f64]) -> Result<f64, InferenceError> {
        if encoded.len() != self.coefficients.len() {
            return Err(InferenceError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: encoded.len(),
            });
        }
        let score = self
            .coefficients
            .iter()
            .zip(encoded.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        Ok(sigmoid(score))
    }
}

fn sigmoid(score: f64) -> f64 {
    1.0 / (1.0 + (-score).exp())
}

/// Single-file artifact bundling preprocessor and model together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub preprocessor: FeatureEncoder,
    pub model: LogisticModel,
}

/// A loaded attrition classifier: encoder plus logistic model, validated
/// against each other at construction
pub struct AttritionClassifier {
    encoder: FeatureEncoder,
    model: LogisticModel,
}

impl AttritionClassifier {
    /// Pair an encoder and model, rejecting mismatched widths or unknown
    /// column names up front
    pub fn new(encoder: FeatureEncoder, model: LogisticModel) -> Result<Self, InferenceError> {
        encoder.validate_column_names()?;
        let expected = encoder.output_dimension();
        if model.coefficients.len() != expected {
            return Err(InferenceError::DimensionMismatch {
                expected,
                actual: model.coefficients.len(),
            });
        }
        Ok(Self { encoder, model })
    }

    /// Load from the two-file layout: a preprocessor artifact and a model
    /// artifact
    pub fn from_artifact_paths(
        preprocessor_path: impl AsRef<Path>,
        model_path: impl AsRef<Path>,
    ) -> Result<Self, InferenceError> {
        let encoder: FeatureEncoder = read_artifact(preprocessor_path.as_ref())?;
        let model: LogisticModel = read_artifact(model_path.as_ref())?;
        let classifier = Self::new(encoder, model)?;
        info!(
            dimension = classifier.encoder.output_dimension(),
            "loaded attrition classifier"
        );
        Ok(classifier)
    }

    /// Load from the combined single-file pipeline layout
    pub fn from_pipeline_path(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let artifact: PipelineArtifact = read_artifact(path.as_ref())?;
        let classifier = Self::new(artifact.preprocessor, artifact.model)?;
        info!(
            dimension = classifier.encoder.output_dimension(),
            "loaded attrition pipeline"
        );
        Ok(classifier)
    }

    /// Probability of attrition for one employee profile
    pub fn predict_proba(&self, profile: &EmployeeProfile) -> Result<f64, InferenceError> {
        let encoded = self.encoder.encode(profile)?;
        self.model.predict_proba(&encoded)
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, InferenceError> {
    let bytes = std::fs::read(path).map_err(|e| {
        InferenceError::ArtifactError(format!("{}: {e}", path.display()))
    })?;
    serde_json::from_slice(&bytes)
        .map_err(|e| InferenceError::ArtifactError(format!("{}: {e}", path.display())))
}
