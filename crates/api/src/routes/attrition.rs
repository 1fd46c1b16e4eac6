//! Attrition Service Routes
//!
//! Two near-duplicate surfaces over the same classifier seam. The legacy
//! service echoes the input and labels risk as HIGH_RISK/LOW_RISK; the
//! pipeline service uses longer labels, a drifted category schema, and a
//! trimmed response. The drift is deliberate: neither shape is
//! authoritative, so both are kept as deployed.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use data_validator::ValidationConfig;
use feature_engine::EmployeeProfile;
use serde::Serialize;
use std::sync::Arc;

use crate::{inference_failure, validation_failure, AttritionState, ErrorResponse};
use inference_engine::InferenceError;

/// Build the legacy attrition service router
pub fn router(state: Arc<AttritionState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/predict", post(predict))
        .with_state(state)
}

/// Build the attrition pipeline service router
pub fn pipeline_router(state: Arc<AttritionState>) -> Router {
    Router::new()
        .route("/", get(pipeline_health))
        .route("/predict", post(pipeline_predict))
        .with_state(state)
}

/// Schema for the pipeline service: two gender literals and an R&D
/// department instead of Finance
pub fn pipeline_schema() -> ValidationConfig {
    ValidationConfig {
        genders: vec!["Female".to_string(), "Male".to_string()],
        departments: vec![
            "HR".to_string(),
            "Sales".to_string(),
            "IT".to_string(),
            "R&D".to_string(),
        ],
        ..Default::default()
    }
}

fn round_probability(proba: f64) -> f64 {
    (proba * 10_000.0).round() / 10_000.0
}

/// Legacy health payload
#[derive(Debug, Serialize)]
pub struct LegacyHealthResponse {
    pub message: String,
}

async fn health() -> Json<LegacyHealthResponse> {
    Json(LegacyHealthResponse {
        message: "Attrition Prediction API is running!".to_string(),
    })
}

/// Legacy prediction payload, echoing the input for auditability
#[derive(Debug, Serialize)]
pub struct LegacyPredictResponse {
    pub input_data: EmployeeProfile,
    pub probability_of_attrition: f64,
    pub recommended_action_level: String,
    pub logreg_prediction_binary: u8,
}

async fn predict(
    State(state): State<Arc<AttritionState>>,
    Json(profile): Json<EmployeeProfile>,
) -> Result<Json<LegacyPredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    let proba = classify(&state, &profile)?;

    let action_level = if proba >= state.action_threshold {
        "HIGH_RISK"
    } else {
        "LOW_RISK"
    };

    Ok(Json(LegacyPredictResponse {
        probability_of_attrition: round_probability(proba),
        recommended_action_level: action_level.to_string(),
        logreg_prediction_binary: u8::from(proba >= 0.5),
        input_data: profile,
    }))
}

/// Pipeline health payload
#[derive(Debug, Serialize)]
pub struct PipelineHealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

async fn pipeline_health(
    State(state): State<Arc<AttritionState>>,
) -> Json<PipelineHealthResponse> {
    Json(PipelineHealthResponse {
        status: "OK".to_string(),
        model_loaded: state.classifier.is_some(),
    })
}

/// Pipeline prediction payload
#[derive(Debug, Serialize)]
pub struct PipelinePredictResponse {
    pub probability_of_attrition: f64,
    pub recommended_risk_level: String,
    pub binary_prediction: u8,
}

async fn pipeline_predict(
    State(state): State<Arc<AttritionState>>,
    Json(profile): Json<EmployeeProfile>,
) -> Result<Json<PipelinePredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    let proba = classify(&state, &profile)?;

    let risk_level = if proba >= state.action_threshold {
        "HIGH_RISK_ACTION_REQUIRED"
    } else {
        "LOW_RISK_MONITOR"
    };

    Ok(Json(PipelinePredictResponse {
        probability_of_attrition: round_probability(proba),
        recommended_risk_level: risk_level.to_string(),
        binary_prediction: u8::from(proba >= 0.5),
    }))
}

/// Shared validate-then-classify step for both surfaces
fn classify(
    state: &AttritionState,
    profile: &EmployeeProfile,
) -> Result<f64, (StatusCode, Json<ErrorResponse>)> {
    let validation = state.validator.validate_profile(profile);
    if !validation.valid {
        return Err(validation_failure(&validation));
    }

    let classifier = state
        .classifier
        .as_ref()
        .ok_or_else(|| inference_failure(InferenceError::ModelUnavailable))?;

    classifier.predict_proba(profile).map_err(inference_failure)
}
