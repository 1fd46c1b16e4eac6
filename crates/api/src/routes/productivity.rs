//! Productivity Service Routes

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use feature_engine::{DerivedFeatures, WorkObservation};
use serde::Serialize;
use std::sync::Arc;

use crate::{inference_failure, validation_failure, ErrorResponse, ProductivityState};
use inference_engine::InferenceError;

/// Build the productivity service router
pub fn router(state: Arc<ProductivityState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/predict", post(predict))
        .with_state(state)
}

/// Health payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

async fn health(State(state): State<Arc<ProductivityState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        model_loaded: state.pipeline.is_some(),
    })
}

/// Prediction payload: the score plus the engineered features it was
/// computed from
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub predicted_productivity_score: f64,
    pub engineered_features: DerivedFeatures,
}

async fn predict(
    State(state): State<Arc<ProductivityState>>,
    Json(observation): Json<WorkObservation>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    let validation = state.validator.validate_observation(&observation);
    if !validation.valid {
        return Err(validation_failure(&validation));
    }

    let pipeline = state
        .pipeline
        .as_ref()
        .ok_or_else(|| inference_failure(InferenceError::ModelUnavailable))?;

    let prediction = pipeline.predict(&observation);
    Ok(Json(PredictResponse {
        predicted_productivity_score: prediction.score,
        engineered_features: prediction.features,
    }))
}
