//! Workforce Prediction API Services
//!
//! Routers and startup plumbing shared by the three prediction services.
//! Model state is built once before the listener binds and never written
//! afterwards, so handlers share it through a plain `Arc` with no lock.

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::{Json, Router};
use data_validator::{ValidationResult, Validator};
use inference_engine::{AttritionClassifier, InferenceError, ProductivityPipeline};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
pub mod routes;

/// State for the productivity service.
///
/// `pipeline` is `None` when the startup fit failed; the service then
/// answers every prediction with a structured error instead of exiting.
pub struct ProductivityState {
    pub pipeline: Option<ProductivityPipeline>,
    pub validator: Validator,
}

impl ProductivityState {
    /// Wrap an optional fitted pipeline with the default schema validator
    pub fn new(pipeline: Option<ProductivityPipeline>) -> Self {
        Self {
            pipeline,
            validator: Validator::default(),
        }
    }
}

/// State for either attrition service
pub struct AttritionState {
    pub classifier: Option<AttritionClassifier>,
    pub validator: Validator,
    /// Probability threshold for the high-risk action level
    pub action_threshold: f64,
}

impl AttritionState {
    pub fn new(
        classifier: Option<AttritionClassifier>,
        validator: Validator,
        action_threshold: f64,
    ) -> Self {
        Self {
            classifier,
            validator,
            action_threshold,
        }
    }
}

/// JSON error body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

/// 422 response carrying every validation violation
pub fn validation_failure(result: &ValidationResult) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: "Validation failed".to_string(),
            details: result.errors.iter().map(ToString::to_string).collect(),
        }),
    )
}

/// Map an inference error to a structured response.
///
/// A missing model is a degraded-service condition (503); anything else
/// inside the scale/predict step is a 500. Either way the process keeps
/// serving.
pub fn inference_failure(error: InferenceError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match error {
        InferenceError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!(%error, "prediction request failed");
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            details: Vec::new(),
        }),
    )
}

/// CORS layer permitting the fixed allow-list of development origins
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Bind and serve a router until the process is stopped
pub async fn serve(addr: &str, router: Router) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, router).await
}
