//! Attrition Prediction Service - Main Entry Point

use anyhow::Result;
use api::config::ServiceConfig;
use api::routes::attrition;
use api::{cors_layer, init_logging, serve, AttritionState};
use data_validator::Validator;
use inference_engine::AttritionClassifier;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!(
        "=== Attrition Prediction Service v{} ===",
        env!("CARGO_PKG_VERSION")
    );

    let config = ServiceConfig::load("attrition", "0.0.0.0:8001")?;

    let classifier = match AttritionClassifier::from_artifact_paths(
        &config.preprocessor_path,
        &config.model_path,
    ) {
        Ok(classifier) => Some(classifier),
        Err(error) => {
            error!(%error, "could not load model artifacts, serving degraded");
            None
        }
    };

    let state = Arc::new(AttritionState::new(
        classifier,
        Validator::default(),
        config.action_threshold,
    ));
    let router = attrition::router(state).layer(cors_layer(&config.allowed_origins));

    serve(&config.bind_addr, router).await?;
    Ok(())
}
