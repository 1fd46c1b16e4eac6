//! Attrition Pipeline Service - Main Entry Point
//!
//! The drifted near-duplicate of the attrition service: single combined
//! artifact, R&D department schema, longer risk labels.

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
        "=== Attrition Pipeline Service v{} ===",
        env!("CARGO_PKG_VERSION")
    );

    let config = ServiceConfig::load("attrition-pipeline", "0.0.0.0:8002")?;

    let classifier = match AttritionClassifier::from_pipeline_path(&config.pipeline_path) {
        Ok(classifier) => Some(classifier),
        Err(error) => {
            error!(%error, "could not load pipeline artifact, serving degraded");
            None
        }
    };

    let state = Arc::new(AttritionState::new(
        classifier,
        Validator::new(attrition::pipeline_schema()),
        config.action_threshold,
    ));
    let router = attrition::pipeline_router(state).layer(cors_layer(&config.allowed_origins));

    serve(&config.bind_addr, router).await?;
    Ok(())
}
