//! Productivity Prediction Service - Main Entry Point

use anyhow::Result;
use api::config::ServiceConfig;
use api::routes::productivity;
use api::{cors_layer, init_logging, serve, ProductivityState};
use dataset::TrainingSet;
use inference_engine::ProductivityPipeline;
use std::sync::Arc;
use tracing::{error, info};

/// Load the training CSV and fit the scaler + ridge pipeline
fn fit_pipeline(config: &ServiceConfig) -> Result<ProductivityPipeline> {
    let training = TrainingSet::from_csv_path(&config.data_path)?;
    Ok(ProductivityPipeline::fit(&training, config.ridge_alpha)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    info!(
        "=== Productivity Prediction Service v{} ===",
        env!("CARGO_PKG_VERSION")
    );

    let config = ServiceConfig::load("productivity", "0.0.0.0:8000")?;

    // A failed fit degrades the service instead of stopping it: requests
    // get a structured ModelUnavailable error until the data is fixed.
    let pipeline = match fit_pipeline(&config) {
        Ok(pipeline) => Some(pipeline),
        Err(error) => {
            error!(%error, "could not initialize productivity model, serving degraded");
            None
        }
    };

    let state = Arc::new(ProductivityState::new(pipeline));
    let router = productivity::router(state).layer(cors_layer(&config.allowed_origins));

    serve(&config.bind_addr, router).await?;
    Ok(())
}
