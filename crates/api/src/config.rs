//! Service Configuration

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration shared by the three services.
///
/// Defaults cover local development; `config/<service>.toml` and
/// `WORKFORCE_*` environment variables override them.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Socket address the service binds
    pub bind_addr: String,
    /// Training CSV for the productivity startup fit
    pub data_path: String,
    /// Preprocessor artifact for the attrition service
    pub preprocessor_path: String,
    /// Model artifact for the attrition service
    pub model_path: String,
    /// Combined artifact for the attrition pipeline service
    pub pipeline_path: String,
    /// L2 penalty for the startup ridge fit
    pub ridge_alpha: f64,
    /// Probability threshold for the high-risk action level
    pub action_threshold: f64,
    /// Origins permitted by the CORS layer
    pub allowed_origins: Vec<String>,
}

impl ServiceConfig {
    /// Load configuration for one service, with its own default bind
    /// address so the three services can run side by side out of the box
    pub fn load(service: &str, default_bind: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_addr", default_bind)?
            .set_default("data_path", "data/productivity_train.csv")?
            .set_default("preprocessor_path", "models/attrition_preprocessor.json")?
            .set_default("model_path", "models/attrition_logreg.json")?
            .set_default("pipeline_path", "models/attrition_pipeline.json")?
            .set_default("ridge_alpha", 0.1)?
            .set_default("action_threshold", 0.35)?
            .set_default(
                "allowed_origins",
                vec![
                    "http://localhost:5173".to_string(),
                    "http://127.0.0.1:5173".to_string(),
                    "http://localhost:5174".to_string(),
                    "http://127.0.0.1:5174".to_string(),
                ],
            )?
            .add_source(File::with_name(&format!("config/{service}")).required(false))
            .add_source(Environment::with_prefix("WORKFORCE"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load() {
        let config = ServiceConfig::load("productivity", "0.0.0.0:8000").unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.ridge_alpha, 0.1);
        assert_eq!(config.action_threshold, 0.35);
        assert_eq!(config.allowed_origins.len(), 4);
    }

    #[test]
    fn test_per_service_bind_default() {
        let config = ServiceConfig::load("attrition", "0.0.0.0:8001").unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8001");
    }
}
