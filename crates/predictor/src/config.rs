//! Pipeline Configuration

use ::config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Path to the ONNX model artifact
    pub model_path: String,

    /// Emit logs as JSON
    pub log_json: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model_path: "v2.onnx".to_string(),
            log_json: false,
        }
    }
}

impl PipelineConfig {
    /// Load configuration: defaults, then an optional `alloy-pipeline` config
    /// file, then `ALLOY_*` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("model_path", defaults.model_path)?
            .set_default("log_json", defaults.log_json)?
            .add_source(File::with_name("alloy-pipeline").required(false))
            .add_source(Environment::with_prefix("ALLOY"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.model_path, "v2.onnx");
        assert!(!config.log_json);
    }
}
