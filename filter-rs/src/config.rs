use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub artifacts: ArtifactConfig,
    pub training: TrainingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactConfig {
    /// Directory the artifact store writes into
    pub root: String,
    pub vectorizer_name: String,
    pub classifier_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrainingConfig {
    /// Fraction of the dataset held out for evaluation
    pub test_ratio: f64,
    /// Seed for the train/test split shuffle
    pub seed: u64,
    pub learning_rate: f64,
    pub l2: f64,
    pub max_iter: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::FilterError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::FilterError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "0.0.0.0:8000".to_string(),
            },
            artifacts: ArtifactConfig {
                root: "artifacts".to_string(),
                vectorizer_name: "tfidf_vectorizer".to_string(),
                classifier_name: "spam_model".to_string(),
            },
            training: TrainingConfig {
                test_ratio: 0.2,
                seed: 42,
                learning_rate: 0.5,
                l2: 1e-4,
                max_iter: 500,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
