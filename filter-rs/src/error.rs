use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty corpus: no documents or no distinct tokens to fit on")]
    EmptyCorpus,

    #[error("degenerate dataset: {0}")]
    DegenerateDataset(String),

    #[error("artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("model not ready: {0}")]
    ModelNotReady(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
