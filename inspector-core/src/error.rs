#[derive(Debug, thiserror::Error)]
pub enum InspectorError {
    #[error("Unsupported image format: {0}")]
    InputFormat(String),

    #[error("Can't invoke '{model_id}': {cause}")]
    Inference { model_id: String, cause: String },

    #[error("Response stream interrupted: {cause}")]
    StreamInterrupted { cause: String },

    #[error("Classification canceled: display surface closed")]
    Canceled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InspectorError>;
