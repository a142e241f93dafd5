use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum NamerError {
    #[error("Naming service error: {0}")]
    Naming(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("A naming request is already in flight")]
    Busy,
}

impl From<serde_json::Error> for NamerError {
    fn from(e: serde_json::Error) -> Self {
        NamerError::Serialization(e.to_string())
    }
}
