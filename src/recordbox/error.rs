use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("{0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt store at {}: {message}", .path.display())]
    Corrupt { path: PathBuf, message: String },

    #[error("Invalid item: {0}")]
    InvalidItem(String),
}

impl RecordError {
    pub fn usage(message: impl Into<String>) -> Self {
        RecordError::Usage(message.into())
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
