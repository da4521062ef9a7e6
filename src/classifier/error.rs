use std::path::PathBuf;
use thiserror::Error;

use crate::text::TextError;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load classifier model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("invalid model artifact: {reason}")]
    InvalidArtifact { reason: String },

    #[error("invalid classifier configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("stopwords: {0}")]
    Stopwords(#[from] TextError),
}

impl From<std::io::Error> for ClassifierError {
    fn from(err: std::io::Error) -> Self {
        ClassifierError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClassifierError {
    fn from(err: serde_json::Error) -> Self {
        ClassifierError::InvalidArtifact {
            reason: err.to_string(),
        }
    }
}
