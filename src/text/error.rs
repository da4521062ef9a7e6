use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("failed to load stopwords from {path}: {reason}")]
    StopwordsLoadFailed { path: PathBuf, reason: String },

    #[error("stopword file {path} contains no words")]
    EmptyStopwords { path: PathBuf },
}
