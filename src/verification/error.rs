use std::time::Duration;

use thiserror::Error;

/// Knowledge-base lookup failures.
///
/// These never escape [`super::FactVerifier`]; they are logged and read as
/// "not verified".
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("knowledge base request failed: {0}")]
    Network(String),

    #[error("knowledge base lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("knowledge base returned HTTP {status} for '{title}'")]
    UnexpectedStatus { title: String, status: u16 },

    #[error("failed to parse knowledge base response: {0}")]
    Parse(String),

    #[error("invalid knowledge base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
