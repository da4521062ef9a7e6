use thiserror::Error;

use crate::verification::LookupError;

#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("statement is empty")]
    EmptyStatement,

    #[error("fact type not supported: '{statement}'")]
    UnsupportedClaim { statement: String },

    #[error("knowledge base lookup failed: {0}")]
    Lookup(#[from] LookupError),
}
