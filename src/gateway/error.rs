use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::FACTGUARD_STATUS_HEADER;
use crate::claims::ClaimError;
use crate::pipeline::AnalysisError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Analysis(#[from] AnalysisError),

    #[error("unsupported claim: {0}")]
    UnsupportedClaim(String),

    #[error("knowledge base error: {0}")]
    KnowledgeBase(String),
}

impl From<ClaimError> for GatewayError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::EmptyStatement => GatewayError::InvalidRequest(err.to_string()),
            ClaimError::UnsupportedClaim { statement } => GatewayError::UnsupportedClaim(statement),
            ClaimError::Lookup(e) => GatewayError::KnowledgeBase(e.to_string()),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, factguard_status) = match &self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::Analysis(AnalysisError::InputTooShort { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "input_too_short")
            }
            GatewayError::UnsupportedClaim(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unsupported_claim")
            }
            GatewayError::KnowledgeBase(_) => (StatusCode::BAD_GATEWAY, "knowledge_base_error"),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            FACTGUARD_STATUS_HEADER,
            HeaderValue::from_static(factguard_status),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
