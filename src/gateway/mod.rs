//! HTTP gateway (Axum): browser form, JSON API and probes.
//!
//! - `GET /` and `POST /analyze` serve the HTML form.
//! - `POST /v1/analyze` returns the [`crate::pipeline::AnalysisReport`] as JSON.
//! - `POST /v1/claim` checks an office-holder statement.
//! - `GET /healthz` and `GET /ready` are liveness and readiness probes.

pub mod error;
pub mod handler;
pub mod page;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::{ErrorResponse, GatewayError};
pub use handler::{analyze_form_handler, analyze_json_handler, claim_handler, index_handler};
pub use state::HandlerState;

use crate::entities::EntityExtractor;
use crate::verification::KnowledgeBase;

/// Response header carrying a short status code (`ok`, `input_too_short`, ...).
pub const FACTGUARD_STATUS_HEADER: &str = "x-factguard-status";

/// Response header carrying the final verdict of a JSON analysis.
pub const FACTGUARD_VERDICT_HEADER: &str = "x-factguard-verdict";

pub fn create_router_with_state<E, K>(state: HandlerState<E, K>) -> Router
where
    E: EntityExtractor + 'static,
    K: KnowledgeBase + 'static,
{
    Router::new()
        .route("/", get(index_handler))
        .route("/analyze", post(analyze_form_handler))
        .route("/v1/analyze", post(analyze_json_handler))
        .route("/v1/claim", post(claim_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub classifier: &'static str,
    pub classifier_mode: &'static str,
    pub model_fingerprint: Option<String>,
    pub knowledge_base: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(FACTGUARD_STATUS_HEADER, HeaderValue::from_static("ok"));

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

/// Always ready once serving; stub mode is reported, not treated as a failure.
#[tracing::instrument(skip(state))]
pub async fn ready_handler<E, K>(State(state): State<HandlerState<E, K>>) -> Response
where
    E: EntityExtractor + 'static,
    K: KnowledgeBase + 'static,
{
    let classifier = state.analyzer.classifier();

    let components = ComponentStatus {
        http: "ready",
        classifier: "ready",
        classifier_mode: classifier.mode().as_str(),
        model_fingerprint: classifier.fingerprint().map(str::to_string),
        knowledge_base: "configured",
    };

    let mut headers = HeaderMap::new();
    headers.insert(FACTGUARD_STATUS_HEADER, HeaderValue::from_static("ok"));

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
