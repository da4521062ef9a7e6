use axum::{
    Form, Json,
    extract::State,
    http::{HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::FACTGUARD_VERDICT_HEADER;
use super::error::GatewayError;
use super::page;
use super::state::HandlerState;
use crate::entities::EntityExtractor;
use crate::pipeline::AnalysisError;
use crate::verification::KnowledgeBase;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ClaimRequest {
    pub statement: String,
}

#[instrument]
pub async fn index_handler() -> Html<String> {
    Html(page::render_form(None, ""))
}

/// Browser form submission. Short input re-renders the form with a warning.
#[instrument(skip(state, form))]
pub async fn analyze_form_handler<E, K>(
    State(state): State<HandlerState<E, K>>,
    Form(form): Form<AnalyzeRequest>,
) -> Html<String>
where
    E: EntityExtractor + 'static,
    K: KnowledgeBase + 'static,
{
    match state.analyzer.analyze(&form.text).await {
        Ok(report) => Html(page::render_report(&form.text, &report)),
        Err(AnalysisError::InputTooShort { words, .. }) => {
            debug!(words, "Form input too short");
            Html(page::render_form(Some(page::TOO_SHORT_WARNING), &form.text))
        }
    }
}

#[instrument(skip(state, request))]
pub async fn analyze_json_handler<E, K>(
    State(state): State<HandlerState<E, K>>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    E: EntityExtractor + 'static,
    K: KnowledgeBase + 'static,
{
    let request: AnalyzeRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {e}")))?;

    let report = state.analyzer.analyze(&request.text).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        FACTGUARD_VERDICT_HEADER,
        HeaderValue::from_static(report.decision.verdict.as_str()),
    );

    Ok((headers, Json(report)).into_response())
}

#[instrument(skip(state, request))]
pub async fn claim_handler<E, K>(
    State(state): State<HandlerState<E, K>>,
    Json(request): Json<serde_json::Value>,
) -> Result<Response, GatewayError>
where
    E: EntityExtractor + 'static,
    K: KnowledgeBase + 'static,
{
    let request: ClaimRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {e}")))?;

    let outcome = state.claims.check(&request.statement).await?;
    Ok(Json(outcome).into_response())
}
