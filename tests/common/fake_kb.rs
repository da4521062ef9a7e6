//! In-process stand-in for the Wikipedia REST summary endpoint.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Path prefix the fake serves under, so clients must honour a non-root base.
pub const API_ROOT: &str = "/api/rest_v1";

#[derive(Debug, Clone)]
pub enum FakePage {
    Standard(String),
    Disambiguation,
    Status(u16),
    Slow(Duration, String),
}

#[derive(Default)]
struct FakeKbState {
    pages: HashMap<String, FakePage>,
    requests: Mutex<Vec<(String, String)>>,
}

#[derive(Default)]
pub struct FakeKbBuilder {
    pages: HashMap<String, FakePage>,
}

impl FakeKbBuilder {
    pub fn page(mut self, title: &str, extract: &str) -> Self {
        self.pages
            .insert(title.to_string(), FakePage::Standard(extract.to_string()));
        self
    }

    pub fn disambiguation(mut self, title: &str) -> Self {
        self.pages
            .insert(title.to_string(), FakePage::Disambiguation);
        self
    }

    pub fn status(mut self, title: &str, status: u16) -> Self {
        self.pages.insert(title.to_string(), FakePage::Status(status));
        self
    }

    pub fn slow(mut self, title: &str, delay: Duration, extract: &str) -> Self {
        self.pages.insert(
            title.to_string(),
            FakePage::Slow(delay, extract.to_string()),
        );
        self
    }

    pub async fn spawn(self) -> FakeKnowledgeBase {
        let state = Arc::new(FakeKbState {
            pages: self.pages,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route(
                &format!("{API_ROOT}/page/summary/{{title}}"),
                get(summary_handler),
            )
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .unwrap();
        });

        FakeKnowledgeBase {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }
}

pub struct FakeKnowledgeBase {
    pub addr: SocketAddr,
    state: Arc<FakeKbState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FakeKnowledgeBase {
    pub fn builder() -> FakeKbBuilder {
        FakeKbBuilder::default()
    }

    /// Base URL to hand to `WikipediaClient::new`.
    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, API_ROOT)
    }

    /// Titles requested so far (underscores already turned back into spaces).
    pub fn requested_titles(&self) -> Vec<String> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .map(|(title, _)| title.clone())
            .collect()
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, ua)| ua.clone())
            .collect()
    }
}

impl Drop for FakeKnowledgeBase {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn summary_handler(
    State(state): State<Arc<FakeKbState>>,
    Path(raw_title): Path<String>,
    headers: HeaderMap,
) -> Response {
    let title = raw_title.replace('_', " ");
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state
        .requests
        .lock()
        .unwrap()
        .push((title.clone(), user_agent));

    match state.pages.get(&title).cloned() {
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "type": "https://mediawiki.org/wiki/HyperSwitch/errors/not_found" })),
        )
            .into_response(),
        Some(FakePage::Standard(extract)) => standard(&title, extract),
        Some(FakePage::Disambiguation) => Json(serde_json::json!({
            "type": "disambiguation",
            "title": title,
            "extract": format!("{title} may refer to:"),
        }))
        .into_response(),
        Some(FakePage::Status(status)) => StatusCode::from_u16(status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Some(FakePage::Slow(delay, extract)) => {
            tokio::time::sleep(delay).await;
            standard(&title, extract)
        }
    }
}

fn standard(title: &str, extract: String) -> Response {
    Json(serde_json::json!({
        "type": "standard",
        "title": title,
        "extract": extract,
    }))
    .into_response()
}
