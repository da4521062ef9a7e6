//! Test server harness.

use factguard::claims::ClaimChecker;
use factguard::classifier::{FixedProbabilities, MlClassifier};
use factguard::entities::PatternExtractor;
use factguard::gateway::{HandlerState, create_router_with_state};
use factguard::pipeline::Analyzer;
use factguard::verification::{FactVerifier, VerifierConfig, WikipediaClient};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub port: u16,
    /// Knowledge-base REST root, usually a `FakeKnowledgeBase::base_url()`.
    pub kb_url: String,
    pub fake_probability: f32,
    pub real_probability: f32,
    pub lookup_timeout: Duration,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            port: 0,
            kb_url: "http://127.0.0.1:9/api".to_string(),
            fake_probability: 0.5,
            real_probability: 0.5,
            lookup_timeout: Duration::from_secs(2),
        }
    }
}

impl TestServerConfig {
    pub fn with_kb(mut self, kb_url: impl Into<String>) -> Self {
        self.kb_url = kb_url.into();
        self
    }

    pub fn with_probabilities(mut self, fake: f32, real: f32) -> Self {
        self.fake_probability = fake;
        self.real_probability = real;
        self
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Spawns the gateway with the real extractor and Wikipedia client, and a
/// fixed-probability classifier.
///
/// Point `kb_url` at a `FakeKnowledgeBase` to control lookups.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let knowledge_base = Arc::new(
        WikipediaClient::new(&config.kb_url, "factguard-tests/0.1", config.lookup_timeout)
            .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?,
    );

    let classifier = Arc::new(MlClassifier::with_model(Box::new(FixedProbabilities::new(
        config.fake_probability,
        config.real_probability,
    ))));

    let verifier = FactVerifier::with_config(
        Arc::clone(&knowledge_base),
        VerifierConfig {
            lookup_timeout: config.lookup_timeout,
            concurrency: 4,
        },
    );
    let analyzer = Analyzer::new(classifier, PatternExtractor::default(), verifier);
    let claims = ClaimChecker::new(knowledge_base);

    let app = create_router_with_state(HandlerState::new(Arc::new(analyzer), Arc::new(claims)));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
