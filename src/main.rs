//! factguard entrypoint: interactive checker, one-shot analysis, claim checks
//! and the HTTP gateway.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tokio::io::BufReader;
use tokio::net::TcpListener;
use tokio::signal;

use factguard::claims::ClaimChecker;
use factguard::classifier::MlClassifier;
use factguard::cli::{TOO_SHORT_MESSAGE, render_claim, render_report, run_interactive};
use factguard::config::Config;
use factguard::entities::PatternExtractor;
use factguard::gateway::{HandlerState, create_router_with_state};
use factguard::pipeline::{AnalysisError, Analyzer};
use factguard::verification::{FactVerifier, WikipediaClient};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

type AppAnalyzer = Analyzer<PatternExtractor, Arc<WikipediaClient>>;
type AppClaimChecker = ClaimChecker<Arc<WikipediaClient>>;

#[derive(Debug, Parser)]
#[command(name = "factguard", version, about = "Advisory fake-news triage")]
struct Cli {
    /// Probe a running server's /healthz and exit with 0 (healthy) or 1.
    #[arg(long)]
    health_check: bool,

    /// Classifier artifact; overrides FACTGUARD_MODEL_PATH.
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive loop: one article per line, `exit` quits (default).
    Check,

    /// Analyze a single text given inline, from a file, or on stdin.
    Analyze {
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        text: Option<String>,

        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP gateway.
    Serve {
        /// Overrides FACTGUARD_PORT.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Check an office-holder statement, e.g. "Macron is the president of France".
    Claim {
        statement: String,

        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.health_check {
        return Ok(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env()?;
    if let Some(model) = cli.model {
        config.model_path = Some(model);
    }
    if let Some(Command::Serve { port: Some(port) }) = cli.command {
        config.port = port;
    }
    config.validate()?;

    let (analyzer, claims) = build_components(&config)?;

    match cli.command.unwrap_or(Command::Check) {
        Command::Check => {
            let stdin = BufReader::new(tokio::io::stdin());
            let analyzed = run_interactive(analyzer.as_ref(), stdin, tokio::io::stdout()).await?;
            tracing::debug!(analyzed, "Interactive session finished");
            Ok(ExitCode::SUCCESS)
        }
        Command::Analyze { file, text, json } => {
            let text = read_input(file, text).await?;
            match analyzer.analyze(&text).await {
                Ok(report) if json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                    Ok(ExitCode::SUCCESS)
                }
                Ok(report) => {
                    print!("{}", render_report(&report));
                    Ok(ExitCode::SUCCESS)
                }
                Err(AnalysisError::InputTooShort { .. }) => {
                    eprintln!("{TOO_SHORT_MESSAGE}");
                    Ok(ExitCode::from(2))
                }
            }
        }
        Command::Claim { statement, json } => {
            let outcome = claims.check(&statement).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print!("{}", render_claim(&outcome));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Serve { .. } => {
            serve(&config, analyzer, claims).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_components(config: &Config) -> anyhow::Result<(Arc<AppAnalyzer>, Arc<AppClaimChecker>)> {
    let classifier_config = config.classifier_config();
    let stopwords = Arc::new(classifier_config.load_stopwords()?);
    let classifier = Arc::new(MlClassifier::load_with_stopwords(
        classifier_config,
        Arc::clone(&stopwords),
    )?);
    tracing::info!(
        mode = classifier.mode().as_str(),
        fingerprint = classifier.fingerprint().unwrap_or("-"),
        "Classifier ready"
    );
    if !classifier.is_model_loaded() {
        tracing::warn!("No FACTGUARD_MODEL_PATH configured, ML prediction will stay UNCERTAIN");
    }

    let knowledge_base = Arc::new(WikipediaClient::new(
        &config.kb_url,
        &config.user_agent,
        config.lookup_timeout,
    )?);

    let verifier = FactVerifier::with_config(Arc::clone(&knowledge_base), config.verifier_config());
    let analyzer = Analyzer::new(classifier, PatternExtractor::new(stopwords), verifier);
    let claims = ClaimChecker::new(knowledge_base);

    Ok((Arc::new(analyzer), Arc::new(claims)))
}

async fn read_input(file: Option<PathBuf>, text: Option<String>) -> anyhow::Result<String> {
    if let Some(path) = file {
        return Ok(tokio::fs::read_to_string(&path).await?);
    }
    if let Some(text) = text {
        return Ok(text);
    }

    use tokio::io::AsyncReadExt;
    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await?;
    Ok(buf)
}

async fn serve(
    config: &Config,
    analyzer: Arc<AppAnalyzer>,
    claims: Arc<AppClaimChecker>,
) -> anyhow::Result<()> {
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        kb_url = %config.kb_url,
        "factguard starting"
    );

    let app = create_router_with_state(HandlerState::new(analyzer, claims));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("factguard shutdown complete");
    Ok(())
}

async fn run_health_check() -> ExitCode {
    let port = std::env::var(Config::ENV_PORT)
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return ExitCode::FAILURE;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
