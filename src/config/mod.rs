//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `FACTGUARD_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::classifier::ClassifierConfig;
use crate::constants::{DEFAULT_LOOKUP_CONCURRENCY, DEFAULT_LOOKUP_TIMEOUT_MS};
use crate::verification::VerifierConfig;

/// Default knowledge-base endpoint used when `FACTGUARD_KB_URL` is not set.
pub const DEFAULT_KB_URL: &str = "https://en.wikipedia.org/api/rest_v1";

/// Default User-Agent sent to the knowledge base.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "factguard/",
    env!("CARGO_PKG_VERSION"),
    " (news credibility checker)"
);

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `FACTGUARD_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Exported classifier artifact (JSON). Unset runs the classifier in stub mode.
    pub model_path: Option<PathBuf>,

    /// Stopword list, one word per line. Unset uses the built-in English list.
    pub stopwords_path: Option<PathBuf>,

    /// Knowledge-base REST root. Default: [`DEFAULT_KB_URL`].
    pub kb_url: String,

    /// Per-lookup timeout. Default: 5 s.
    pub lookup_timeout: Duration,

    /// Concurrent lookups per analysis. Default: `4`.
    pub lookup_concurrency: usize,

    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            model_path: None,
            stopwords_path: None,
            kb_url: DEFAULT_KB_URL.to_string(),
            lookup_timeout: Duration::from_millis(DEFAULT_LOOKUP_TIMEOUT_MS),
            lookup_concurrency: DEFAULT_LOOKUP_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "FACTGUARD_PORT";
    pub const ENV_BIND_ADDR: &'static str = "FACTGUARD_BIND_ADDR";
    pub const ENV_MODEL_PATH: &'static str = "FACTGUARD_MODEL_PATH";
    pub const ENV_STOPWORDS_PATH: &'static str = "FACTGUARD_STOPWORDS_PATH";
    pub const ENV_KB_URL: &'static str = "FACTGUARD_KB_URL";
    pub const ENV_LOOKUP_TIMEOUT_MS: &'static str = "FACTGUARD_LOOKUP_TIMEOUT_MS";
    pub const ENV_LOOKUP_CONCURRENCY: &'static str = "FACTGUARD_LOOKUP_CONCURRENCY";
    pub const ENV_USER_AGENT: &'static str = "FACTGUARD_USER_AGENT";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let stopwords_path = Self::parse_optional_path_from_env(Self::ENV_STOPWORDS_PATH);
        let kb_url = Self::parse_string_from_env(Self::ENV_KB_URL, defaults.kb_url);
        let lookup_timeout = Duration::from_millis(Self::parse_number_from_env(
            Self::ENV_LOOKUP_TIMEOUT_MS,
            DEFAULT_LOOKUP_TIMEOUT_MS,
        )?);
        let lookup_concurrency = Self::parse_number_from_env(
            Self::ENV_LOOKUP_CONCURRENCY,
            defaults.lookup_concurrency,
        )?;
        let user_agent = Self::parse_string_from_env(Self::ENV_USER_AGENT, defaults.user_agent);

        Ok(Self {
            port,
            bind_addr,
            model_path,
            stopwords_path,
            kb_url,
            lookup_timeout,
            lookup_concurrency,
            user_agent,
        })
    }

    /// Validates paths, the knowledge-base URL and lookup limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            Self::require_file(path)?;
        }
        if let Some(ref path) = self.stopwords_path {
            Self::require_file(path)?;
        }

        let url = reqwest::Url::parse(&self.kb_url).map_err(|e| ConfigError::InvalidUrl {
            value: self.kb_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                value: self.kb_url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if self.lookup_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_LOOKUP_TIMEOUT_MS,
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.lookup_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_LOOKUP_CONCURRENCY,
                reason: "must be at least 1".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_USER_AGENT,
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn classifier_config(&self) -> ClassifierConfig {
        let config = match self.model_path {
            Some(ref path) => ClassifierConfig::new(path.clone()),
            None => ClassifierConfig::stub(),
        };
        match self.stopwords_path {
            Some(ref path) => config.with_stopwords(path.clone()),
            None => config,
        }
    }

    pub fn verifier_config(&self) -> VerifierConfig {
        VerifierConfig {
            lookup_timeout: self.lookup_timeout,
            concurrency: self.lookup_concurrency,
        }
    }

    fn require_file(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(ConfigError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(default)
    }

    fn parse_number_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    }
}
