//! Application configuration

pub mod prompts;
pub mod secrets;

use std::env;
use std::path::PathBuf;

pub use prompts::builtin as prompts_builtin;
pub use secrets::{ConfigError, LocalSecrets, SECRETS_FILE};

/// Worker used when nothing overrides it
pub const DEFAULT_WORKER_URL: &str = "https://loreal-chatbot-worker.jnmarsh2005.workers.dev";

/// Marker left in template configs that were never filled in
pub const PLACEHOLDER_MARKER: &str = "REPLACE_ME";

/// Resolved worker endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Configured(String),
    Unconfigured,
}

impl Endpoint {
    /// Classify a resolved URL. Empty or placeholder values disable network calls.
    pub fn from_url(url: &str) -> Self {
        let url = url.trim();
        if url.is_empty() || url.contains(PLACEHOLDER_MARKER) {
            Endpoint::Unconfigured
        } else {
            Endpoint::Configured(url.to_string())
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Endpoint::Configured(url) => Some(url),
            Endpoint::Unconfigured => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Endpoint::Configured(_))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Endpoint,
}

impl Config {
    /// Resolve configuration from `WORKER_URL`, then the secrets file, then the default
    pub fn from_env() -> Result<Self, ConfigError> {
        let secrets_path = env::var("ADVISOR_SECRETS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(SECRETS_FILE));
        let secrets = LocalSecrets::from_file(&secrets_path)?;

        if secrets.is_some() {
            tracing::debug!("Loaded local overrides from {}", secrets_path.display());
        }

        Ok(Self::resolve(env::var("WORKER_URL").ok(), secrets))
    }

    /// First defined override wins, otherwise fall back to [`DEFAULT_WORKER_URL`]
    pub fn resolve(env_url: Option<String>, secrets: Option<LocalSecrets>) -> Self {
        let url = env_url
            .or_else(|| secrets.and_then(|s| s.worker_url))
            .unwrap_or_else(|| DEFAULT_WORKER_URL.to_string());

        Self {
            endpoint: Endpoint::from_url(&url),
        }
    }
}
