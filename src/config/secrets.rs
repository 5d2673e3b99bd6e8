//! Local override file loaded from TOML
//!
//! `secrets.toml` is kept out of version control and lets a developer point
//! the client at their own worker:
//!
//! ```toml
//! worker_url = "https://my-worker.example.workers.dev"
//! ```

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

/// Default file name, relative to the working directory
pub const SECRETS_FILE: &str = "secrets.toml";

/// Values a local secrets file may override
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalSecrets {
    /// Worker endpoint URL
    #[serde(default)]
    pub worker_url: Option<String>,
}

impl LocalSecrets {
    /// Load overrides from a TOML file. A missing file yields `None`.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(Self::from_str(&content)?))
    }

    /// Load overrides from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let secrets: LocalSecrets = toml::from_str(content)?;
        Ok(secrets)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
