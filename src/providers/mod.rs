//! Completion worker integration

mod reply;
mod worker;

use async_trait::async_trait;
use thiserror::Error;

use crate::conversation::Message;

pub use reply::ReplyShape;
pub use worker::WorkerClient;

#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The worker answered with a non-2xx status
    #[error("Worker error: {status} {status_text}")]
    Transport { status: u16, status_text: String },

    /// Network failure or an unreadable body
    #[error("{0}")]
    Communication(String),
}

impl From<reqwest::Error> for ExchangeError {
    fn from(e: reqwest::Error) -> Self {
        ExchangeError::Communication(e.to_string())
    }
}

impl From<serde_json::Error> for ExchangeError {
    fn from(e: serde_json::Error) -> Self {
        ExchangeError::Communication(format!("Failed to parse response: {}", e))
    }
}

/// One request/response round trip with a completion endpoint.
///
/// Implementations never mutate the conversation; the caller appends the
/// returned text itself.
#[async_trait]
pub trait Exchange: Send + Sync {
    /// Send the full message history and return the assistant text
    async fn send(&self, url: &str, messages: &[Message]) -> Result<String, ExchangeError>;
}
