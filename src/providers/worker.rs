//! Cloudflare Worker client
//!
//! The worker is a thin proxy in front of a completion API. It takes the
//! whole conversation as `{"messages": [...]}` and answers with whatever
//! shape the upstream API produced.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::conversation::Message;

use super::{Exchange, ExchangeError, ReplyShape};

#[derive(Debug, Serialize)]
struct WorkerRequest<'a> {
    messages: &'a [Message],
}

#[derive(Debug, Clone, Default)]
pub struct WorkerClient {
    client: Client,
}

impl WorkerClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Exchange for WorkerClient {
    async fn send(&self, url: &str, messages: &[Message]) -> Result<String, ExchangeError> {
        let body = serde_json::to_vec(&WorkerRequest { messages })?;

        tracing::debug!(url, messages = messages.len(), "Sending conversation to worker");

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExchangeError::Transport {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body)?;

        let shape = ReplyShape::decode(&data);
        if shape == ReplyShape::Unrecognized {
            tracing::warn!("Unrecognized worker reply: {}", body);
        }

        Ok(shape.into_text())
    }
}
