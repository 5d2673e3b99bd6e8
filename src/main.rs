//! Beauty Advisor - terminal chat client
//!
//! Forwards each question, together with the whole conversation so far, to a
//! completion worker and prints the reply.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod conversation;
mod core;
mod providers;
mod ui;

use config::Config;
use crate::core::ChatController;
use providers::WorkerClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they don't interleave with the transcript
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "advisor_chat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;

    match config.endpoint.url() {
        Some(url) => tracing::info!("💬 Using worker at {}", url),
        None => tracing::warn!("Worker endpoint not configured, requests are disabled"),
    }

    let controller = ChatController::new(config.endpoint, WorkerClient::new());
    ui::run(controller).await
}
