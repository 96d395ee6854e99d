//! Confidence Index - quiz scoring for a men's health funnel.
//!
//! # API Endpoints
//!
//! - `POST /confidence-index` - Score quiz answers
//! - `POST /confidence-index/report` - Score quiz answers and render a text report
//! - `GET /quiz/fields` - List scored fields and their options
//! - `GET /health` - Health check

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use confidence_index::api;
use confidence_index::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Quiz answers include names and emails, so request bodies are never
    // logged at any level.
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("confidence_index=info".parse()?))
        .init();

    let config = Config::from_env()?;
    let addr = config.socket_addr();

    info!(%addr, "Starting confidence index server");

    let app = api::router();
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, "Confidence index is listening");

    axum::serve(listener, app).await?;

    Ok(())
}
