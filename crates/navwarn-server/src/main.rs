//! S-124 export service. Serves navigational warnings as S-124 GML.
//!
//! Messages are loaded once at startup from a JSON file into an in-memory
//! repository. Each request maps and marshals the message afresh.

mod config;
mod error;
mod routes;

use std::sync::Arc;

use anyhow::Context;
use navwarn_s124::{InMemoryRepository, S124Service};
use tracing::info;

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let json = std::fs::read_to_string(&config.messages_file)
        .with_context(|| format!("failed to read {}", config.messages_file.display()))?;
    let repository = InMemoryRepository::from_json(&json)
        .with_context(|| format!("failed to parse {}", config.messages_file.display()))?;
    info!(
        messages = repository.len(),
        file = %config.messages_file.display(),
        "messages loaded"
    );
    info!(
        country = %config.s124.country,
        schema_dir = %config.s124.schema_dir.display(),
        "S-124 export configured"
    );

    let service = Arc::new(S124Service::new(config.s124, repository));
    let app = routes::router(service);

    let addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(address = %addr, "S-124 service listening");
    axum::serve(listener, app).await?;
    Ok(())
}
