//! ShareHub - profile API and resource-sharing client shell
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use sharehub_api::utils::logging::init_tracing;
use sharehub_api::{serve, AppContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before the config loader reads the environment
    let dotenv = dotenvy::dotenv();

    let config = sharehub_infra::config::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env file loaded"),
    }

    let ctx = AppContext::new_with_config(config)
        .await
        .context("failed to initialise application context")?;

    serve(Arc::new(ctx)).await
}
