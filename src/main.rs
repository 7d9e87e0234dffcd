//! Storefront server binary
//!
//! Seeds the in-memory stores with the demo fixtures and serves the REST
//! API. Configuration is optional: pass a YAML path via `BUYFLEX_CONFIG`
//! or fall back to the built-in defaults.

use anyhow::{Context, Result};
use buyflex::config::StoreConfig;
use buyflex::server::{AppState, serve};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("BUYFLEX_CONFIG") {
        Ok(path) => StoreConfig::from_yaml_file(&path)
            .with_context(|| format!("failed to load config from {path}"))?,
        Err(_) => StoreConfig::default(),
    };

    tracing::info!(bind_addr = %config.bind_addr, "starting storefront");
    let state = AppState::seeded(config)?;
    serve(state).await
}
