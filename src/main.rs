mod models;
mod handlers;
mod services;
mod middleware;
mod config;
mod errors;
mod guard;
mod notify;
mod routes;
mod session;
mod state;
mod views;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use crate::{
    config::Config,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Seed the in-memory store
    let state = AppState::new(config).context("Failed to initialize ticket store")?;

    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Failed to start server")?;

    Ok(())
}
