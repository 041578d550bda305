//! Journey server binary
//!
//! Parses the command line, opens the store and serves the HTTP API until
//! Ctrl-C.

mod args;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use journey_server::{build_router, AppState};
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.service_config()?;

    let state = AppState::bootstrap(config)
        .await
        .context("Failed to initialize store")?;
    info!(
        "using database {}",
        state.store.database_path().display()
    );

    let listener = TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("Failed to bind {}", args.listen))?;
    info!("Journey listening on {}", args.listen);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Journey stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
    }
}
