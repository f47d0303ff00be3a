//! vocative-server: HTTP front end for the vocative engine.
//!
//! Reads config from flags or env vars:
//!   HOST - listen address (default: 0.0.0.0)
//!   PORT - listen port (default: 8001)
//!   RUST_LOG - log filter (default: info,vocative=debug,tower_http=debug)

use std::future::pending;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vocative::VocativeService;
use vocative_server::{AppState, ServerConfig, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vocative=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::parse();

    // Bad dictionary data must stop startup, not be silently overwritten.
    let service = VocativeService::polish()
        .inspect_err(|e| error!(error = %e, "name dictionary failed validation"))?;
    info!(
        names = service.inflector().dictionary().len(),
        "name dictionary loaded"
    );

    let app = build_router(AppState::new(service));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!("vocative-server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        pending::<()>().await;
    }
    info!("shutdown signal received");
}
