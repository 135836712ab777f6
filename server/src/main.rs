//! Todo summary HTTP server.
//!
//! Reads configuration from the environment (and `.env`), connects the
//! configured store, summary strategy and notifier, then serves the API
//! until Ctrl+C or SIGTERM.
//!
//! # Usage
//!
//! ```bash
//! STORE_BACKEND=memory NOTIFIER=log cargo run -p todo-summary-server
//! curl http://localhost:5000/health
//! ```

mod app;
mod config;

use anyhow::Context;
use config::Config;
use std::io::ErrorKind;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_summary=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Todo Summary server");

    let config = Config::from_env().context("Invalid configuration")?;
    info!(
        store = ?config.store,
        summary = ?config.summary,
        notifier = ?config.notifier,
        "Configuration loaded"
    );

    let state = app::build_state(&config).await?;
    let router = todo_summary_web::build_router(state);

    let addr = config.server.address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            error!(address = %addr, "Port {} is already in use", config.server.port);
            error!("Use a different port (PORT=5001) or stop the process holding it");
            return Err(e).with_context(|| format!("Port {} is already in use", config.server.port));
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to bind {addr}")),
    };

    info!(address = %addr, "Server listening");
    info!("Health check: http://{addr}/health");
    info!("Todos API: http://{addr}/api/todos");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
