//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Schema migrations
/// - Code generator from `CHARSET` / `CODE_LENGTH`
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    persistence::migrate(&pool)
        .await
        .context("Failed to migrate")?;

    let generator = CodeGenerator::new(&config.charset, config.code_length)
        .context("Invalid code generator settings")?;

    let state = AppState::new(
        Arc::new(pool),
        Arc::new(generator),
        config.public_base_url.clone(),
    );

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr.as_str())
        .await
        .with_context(|| format!("Failed to bind to '{}'", config.listen_addr))?;
    let addr = listener
        .local_addr()
        .context("Failed to read bound address")?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
