//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS
//! - Tracing middleware
//! - Optional static asset directory
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::models::DateComparison;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// Directory of static assets served for unmatched paths
    pub public_dir: Option<PathBuf>,

    /// How log `from`/`to` bounds are compared
    pub date_comparison: DateComparison,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            public_dir: None,
            date_comparison: DateComparison::default(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub date_comparison: DateComparison,
}

impl AppState {
    pub fn new(pool: SqlitePool, date_comparison: DateComparison) -> Self {
        Self {
            pool,
            date_comparison,
        }
    }
}

/// Build the application router with all routes.
pub fn build_router(state: AppState, public_dir: Option<PathBuf>) -> Router {
    let mut app = Router::new()
        .merge(routes::index::router())
        .merge(routes::health::router())
        .merge(routes::users::router())
        .merge(routes::exercises::router());

    if let Some(dir) = public_dir {
        tracing::info!(path = %dir.display(), "Serving static files");
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// The pool is owned by the server from here on and is closed after the
/// listener shuts down.
///
/// # Example
///
/// ```ignore
/// let pool = open_pool("exercise-tracker.db").await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: SqlitePool, config: ServerConfig) -> Result<(), ServerError> {
    tracing::info!(date_comparison = %config.date_comparison, "Log date comparison");
    let state = AppState::new(pool.clone(), config.date_comparison);
    let app = build_router(state, config.public_dir);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Your app is listening on {}", listener.local_addr()?);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
