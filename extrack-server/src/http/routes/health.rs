//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /health - 503 when the store can't answer a trivial query
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let db_ok = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();

    let (code, status, database) = if db_ok {
        (StatusCode::OK, "ok", "ok")
    } else {
        tracing::warn!("health check: database unavailable");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_pool;
    use crate::models::DateComparison;

    async fn state() -> Arc<AppState> {
        let pool = open_memory_pool().await.unwrap();
        Arc::new(AppState::new(pool, DateComparison::default()))
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (code, Json(body)) = health(State(state().await)).await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.database, "ok");
    }

    #[tokio::test]
    async fn closed_pool_is_degraded() {
        let state = state().await;
        state.pool.close().await;

        let (code, Json(body)) = health(State(state)).await;
        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
    }
}
