//! Liveness and readiness of the project store.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the project store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Round trip of the ping query in milliseconds, when it succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_latency_ms: Option<u64>,
    /// Why the ping query failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_error: Option<String>,
}

/// GET /health
///
/// Answers 200 while the database is reachable and 503 otherwise, so load
/// balancers stop routing tree requests that would fail anyway.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let started = Instant::now();
    let ping = consult_db::health_check(&state.pool).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let response = match ping {
        Ok(()) => HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            db_healthy: true,
            db_latency_ms: Some(elapsed_ms),
            db_error: None,
        },
        Err(err) => {
            tracing::warn!(error = %err, elapsed_ms, "Health check could not reach the database");
            HealthResponse {
                status: "degraded",
                version: env!("CARGO_PKG_VERSION"),
                db_healthy: false,
                db_latency_ms: None,
                db_error: Some(classify(&err).to_string()),
            }
        }
    };

    let code = if response.db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(response))
}

/// Coarse failure reason; connection details stay in the logs.
fn classify(err: &sqlx::Error) -> &'static str {
    match err {
        sqlx::Error::PoolTimedOut => "timeout",
        sqlx::Error::PoolClosed => "closed",
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) => "unreachable",
        _ => "query_failed",
    }
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
