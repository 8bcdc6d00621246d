//! Liveness probe mounted at `/health`, outside the `/api` tree.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when every backing store is usable, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// The card database answers queries.
    pub database: bool,
    /// The upload directory exists, so uploads and `/uploads` can work.
    pub uploads: bool,
}

/// GET /health
///
/// Answers 503 while either store is unusable so load balancers can drain
/// the instance.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = flashcard_db::health_check(&state.pool).await.is_ok();
    let uploads = tokio::fs::metadata(state.files.root())
        .await
        .is_ok_and(|m| m.is_dir());

    let (code, status) = if database && uploads {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
        uploads,
    };
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
