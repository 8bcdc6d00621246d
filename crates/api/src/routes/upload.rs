//! Route definitions for uploads, mounted at `/api/upload`.
//!
//! Uploaded files are served back by the static file service mounted at
//! `/uploads` in [`build_app_router`](crate::router::build_app_router).

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// ```text
/// POST /  -> upload_file
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(upload::upload_file))
}
