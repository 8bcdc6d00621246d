//! Route definitions for the group and tag lists, mounted at `/api/meta`.

use axum::routing::get;
use axum::Router;

use crate::handlers::meta;
use crate::state::AppState;

/// ```text
/// GET  /  -> get_meta
/// POST /  -> update_meta
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(meta::get_meta).post(meta::update_meta))
}
