pub mod cards;
pub mod health;
pub mod meta;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cards                 list, create
/// /cards/{id}            get, update, delete
///
/// /meta                  get, replace lists
///
/// /upload                multipart image upload (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cards", cards::router())
        .nest("/meta", meta::router())
        .nest("/upload", upload::router())
}
