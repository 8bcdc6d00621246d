use std::sync::Arc;

use crate::config::ServerConfig;
use crate::files::FileStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: flashcard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Directory-backed store for uploaded images.
    pub files: Arc<FileStore>,
}
