//! HTTP error type shared by every handler.
//!
//! Every failure leaves the service as `{"error": <message>, "code": <CODE>}`.
//! Server-side faults are logged in full and reported with a fixed message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flashcard_core::error::CoreError;
use serde_json::json;
use sqlx::error::{DatabaseError, ErrorKind};

const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed request the client can fix, e.g. a multipart body without
    /// a `file` part.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server-side failure outside the database, such as a failed disk write.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status, machine-readable code and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Database(sqlx::Error::Database(db_err)) => {
                match constraint_violation(db_err.as_ref()) {
                    Some(message) => (StatusCode::BAD_REQUEST, "CONSTRAINT_VIOLATION", message),
                    None => {
                        tracing::error!(error = %db_err, code = ?db_err.code(), "Database error");
                        internal()
                    }
                }
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

/// Client-facing message for a rejected write, or `None` when the error is
/// not a constraint violation.
///
/// SQLite reports these as extended `SQLITE_CONSTRAINT_*` codes (275 for
/// CHECK, 1299 for NOT NULL, 2067 for UNIQUE), which sqlx folds into
/// [`ErrorKind`]. The driver message names the offending column or
/// constraint expression, never row data.
fn constraint_violation(err: &dyn DatabaseError) -> Option<String> {
    let what = match err.kind() {
        ErrorKind::CheckViolation => "check",
        ErrorKind::NotNullViolation => "not-null",
        ErrorKind::UniqueViolation => "unique",
        ErrorKind::ForeignKeyViolation => "foreign key",
        _ => return None,
    };
    Some(format!("Value violates {what} constraint: {}", err.message()))
}
