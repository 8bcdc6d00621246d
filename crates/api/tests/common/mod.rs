#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use flashcard_api::config::ServerConfig;
use flashcard_api::files::FileStore;
use flashcard_api::router::build_app_router;
use flashcard_api::state::AppState;

/// Host image URLs fall back to when a request carries no `Host` header.
pub const TEST_PUBLIC_HOST: &str = "localhost:5000";

/// Multipart boundary used by [`post_multipart`].
const BOUNDARY: &str = "flashcard-test-boundary";

/// A test database pool plus a private upload directory.
///
/// The directory is deleted when the `TestApp` is dropped, so keep it alive
/// for the whole test.
pub struct TestApp {
    pub pool: SqlitePool,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            upload_dir: tempfile::tempdir().expect("create temp upload dir"),
        }
    }

    /// Build a fresh router sharing this app's pool and upload directory.
    ///
    /// `oneshot` consumes the router, so call this once per request.
    pub fn router(&self) -> Router {
        let config = test_config(self.upload_dir.path());
        let state = AppState {
            pool: self.pool.clone(),
            files: Arc::new(FileStore::new(config.upload_dir.clone())),
            config: Arc::new(config),
        };
        build_app_router(state)
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(upload_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        upload_dir: upload_dir.to_path_buf(),
        public_host: TEST_PUBLIC_HOST.to_string(),
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// A single multipart part: `(field name, optional filename, bytes)`.
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(filename) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
            }
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    send(app, request).await
}

/// Upload `data` as the `file` field under `filename`.
pub async fn upload(app: Router, filename: &str, data: &[u8]) -> Response<Body> {
    post_multipart(app, "/api/upload", &[("file", Some(filename), data)]).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
