use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://cards.db`).
    pub database_url: String,
    /// Directory uploaded images are written to and served from.
    pub upload_dir: PathBuf,
    /// Host used to build image URLs when a request carries no `Host` header.
    pub public_host: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum request body size in bytes, which bounds uploads.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default             |
    /// |------------------------|---------------------|
    /// | `HOST`                 | `0.0.0.0`           |
    /// | `PORT`                 | `5000`              |
    /// | `DATABASE_URL`         | `sqlite://cards.db` |
    /// | `UPLOAD_DIR`           | `uploads`           |
    /// | `PUBLIC_HOST`          | `localhost:5000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                |
    /// | `MAX_UPLOAD_BYTES`     | `16777216`          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://cards.db".into());

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        let public_host =
            std::env::var("PUBLIC_HOST").unwrap_or_else(|_| format!("localhost:{port}"));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (16 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            database_url,
            upload_dir,
            public_host,
            request_timeout_secs,
            max_upload_bytes,
        }
    }
}
