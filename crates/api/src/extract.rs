//! Request extractors.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::HOST;
use axum::http::request::Parts;
use flashcard_core::upload::image_url;

use crate::state::AppState;

/// Scheme and host the current request was addressed to.
///
/// Image URLs are built from this, so they are only valid relative to the
/// server instance that produced them.
///
/// - host: the `Host` header, else the URI authority, else
///   [`ServerConfig::public_host`](crate::config::ServerConfig::public_host)
/// - scheme: the first `X-Forwarded-Proto` value, else `http`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub scheme: String,
    pub host: String,
}

impl RequestOrigin {
    /// Full download URL for an uploaded file.
    pub fn image_url(&self, filename: &str) -> String {
        image_url(&self.scheme, &self.host, filename)
    }
}

impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let host = parts
            .headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .filter(|h| !h.is_empty())
            .or_else(|| parts.uri.authority().map(|a| a.as_str()))
            .unwrap_or(state.config.public_host.as_str())
            .to_string();

        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("http")
            .to_string();

        Ok(Self { scheme, host })
    }
}
