//! Upload filename generation and image URL construction.
//!
//! Stored filenames are `{YYYYMMDDHHMMSS}_{sanitized original}`. When two
//! uploads land in the same second with the same original name, the caller
//! retries with an increasing `attempt`, which inserts a disambiguator:
//! `{YYYYMMDDHHMMSS}_{attempt}_{sanitized original}`.

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// URL path prefix under which uploaded files are served.
pub const UPLOADS_ROUTE_PREFIX: &str = "/uploads";

/// Stem used when sanitization leaves nothing usable.
pub const FALLBACK_FILENAME: &str = "upload";

/// `chrono` format for the second-resolution filename prefix.
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

// ---------------------------------------------------------------------------
// Filenames
// ---------------------------------------------------------------------------

/// Reduce a client-supplied filename to a safe single path component.
///
/// - Directory parts (`/` or `\` separated) are dropped.
/// - Whitespace becomes `_`.
/// - Only ASCII letters, digits, `.`, `_` and `-` are kept.
/// - Leading `_` and trailing `.`/`_` are trimmed.
/// - A name that would start with `.` gets the fallback stem prepended, so
///   `图片.png` becomes `upload.png` rather than a hidden file.
pub fn sanitize_filename(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);

    let cleaned: String = base
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    let trimmed = cleaned
        .trim_start_matches('_')
        .trim_end_matches(['.', '_']);

    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else if trimmed.starts_with('.') {
        format!("{FALLBACK_FILENAME}{trimmed}")
    } else {
        trimmed.to_string()
    }
}

/// Build the stored filename for an upload received at `now`.
///
/// `attempt` 0 yields the plain `{ts}_{name}` form; higher values insert the
/// attempt number to step around an existing file.
pub fn stored_filename(now: Timestamp, original: &str, attempt: u32) -> String {
    let ts = now.format(TIMESTAMP_FORMAT);
    let name = sanitize_filename(original);
    if attempt == 0 {
        format!("{ts}_{name}")
    } else {
        format!("{ts}_{attempt}_{name}")
    }
}

// ---------------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------------

/// Full download URL for a stored filename, relative to the serving host.
///
/// ```
/// use flashcard_core::upload::image_url;
///
/// assert_eq!(
///     image_url("http", "localhost:5000", "20240101120000_a.png"),
///     "http://localhost:5000/uploads/20240101120000_a.png",
/// );
/// ```
pub fn image_url(scheme: &str, host: &str, filename: &str) -> String {
    format!("{scheme}://{host}{UPLOADS_ROUTE_PREFIX}/{filename}")
}
