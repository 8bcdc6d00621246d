//! Handler for image uploads.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::RequestOrigin;
use crate::response::UploadResponse;
use crate::state::AppState;

/// Multipart field carrying the uploaded file.
const FILE_FIELD: &str = "file";

/// POST /api/upload
///
/// Store the `file` part of a multipart body and return its generated name.
/// The caller attaches that name to a card's `image_path` separately.
pub async fn upload_file(
    State(state): State<AppState>,
    origin: RequestOrigin,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    // The first `file` part wins; anything after it is left unread.
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        file_data = Some((filename, data.to_vec()));
        break;
    }

    let (original_name, data) =
        file_data.ok_or_else(|| AppError::BadRequest("No file part".into()))?;

    if original_name.is_empty() {
        return Err(AppError::BadRequest("No selected file".into()));
    }

    let filename = state
        .files
        .save(&original_name, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to save upload: {e}")))?;

    tracing::info!(
        filename = %filename,
        original = %original_name,
        size = data.len(),
        "File uploaded",
    );

    Ok(Json(UploadResponse {
        url: origin.image_url(&filename),
        filename,
    }))
}
