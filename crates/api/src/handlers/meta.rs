//! Handlers for the group and tag lists.

use axum::extract::State;
use axum::Json;
use flashcard_db::models::meta::{MetaLists, UpdateMeta};
use flashcard_db::repositories::MetaRepo;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/meta
///
/// Return the group and tag lists, seeding defaults on first access.
pub async fn get_meta(State(state): State<AppState>) -> AppResult<Json<MetaLists>> {
    let meta = MetaRepo::get(&state.pool).await?;
    Ok(Json(meta.into()))
}

/// POST /api/meta
///
/// Replace the group list, the tag list, or both.
pub async fn update_meta(
    State(state): State<AppState>,
    Json(input): Json<UpdateMeta>,
) -> AppResult<Json<MessageResponse>> {
    let meta = MetaRepo::update(&state.pool, &input).await?;

    tracing::info!(
        groups = meta.groups.len(),
        tags = meta.tags.len(),
        "Meta lists updated",
    );

    Ok(Json(MessageResponse { message: "Updated" }))
}
