//! Handlers for card CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use flashcard_core::error::CoreError;
use flashcard_core::types::DbId;
use flashcard_db::models::card::{CreateCard, UpdateCard};
use flashcard_db::repositories::CardRepo;

use crate::error::{AppError, AppResult};
use crate::extract::RequestOrigin;
use crate::response::{CardResponse, MessageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Card", id })
}

/// GET /api/cards
///
/// List every card, newest first.
pub async fn list_cards(
    State(state): State<AppState>,
    origin: RequestOrigin,
) -> AppResult<Json<Vec<CardResponse>>> {
    let cards = CardRepo::list(&state.pool).await?;

    Ok(Json(
        cards
            .into_iter()
            .map(|card| CardResponse::new(card, &origin))
            .collect(),
    ))
}

/// GET /api/cards/{id}
pub async fn get_card(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Path(id): Path<DbId>,
) -> AppResult<Json<CardResponse>> {
    let card = CardRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(CardResponse::new(card, &origin)))
}

/// POST /api/cards
///
/// Create a card. Absent fields take their defaults.
pub async fn create_card(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Json(input): Json<CreateCard>,
) -> AppResult<(StatusCode, Json<CardResponse>)> {
    let card = CardRepo::create(&state.pool, &input).await?;

    tracing::info!(card_id = card.id, group = %card.group_name, "Card created");

    Ok((StatusCode::CREATED, Json(CardResponse::new(card, &origin))))
}

/// PUT /api/cards/{id}
///
/// Partially update a card and mark it as just reviewed.
pub async fn update_card(
    State(state): State<AppState>,
    origin: RequestOrigin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCard>,
) -> AppResult<Json<CardResponse>> {
    let card = CardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(card_id = id, "Card updated");

    Ok(Json(CardResponse::new(card, &origin)))
}

/// DELETE /api/cards/{id}
///
/// Delete a card. Its uploaded image, if any, stays on disk.
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !CardRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(card_id = id, "Card deleted");

    Ok(Json(MessageResponse { message: "Deleted" }))
}
