//! Route definitions for cards, mounted at `/api/cards`.

use axum::routing::get;
use axum::Router;

use crate::handlers::cards;
use crate::state::AppState;

/// ```text
/// GET    /       -> list_cards
/// POST   /       -> create_card
/// GET    /{id}   -> get_card
/// PUT    /{id}   -> update_card
/// DELETE /{id}   -> delete_card
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cards::list_cards).post(cards::create_card))
        .route(
            "/{id}",
            get(cards::get_card)
                .put(cards::update_card)
                .delete(cards::delete_card),
        )
}
