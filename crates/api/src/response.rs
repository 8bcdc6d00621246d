//! Shared response body types for API handlers.

use flashcard_db::models::card::Card;
use serde::Serialize;

use crate::extract::RequestOrigin;

/// `{ "message": ... }` confirmation body for writes that return no entity.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// A card as returned to clients: every stored column plus `image_url`,
/// resolved against the host the request was sent to.
#[derive(Debug, Serialize)]
pub struct CardResponse {
    #[serde(flatten)]
    pub card: Card,
    pub image_url: Option<String>,
}

impl CardResponse {
    pub fn new(card: Card, origin: &RequestOrigin) -> Self {
        let image_url = card.image_path.as_deref().map(|f| origin.image_url(f));
        Self { card, image_url }
    }
}

/// Body returned by a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Generated filename to store in a card's `image_path`.
    pub filename: String,
    /// Download URL for the stored file.
    pub url: String,
}
