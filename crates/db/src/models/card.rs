//! Card model and DTOs.

use flashcard_core::card::ReminderType;
use flashcard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::deserialize_present;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `cards` table.
///
/// `image_path` is the stored upload filename, not a URL. It is a weak
/// reference: nothing guarantees the file still exists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Card {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub image_path: Option<String>,
    pub group_name: String,
    pub tags: String,
    pub is_marked: bool,
    pub created_at: Timestamp,
    #[sqlx(try_from = "String")]
    pub reminder_type: ReminderType,
    pub reminder_value: String,
    pub last_reviewed: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a card. Every field is optional; the repository fills
/// in the documented defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCard {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_path: Option<String>,
    pub group_name: Option<String>,
    pub tags: Option<String>,
    pub is_marked: Option<bool>,
    pub reminder_type: Option<ReminderType>,
    pub reminder_value: Option<String>,
}

/// DTO for a partial card update. Absent fields keep their stored value.
///
/// `image_path` is tri-state:
/// - key absent: `None`, the stored image is kept
/// - `null` or `""`: `Some(None)` / `Some(Some(""))`, the image is cleared
/// - a filename: `Some(Some(name))`, the image is replaced
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCard {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub image_path: Option<Option<String>>,
    pub group_name: Option<String>,
    pub tags: Option<String>,
    pub is_marked: Option<bool>,
    pub reminder_type: Option<ReminderType>,
    pub reminder_value: Option<String>,
}

impl UpdateCard {
    /// Resolve the tri-state `image_path` into `(should_write, new_value)`.
    /// Empty strings are normalised to `NULL`.
    pub fn image_path_change(&self) -> (bool, Option<&str>) {
        match &self.image_path {
            None => (false, None),
            Some(value) => (true, value.as_deref().filter(|s| !s.is_empty())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_image_path_is_not_written() {
        let input: UpdateCard = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        assert_eq!(input.image_path_change(), (false, None));
    }

    #[test]
    fn null_image_path_clears() {
        let input: UpdateCard = serde_json::from_str(r#"{"image_path": null}"#).unwrap();
        assert_eq!(input.image_path_change(), (true, None));
    }

    #[test]
    fn empty_image_path_clears() {
        let input: UpdateCard = serde_json::from_str(r#"{"image_path": ""}"#).unwrap();
        assert_eq!(input.image_path_change(), (true, None));
    }

    #[test]
    fn filename_image_path_replaces() {
        let input: UpdateCard =
            serde_json::from_str(r#"{"image_path": "20240101000000_a.png"}"#).unwrap();
        assert_eq!(
            input.image_path_change(),
            (true, Some("20240101000000_a.png"))
        );
    }

    #[test]
    fn unknown_reminder_type_is_rejected() {
        let result: Result<CreateCard, _> =
            serde_json::from_str(r#"{"title": "x", "reminder_type": "hourly"}"#);
        assert!(result.is_err());
    }
}
