//! Repository for the `cards` table.

use chrono::Utc;
use flashcard_core::card::{ReminderType, DEFAULT_GROUP_NAME, DEFAULT_REMINDER_VALUE};
use flashcard_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::card::{Card, CreateCard, UpdateCard};

/// Column list for `cards` queries.
const COLUMNS: &str = "\
    id, title, content, image_path, group_name, tags, is_marked, \
    created_at, reminder_type, reminder_value, last_reviewed";

/// Provides CRUD operations for cards.
pub struct CardRepo;

impl CardRepo {
    /// List every card, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards ORDER BY id DESC");
        sqlx::query_as::<_, Card>(&query).fetch_all(pool).await
    }

    /// Find a card by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards WHERE id = $1");
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new card, filling defaults for absent fields.
    ///
    /// `created_at` and `last_reviewed` are set from a single clock reading.
    pub async fn create(pool: &SqlitePool, input: &CreateCard) -> Result<Card, sqlx::Error> {
        let now = Utc::now();
        let image_path = input.image_path.as_deref().filter(|s| !s.is_empty());
        let reminder_type = input.reminder_type.unwrap_or_default();

        let query = format!(
            "INSERT INTO cards \
                 (title, content, image_path, group_name, tags, is_marked, \
                  created_at, reminder_type, reminder_value, last_reviewed) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(input.title.as_deref().unwrap_or_default())
            .bind(input.content.as_deref().unwrap_or_default())
            .bind(image_path)
            .bind(input.group_name.as_deref().unwrap_or(DEFAULT_GROUP_NAME))
            .bind(input.tags.as_deref().unwrap_or_default())
            .bind(input.is_marked.unwrap_or(false))
            .bind(now)
            .bind(reminder_type.as_str())
            .bind(
                input
                    .reminder_value
                    .as_deref()
                    .unwrap_or(DEFAULT_REMINDER_VALUE),
            )
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update. `last_reviewed` is refreshed even when no
    /// other field changes.
    ///
    /// Returns `None` if no card with the given ID exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateCard,
    ) -> Result<Option<Card>, sqlx::Error> {
        let (write_image, image_path) = input.image_path_change();

        let query = format!(
            "UPDATE cards SET \
                 title = COALESCE($2, title), \
                 content = COALESCE($3, content), \
                 group_name = COALESCE($4, group_name), \
                 tags = COALESCE($5, tags), \
                 is_marked = COALESCE($6, is_marked), \
                 reminder_type = COALESCE($7, reminder_type), \
                 reminder_value = COALESCE($8, reminder_value), \
                 image_path = CASE WHEN $9 THEN $10 ELSE image_path END, \
                 last_reviewed = $11 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.content.as_deref())
            .bind(input.group_name.as_deref())
            .bind(input.tags.as_deref())
            .bind(input.is_marked)
            .bind(input.reminder_type.map(ReminderType::as_str))
            .bind(input.reminder_value.as_deref())
            .bind(write_image)
            .bind(image_path)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a card by ID. The uploaded image, if any, is left on disk.
    ///
    /// Returns `true` if a card was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
