//! Repository for the singleton `meta` table.
//!
//! The row with id [`META_ID`] is created lazily, seeded with the default
//! group and tag lists, the first time it is read or written. Creation is a
//! single `INSERT ... ON CONFLICT DO NOTHING`, so concurrent first accesses
//! can never produce a second row.

use chrono::Utc;
use flashcard_core::meta::{default_groups, default_tags, META_ID};
use sqlx::types::Json;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};

use crate::models::meta::{Meta, UpdateMeta};

/// Column list for `meta` queries.
const COLUMNS: &str = "id, groups, tags, updated_at";

/// Provides read and replace operations for the meta record.
pub struct MetaRepo;

impl MetaRepo {
    /// Return the meta record, creating it with seeded defaults if absent.
    pub async fn get(pool: &SqlitePool) -> Result<Meta, sqlx::Error> {
        let mut tx = pool.begin().await?;

        Self::ensure_exists(&mut tx).await?;

        let query = format!("SELECT {COLUMNS} FROM meta WHERE id = $1");
        let meta = sqlx::query_as::<_, Meta>(&query)
            .bind(META_ID)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(meta)
    }

    /// Replace whichever lists are present in `input`, creating the record
    /// first if needed. Lists are replaced wholesale, never merged.
    pub async fn update(pool: &SqlitePool, input: &UpdateMeta) -> Result<Meta, sqlx::Error> {
        let mut tx = pool.begin().await?;

        Self::ensure_exists(&mut tx).await?;

        let query = format!(
            "UPDATE meta SET \
                 groups = COALESCE($2, groups), \
                 tags = COALESCE($3, tags), \
                 updated_at = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let meta = sqlx::query_as::<_, Meta>(&query)
            .bind(META_ID)
            .bind(input.groups.as_ref().map(Json))
            .bind(input.tags.as_ref().map(Json))
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(meta)
    }

    /// Count meta rows. Always 1 once the record has been touched.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM meta")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    async fn ensure_exists(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
        let result = sqlx::query::<Sqlite>(
            "INSERT INTO meta (id, groups, tags, updated_at) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(META_ID)
        .bind(Json(default_groups()))
        .bind(Json(default_tags()))
        .bind(Utc::now())
        .execute(conn)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!("Seeded default meta record");
        }
        Ok(())
    }
}
