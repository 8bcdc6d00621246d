//! Meta (group and tag lists) model and DTOs.

use flashcard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// The singleton row from the `meta` table. Lists are stored as JSON text.
#[derive(Debug, Clone, FromRow)]
pub struct Meta {
    pub id: DbId,
    pub groups: Json<Vec<String>>,
    pub tags: Json<Vec<String>>,
    pub updated_at: Timestamp,
}

/// Public shape of the meta record: just the two lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaLists {
    pub groups: Vec<String>,
    pub tags: Vec<String>,
}

impl From<Meta> for MetaLists {
    fn from(meta: Meta) -> Self {
        Self {
            groups: meta.groups.0,
            tags: meta.tags.0,
        }
    }
}

/// DTO for replacing either list. An absent key leaves that list untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMeta {
    pub groups: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}
