//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` DTOs for the request payloads that write it

pub mod card;
pub mod meta;

use serde::{Deserialize, Deserializer};

/// Deserialize a field so that a present key always yields `Some`, even when
/// its value is `null`. Combined with `#[serde(default)]` on an
/// `Option<Option<T>>` this distinguishes "absent" from "explicitly null".
pub(crate) fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
