//! Seed values for the singleton meta record.

use crate::card::DEFAULT_GROUP_NAME;

/// Fixed primary key of the only meta row.
pub const META_ID: i64 = 1;

/// Group list written the first time the meta record is touched.
pub const DEFAULT_GROUPS: [&str; 3] = [DEFAULT_GROUP_NAME, "工作", "学习"];

/// Tag list written the first time the meta record is touched.
pub const DEFAULT_TAGS: [&str; 3] = ["重要", "复习", "灵感"];

pub fn default_groups() -> Vec<String> {
    DEFAULT_GROUPS.iter().map(|s| s.to_string()).collect()
}

pub fn default_tags() -> Vec<String> {
    DEFAULT_TAGS.iter().map(|s| s.to_string()).collect()
}
