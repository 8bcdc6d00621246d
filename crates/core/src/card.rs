//! Card defaults and the reminder-type enum.
//!
//! Cards carry a reminder hint that clients use to schedule reviews. Nothing
//! on the server acts on it; the value is only validated and stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Group assigned to cards created without an explicit `group_name`.
pub const DEFAULT_GROUP_NAME: &str = "默认清单";

/// Reminder value stored when the client does not provide one.
pub const DEFAULT_REMINDER_VALUE: &str = "";

// ---------------------------------------------------------------------------
// Reminder type
// ---------------------------------------------------------------------------

/// How a card should be brought back for review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderType {
    /// No reminder.
    #[default]
    None,
    /// Repeats on an interval described by `reminder_value`.
    Periodic,
    /// Fires once at the moment described by `reminder_value`.
    Specific,
}

impl ReminderType {
    /// All variants, in declaration order.
    pub const ALL: [ReminderType; 3] = [
        ReminderType::None,
        ReminderType::Periodic,
        ReminderType::Specific,
    ];

    /// The lowercase string stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            ReminderType::None => "none",
            ReminderType::Periodic => "periodic",
            ReminderType::Specific => "specific",
        }
    }
}

impl fmt::Display for ReminderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReminderType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid reminder type '{s}'. Must be one of: none, periodic, specific"
                ))
            })
    }
}

impl TryFrom<String> for ReminderType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_reminder_type_is_none() {
        assert_eq!(ReminderType::default(), ReminderType::None);
    }

    #[test]
    fn parses_stored_values() {
        for t in ReminderType::ALL {
            assert_eq!(t.as_str().parse::<ReminderType>().unwrap(), t);
        }
    }

    #[test]
    fn rejects_unknown_value() {
        assert_matches!(
            "weekly".parse::<ReminderType>(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ReminderType::Periodic).unwrap();
        assert_eq!(json, "\"periodic\"");

        let parsed: ReminderType = serde_json::from_str("\"specific\"").unwrap();
        assert_eq!(parsed, ReminderType::Specific);
    }
}
