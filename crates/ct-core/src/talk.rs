//! The talk value type.

use serde::{Deserialize, Serialize};

/// Fixed duration of a lightning talk, in minutes.
pub const LIGHTNING_MINUTES: u32 = 5;

/// A unit of conference content: a title plus a fixed duration in minutes.
///
/// Talks carry no identity beyond value equality; duplicate titles and
/// durations are legal and are scheduled as distinct items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    pub title: String,
    /// Duration in minutes, always positive.
    pub minutes: u32,
}

impl Talk {
    #[must_use]
    pub fn new(title: impl Into<String>, minutes: u32) -> Self {
        Self {
            title: title.into(),
            minutes,
        }
    }
}

impl std::fmt::Display for Talk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}min", self.title, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_appends_duration_suffix() {
        let talk = Talk::new("Lua for the Masses", 30);
        assert_eq!(talk.to_string(), "Lua for the Masses 30min");
    }

    #[test]
    fn test_duplicate_talks_compare_equal_but_are_distinct_values() {
        let a = Talk::new("Woah", 30);
        let b = Talk::new("Woah", 30);
        assert_eq!(a, b);
        // A pool may hold both; equality does not dedupe.
        let pool = vec![a, b];
        assert_eq!(pool.len(), 2);
    }
}
