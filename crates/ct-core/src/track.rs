//! Session and track records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::talk::Talk;

/// Capacity configuration for the two half-day slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLimits {
    /// Morning session capacity in minutes.
    /// Default: 180 (3 hours).
    pub morning_minutes: u32,

    /// Soft minimum the afternoon fill aims for; triggers the repair pass
    /// when undershot. Default: 180 (3 hours).
    pub afternoon_min_minutes: u32,

    /// Afternoon session capacity in minutes.
    /// Default: 240 (4 hours).
    pub afternoon_max_minutes: u32,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            morning_minutes: 180,
            afternoon_min_minutes: 180,
            afternoon_max_minutes: 240,
        }
    }
}

impl SessionLimits {
    /// Rejects capacity combinations the packer cannot work with.
    pub const fn validate(&self) -> Result<(), LimitsError> {
        if self.morning_minutes == 0 || self.afternoon_max_minutes == 0 {
            return Err(LimitsError::ZeroCapacity);
        }
        if self.afternoon_min_minutes > self.afternoon_max_minutes {
            return Err(LimitsError::MinAboveMax {
                min: self.afternoon_min_minutes,
                max: self.afternoon_max_minutes,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LimitsError {
    #[error("session capacities must be positive")]
    ZeroCapacity,
    #[error("afternoon minimum ({min}min) exceeds afternoon maximum ({max}min)")]
    MinAboveMax { min: u32, max: u32 },
}

/// A capacity-bounded half-day slot holding an ordered subset of talks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Talks in assignment order.
    pub talks: Vec<Talk>,
    /// Maximum capacity of the slot in minutes.
    pub capacity_minutes: u32,
}

impl Session {
    #[must_use]
    pub const fn empty(capacity_minutes: u32) -> Self {
        Self {
            talks: Vec::new(),
            capacity_minutes,
        }
    }

    /// Sum of the scheduled talk durations in minutes.
    #[must_use]
    pub fn scheduled_minutes(&self) -> u32 {
        self.talks.iter().map(|t| t.minutes).sum()
    }

    #[must_use]
    pub fn remaining_minutes(&self) -> u32 {
        self.capacity_minutes.saturating_sub(self.scheduled_minutes())
    }
}

/// One parallel room-day: a morning session plus an afternoon session,
/// disjoint in talk membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub morning: Session,
    pub afternoon: Session,
}
