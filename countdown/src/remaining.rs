//! Remaining time split into whole display units.

use crate::consts::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

#[cfg(test)]
#[path = "remaining_test.rs"]
mod remaining_test;

/// Whole days/hours/minutes/seconds left until the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// The exact-boundary render: everything at zero.
    pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

    /// Split a non-negative millisecond distance into display units.
    ///
    /// Floor semantics throughout: 1 day plus 999 ms is still `1, 0, 0, 0`.
    /// Callers gate on the sign of the distance first; a negative distance
    /// means the countdown is over, not a unit split.
    #[must_use]
    pub fn from_distance_ms(distance_ms: i64) -> Self {
        Self {
            days: distance_ms / MS_PER_DAY,
            hours: (distance_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance_ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }
}
