//! Shared time constants for the countdown crate.

// ── Time ────────────────────────────────────────────────────────

/// Milliseconds in one second.
pub const MS_PER_SECOND: i64 = 1_000;

/// Milliseconds in one minute.
pub const MS_PER_MINUTE: i64 = MS_PER_SECOND * 60;

/// Milliseconds in one hour.
pub const MS_PER_HOUR: i64 = MS_PER_MINUTE * 60;

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = MS_PER_HOUR * 24;
