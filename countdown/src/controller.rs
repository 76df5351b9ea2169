//! The countdown lifecycle: input, running, completed.

use crate::date::{self, DateError};
use crate::record::SavedCountdown;
use crate::remaining::Remaining;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Outcome of a single tick, for the host to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; render these values.
    Continue(Remaining),
    /// The target just passed; the phase moved to `Completed`.
    Finished,
    /// No countdown is running; nothing to do.
    Idle,
}

/// Where the widget is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the user to pick a title and date.
    Input,
    /// Counting down. `remaining` is whatever the last tick (or the arming
    /// submit/restore) computed, so the view renders without waiting a second.
    Running {
        countdown: SavedCountdown,
        target_ms: i64,
        remaining: Remaining,
    },
    /// The target passed; the completion message is showing.
    Completed { countdown: SavedCountdown },
}

/// Countdown state machine, holding all logic that doesn't depend on the browser.
///
/// Separated from the UI layer so it can be tested without WASM. The page
/// owns the actual interval handle and the storage slot; the controller only
/// decides whether a timer should be live (`Running`) and what each tick
/// means. Persistence stays with the caller: `submit` hands back the record
/// to store, `restore` accepts one read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    phase: Phase,
}

impl Default for Controller {
    fn default() -> Self {
        Self { phase: Phase::Input }
    }
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether a tick timer should be live right now.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    // --- Transitions ---

    /// Handle form submission.
    ///
    /// On success the phase moves to `Running` with an immediately renderable
    /// `Remaining` (clamped to zero if the target is already past), and the
    /// record is returned for the caller to persist. On any error the phase
    /// is left untouched and nothing is persisted.
    ///
    /// # Errors
    ///
    /// Whatever [`date::parse`] rejects: an empty date input is
    /// [`DateError::Missing`], the rest of the rejections cannot come from a
    /// well-behaved date control.
    pub fn submit(
        &mut self,
        title: &str,
        date_input: &str,
        now_ms: i64,
        utc_offset_min: i64,
    ) -> Result<SavedCountdown, DateError> {
        let date = date::parse(date_input)?;
        let record = SavedCountdown { title: title.to_owned(), date };
        self.arm(record.clone(), now_ms, utc_offset_min);
        Ok(record)
    }

    /// Re-enter `Running` from a previously persisted record.
    ///
    /// The restore path skips re-persistence but is otherwise the tail half
    /// of `submit`. A past target still arms; the first tick moves it to
    /// `Completed`.
    pub fn restore(&mut self, record: SavedCountdown, now_ms: i64, utc_offset_min: i64) {
        self.arm(record, now_ms, utc_offset_min);
    }

    /// Advance the countdown by one tick.
    ///
    /// A negative distance, even by a millisecond, completes the countdown.
    /// A distance of exactly zero still counts as running.
    pub fn tick(&mut self, now_ms: i64) -> Tick {
        match &mut self.phase {
            Phase::Running { countdown, target_ms, remaining } => {
                let distance = *target_ms - now_ms;
                if distance < 0 {
                    let finished = countdown.clone();
                    self.phase = Phase::Completed { countdown: finished };
                    Tick::Finished
                } else {
                    *remaining = Remaining::from_distance_ms(distance);
                    Tick::Continue(*remaining)
                }
            }
            Phase::Input | Phase::Completed { .. } => Tick::Idle,
        }
    }

    /// Return to the input view. Idempotent; safe to call from any phase.
    pub fn reset(&mut self) {
        self.phase = Phase::Input;
    }

    fn arm(&mut self, countdown: SavedCountdown, now_ms: i64, utc_offset_min: i64) {
        let target_ms = date::local_midnight_ms(countdown.date, utc_offset_min);
        let distance = target_ms - now_ms;
        let remaining = if distance >= 0 {
            Remaining::from_distance_ms(distance)
        } else {
            Remaining::ZERO
        };
        self.phase = Phase::Running { countdown, target_ms, remaining };
    }
}
