//! The persisted countdown record.
//!
//! One record, one storage slot. The web layer writes it on a successful
//! submit, reads it back on page load, and removes it on reset. The JSON
//! shape is `{"title": string, "date": "YYYY-MM-DD"}`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

/// The single saved countdown: a label and its target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCountdown {
    pub title: String,
    pub date: NaiveDate,
}

impl SavedCountdown {
    /// The completion sentence shown once the target has passed.
    #[must_use]
    pub fn finished_summary(&self) -> String {
        format!("{} finished on {}", self.title, self.date)
    }
}
