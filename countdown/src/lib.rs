//! Countdown state machine and calendar math for the countdown timer widget.
//!
//! This crate holds everything about the widget that does not depend on a
//! browser: parsing the target date, converting it to epoch milliseconds,
//! splitting the remaining distance into display units, the persisted
//! `{title, date}` record, and the three-phase lifecycle (input, running,
//! completed). The web layer owns the actual interval timer and storage; it
//! feeds wall-clock readings in and renders whatever phase comes back out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Three-phase state machine and per-tick transitions |
//! | [`date`] | Strict `YYYY-MM-DD` parsing and local-midnight conversion |
//! | [`record`] | The persisted `{title, date}` record |
//! | [`remaining`] | Millisecond distance split into days/hours/minutes/seconds |
//! | [`consts`] | Shared time constants |

pub mod consts;
pub mod controller;
pub mod date;
pub mod record;
pub mod remaining;
