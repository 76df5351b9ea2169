use chrono::NaiveDate;

use super::*;
use crate::consts::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};

// =============================================================
// Helpers
// =============================================================

const UTC: i64 = 0;

/// Epoch ms of the date's UTC midnight.
fn target_ms_of(date_input: &str) -> i64 {
    date::local_midnight_ms(date::parse(date_input).unwrap(), UTC)
}

fn submit_ok(
    controller: &mut Controller,
    title: &str,
    date_input: &str,
    now_ms: i64,
) -> SavedCountdown {
    match controller.submit(title, date_input, now_ms, UTC) {
        Ok(record) => record,
        Err(err) => panic!("submit failed: {err}"),
    }
}

fn running_remaining(controller: &Controller) -> Remaining {
    match controller.phase() {
        Phase::Running { remaining, .. } => *remaining,
        other => panic!("expected running phase, got {other:?}"),
    }
}

fn running_target(controller: &Controller) -> i64 {
    match controller.phase() {
        Phase::Running { target_ms, .. } => *target_ms,
        other => panic!("expected running phase, got {other:?}"),
    }
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_future_date_enters_running() {
    let mut controller = Controller::new();
    let now = target_ms_of("2030-01-01") - 2 * MS_PER_DAY;

    submit_ok(&mut controller, "Launch", "2030-01-01", now);

    assert!(controller.is_running());
    assert_eq!(running_target(&controller), target_ms_of("2030-01-01"));
}

#[test]
fn submit_returns_the_record_to_persist() {
    let mut controller = Controller::new();
    let record = submit_ok(&mut controller, "Launch", "2030-01-01", 0);

    assert_eq!(record.title, "Launch");
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
}

#[test]
fn submit_renders_the_first_frame_immediately() {
    // Exactly two days out: the boundary splits as (2, 0, 0, 0).
    let mut controller = Controller::new();
    let now = target_ms_of("2030-01-01") - 2 * MS_PER_DAY;

    submit_ok(&mut controller, "Launch", "2030-01-01", now);

    assert_eq!(
        running_remaining(&controller),
        Remaining { days: 2, hours: 0, minutes: 0, seconds: 0 }
    );
}

#[test]
fn submit_without_a_date_is_rejected_without_state_change() {
    let mut controller = Controller::new();

    let err = controller.submit("Launch", "", 0, UTC).unwrap_err();

    assert_eq!(err, DateError::Missing);
    assert_eq!(*controller.phase(), Phase::Input);
}

#[test]
fn submit_error_leaves_a_running_countdown_untouched() {
    let mut controller = Controller::new();
    submit_ok(&mut controller, "Launch", "2030-01-01", 0);
    let before = controller.phase().clone();

    assert!(controller.submit("Launch", "2030-13-01", 0, UTC).is_err());

    assert_eq!(*controller.phase(), before);
}

#[test]
fn submit_overwrites_the_previous_countdown() {
    let mut controller = Controller::new();
    submit_ok(&mut controller, "First", "2030-01-01", 0);

    submit_ok(&mut controller, "Second", "2031-06-15", 0);

    assert_eq!(running_target(&controller), target_ms_of("2031-06-15"));
}

#[test]
fn submit_with_a_past_date_clamps_the_first_render_to_zero() {
    let mut controller = Controller::new();
    let now = target_ms_of("2030-01-01") + MS_PER_HOUR;

    submit_ok(&mut controller, "Launch", "2030-01-01", now);

    assert!(controller.is_running());
    assert_eq!(running_remaining(&controller), Remaining::ZERO);
}

#[test]
fn submit_applies_the_utc_offset_to_the_target() {
    // UTC+2 reports -120: local midnight lands two hours before UTC midnight.
    let mut controller = Controller::new();
    controller.submit("Launch", "2030-01-01", 0, -120).unwrap();

    assert_eq!(running_target(&controller), target_ms_of("2030-01-01") - 120 * MS_PER_MINUTE);
}

// =============================================================
// Tick
// =============================================================

#[test]
fn tick_counts_down_toward_the_target() {
    let mut controller = Controller::new();
    let target = target_ms_of("2030-01-01");
    submit_ok(&mut controller, "Launch", "2030-01-01", target - 2 * MS_PER_DAY);

    let outcome = controller.tick(target - MS_PER_DAY);

    let expected = Remaining { days: 1, hours: 0, minutes: 0, seconds: 0 };
    assert_eq!(outcome, Tick::Continue(expected));
    assert_eq!(running_remaining(&controller), expected);
}

#[test]
fn tick_at_exactly_zero_distance_still_runs() {
    let mut controller = Controller::new();
    let target = target_ms_of("2030-01-01");
    submit_ok(&mut controller, "Launch", "2030-01-01", target - MS_PER_DAY);

    let outcome = controller.tick(target);

    assert_eq!(outcome, Tick::Continue(Remaining::ZERO));
    assert!(controller.is_running());
}

#[test]
fn tick_one_millisecond_late_completes() {
    let mut controller = Controller::new();
    let target = target_ms_of("2030-01-01");
    let record = submit_ok(&mut controller, "Launch", "2030-01-01", target - MS_PER_DAY);

    let outcome = controller.tick(target + 1);

    assert_eq!(outcome, Tick::Finished);
    assert_eq!(*controller.phase(), Phase::Completed { countdown: record });
}

#[test]
fn completion_keeps_the_record_for_the_summary() {
    let mut controller = Controller::new();
    let target = target_ms_of("2030-01-01");
    submit_ok(&mut controller, "Launch", "2030-01-01", target - 1);
    controller.tick(target + 1);

    match controller.phase() {
        Phase::Completed { countdown } => {
            assert_eq!(countdown.finished_summary(), "Launch finished on 2030-01-01");
        }
        other => panic!("expected completed phase, got {other:?}"),
    }
}

#[test]
fn tick_after_completion_is_idle() {
    let mut controller = Controller::new();
    let target = target_ms_of("2030-01-01");
    submit_ok(&mut controller, "Launch", "2030-01-01", target - 1);
    controller.tick(target + 1);
    let completed = controller.phase().clone();

    assert_eq!(controller.tick(target + 2_000), Tick::Idle);
    assert_eq!(*controller.phase(), completed);
}

#[test]
fn tick_in_the_input_phase_is_idle() {
    let mut controller = Controller::new();
    assert_eq!(controller.tick(0), Tick::Idle);
    assert_eq!(*controller.phase(), Phase::Input);
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_from_running_returns_to_input() {
    let mut controller = Controller::new();
    submit_ok(&mut controller, "Launch", "2030-01-01", 0);

    controller.reset();

    assert_eq!(*controller.phase(), Phase::Input);
}

#[test]
fn reset_from_completed_returns_to_input() {
    let mut controller = Controller::new();
    let target = target_ms_of("2030-01-01");
    submit_ok(&mut controller, "Launch", "2030-01-01", target - 1);
    controller.tick(target + 1);

    controller.reset();

    assert_eq!(*controller.phase(), Phase::Input);
}

#[test]
fn reset_with_nothing_running_is_a_no_op() {
    let mut controller = Controller::new();
    controller.reset();
    controller.reset();
    assert_eq!(*controller.phase(), Phase::Input);
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_reproduces_the_running_state() {
    let mut first = Controller::new();
    let now = target_ms_of("2030-01-01") - 3 * MS_PER_DAY;
    let record = submit_ok(&mut first, "Launch", "2030-01-01", now);
    let saved = first.phase().clone();

    let mut reloaded = Controller::new();
    reloaded.restore(record, now, UTC);

    assert_eq!(*reloaded.phase(), saved);
}

#[test]
fn restore_with_a_past_date_completes_on_the_first_tick() {
    let mut controller = Controller::new();
    let now = target_ms_of("2020-01-01") + 400 * MS_PER_DAY;
    let record = SavedCountdown {
        title: "Retro".to_owned(),
        date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    };

    controller.restore(record, now, UTC);
    assert!(controller.is_running());
    assert_eq!(running_remaining(&controller), Remaining::ZERO);

    assert_eq!(controller.tick(now), Tick::Finished);
    assert!(matches!(controller.phase(), Phase::Completed { .. }));
}

#[test]
fn restore_applies_the_utc_offset_to_the_target() {
    let mut controller = Controller::new();
    let record = SavedCountdown {
        title: "Launch".to_owned(),
        date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
    };

    controller.restore(record, 0, 60);

    assert_eq!(running_target(&controller), target_ms_of("2030-01-01") + 60 * MS_PER_MINUTE);
}
