//! The countdown page: one screen, three views.
//!
//! ARCHITECTURE
//! ============
//! The page owns the form drafts and the interval handle, and routes every
//! event through the shared [`Controller`] context: submit parses and arms,
//! the per-second tick advances the phase, reset returns to the input view.
//! Which of the three child views renders follows the controller's phase
//! alone. Persistence is write-through: the slot is written on a successful
//! submit, read once on load, and removed on reset.

use leptos::prelude::*;

use countdown::controller::{Controller, Phase, Tick};
use countdown::date::{self, DateError};

use crate::components::complete_panel::CompletePanel;
use crate::components::countdown_panel::CountdownPanel;
use crate::components::setup_form::SetupForm;
use crate::util::ticker::Ticker;
use crate::util::{alert, clock, storage};

#[component]
pub fn CountdownPage() -> impl IntoView {
    let controller = expect_context::<RwSignal<Controller>>();

    let title_draft = RwSignal::new(String::new());
    let date_draft = RwSignal::new(String::new());

    // Restore a previously saved countdown once on load. A past target still
    // arms as running; the first tick moves it on to the completion view.
    Effect::new(move || {
        if let Some(record) = storage::load() {
            let utc_offset_min = clock::utc_offset_minutes_for(record.date);
            controller.update(|c| c.restore(record, clock::now_ms(), utc_offset_min));
        }
    });

    // Drive the interval from the phase: live while running, cancelled
    // otherwise. Re-runs on every controller change; the is_active guard
    // keeps the running case from stacking intervals.
    let tick_handle = Ticker::new();
    Effect::new(move || {
        if !controller.with(|c| c.is_running()) {
            tick_handle.cancel();
            return;
        }
        if tick_handle.is_active() {
            return;
        }
        tick_handle.start(move || {
            let outcome = controller.try_update(|c| c.tick(clock::now_ms()));
            if matches!(outcome, Some(Tick::Finished)) {
                leptos::logging::log!("countdown reached its target");
            }
        });
    });

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title = title_draft.get();
        let date_input = date_draft.get();
        // The UTC offset depends on the target date (DST), so resolve it
        // from the draft before arming.
        let utc_offset_min = date::parse(&date_input)
            .map(clock::utc_offset_minutes_for)
            .unwrap_or(0);
        let outcome = controller
            .try_update(|c| c.submit(&title, &date_input, clock::now_ms(), utc_offset_min));
        match outcome {
            Some(Ok(record)) => storage::save(&record),
            Some(Err(DateError::Missing)) => {
                alert::blocking_alert("Please select a date for the countdown.");
            }
            Some(Err(err)) => {
                leptos::logging::warn!("rejected countdown submit: {err}");
                alert::blocking_alert(&format!("That date can't be used: {err}"));
            }
            None => {}
        }
    });

    // Both dismiss buttons funnel into this one reset path.
    let on_reset = Callback::new(move |()| {
        controller.update(|c| c.reset());
        storage::clear();
        title_draft.set(String::new());
        date_draft.set(String::new());
    });

    view! {
        <main class="countdown-page">
            {move || match controller.with(|c| c.phase().clone()) {
                Phase::Input => view! {
                    <SetupForm title=title_draft date=date_draft on_submit=on_submit/>
                }
                .into_any(),
                Phase::Running { countdown, remaining, .. } => view! {
                    <CountdownPanel title=countdown.title remaining=remaining on_reset=on_reset/>
                }
                .into_any(),
                Phase::Completed { countdown } => view! {
                    <CompletePanel summary=countdown.finished_summary() on_reset=on_reset/>
                }
                .into_any(),
            }}
        </main>
    }
}
