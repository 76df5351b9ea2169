//! Running countdown display: the title and four remaining-time values.

use leptos::prelude::*;

use countdown::remaining::Remaining;

#[cfg(test)]
#[path = "countdown_panel_test.rs"]
mod countdown_panel_test;

/// One remaining-time value as display text: the bare number, no zero
/// padding. Three hours renders as `"3"`, not `"03"`.
fn format_unit(value: i64) -> String {
    value.to_string()
}

#[component]
pub fn CountdownPanel(
    title: String,
    remaining: Remaining,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="countdown-panel">
            <h1 class="countdown-panel__title">{title}</h1>
            <ul class="countdown-panel__units">
                <li class="countdown-panel__unit">
                    <span>{format_unit(remaining.days)}</span>
                    "Days"
                </li>
                <li class="countdown-panel__unit">
                    <span>{format_unit(remaining.hours)}</span>
                    "Hours"
                </li>
                <li class="countdown-panel__unit">
                    <span>{format_unit(remaining.minutes)}</span>
                    "Minutes"
                </li>
                <li class="countdown-panel__unit">
                    <span>{format_unit(remaining.seconds)}</span>
                    "Seconds"
                </li>
            </ul>
            <button class="countdown-panel__reset" type="button" on:click=move |_| on_reset.run(())>
                "Reset"
            </button>
        </section>
    }
}
