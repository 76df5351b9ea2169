//! Input form for the countdown title and target date.

use leptos::prelude::*;

use crate::util::clock;

/// Title and date entry. The date control refuses past days via `min`, so
/// the only date error a user can normally produce is leaving it empty.
#[component]
pub fn SetupForm(
    title: RwSignal<String>,
    date: RwSignal<String>,
    on_submit: Callback<leptos::ev::SubmitEvent>,
) -> impl IntoView {
    let min_date = clock::today_iso();

    view! {
        <form class="setup-form" on:submit=move |ev| on_submit.run(ev)>
            <h1 class="setup-form__heading">"Countdown Timer"</h1>
            <label class="setup-form__field">
                "Title"
                <input
                    type="text"
                    placeholder="What are you counting down to?"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="setup-form__field">
                "Date"
                <input
                    type="date"
                    min=min_date
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
            </label>
            <button class="setup-form__submit" type="submit">
                "Start Countdown"
            </button>
        </form>
    }
}
