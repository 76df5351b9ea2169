//! Completion view shown once the target date has passed.

use leptos::prelude::*;

#[component]
pub fn CompletePanel(summary: String, on_reset: Callback<()>) -> impl IntoView {
    view! {
        <section class="complete-panel">
            <h1 class="complete-panel__heading">"Countdown Complete!"</h1>
            <p class="complete-panel__info">{summary}</p>
            <button class="complete-panel__reset" type="button" on:click=move |_| on_reset.run(())>
                "New Countdown"
            </button>
        </section>
    }
}
