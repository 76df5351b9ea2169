//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use countdown::controller::Controller;

use crate::pages::countdown::CountdownPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared countdown controller context and routes the single
/// page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let controller = RwSignal::new(Controller::new());
    provide_context(controller);

    view! {
        <Stylesheet id="leptos" href="/pkg/countdown-web.css"/>
        <Title text="Countdown Timer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CountdownPage/>
            </Routes>
        </Router>
    }
}
