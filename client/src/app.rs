//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::APP_TITLE;
use crate::pages::home::HomePage;
use crate::state::{facts::FactsState, form::FormState};

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
/// Owns the fact list, active filter, form visibility, and loading flag via
/// `FactsState`, plus the compose draft via `FormState`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let facts = RwSignal::new(FactsState::default());
    let form = RwSignal::new(FormState::default());
    provide_context(facts);
    provide_context(form);

    view! {
        <Title text=APP_TITLE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
