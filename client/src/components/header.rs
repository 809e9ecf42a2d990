//! App header with the title and the compose-form toggle.

use leptos::prelude::*;

use crate::state::facts::FactsState;

pub const APP_TITLE: &str = "Today I Learned";

#[component]
pub fn Header() -> impl IntoView {
    let facts = expect_context::<RwSignal<FactsState>>();

    view! {
        <header class="header">
            <div class="logo">
                <h1>{APP_TITLE}</h1>
            </div>
            <button class="btn btn-large btn-open" on:click=move |_| facts.update(FactsState::toggle_form)>
                {move || if facts.with(|s| s.show_form) { "Close" } else { "Share a fact" }}
            </button>
        </header>
    }
}
