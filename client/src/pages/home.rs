//! Home page: header, compose form, category sidebar, and fact list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the fetch-on-mount flow. It watches the active category
//! filter and reloads the list from the server whenever it changes, so the
//! list always renders the latest server snapshot for that filter. A failed
//! fetch or vote leaves an inline message above the list.

use facts::CategoryFilter;
use leptos::prelude::*;

use crate::components::category_filters::CategoryFilters;
use crate::components::fact_list::FactList;
use crate::components::header::Header;
use crate::components::new_fact_form::NewFactForm;
use crate::state::facts::FactsState;
use crate::util::alert::load_failed_message;

#[component]
pub fn HomePage() -> impl IntoView {
    let facts = expect_context::<RwSignal<FactsState>>();

    // Only the filter is tracked; loading results must not re-trigger the fetch.
    let filter = Memo::new(move |_| facts.with(|s| s.filter));
    Effect::new(move || {
        let filter = filter.get();
        let mut seq = 0;
        facts.update(|s| seq = s.begin_load());
        load_facts(facts, filter, seq);
    });

    view! {
        <Header/>
        <Show when=move || facts.with(|s| s.show_form)>
            <NewFactForm/>
        </Show>
        <Show when=move || facts.with(|s| s.error.is_some())>
            <p class="message message--error">
                {move || facts.with(|s| s.error.as_deref().map(load_failed_message).unwrap_or_default())}
            </p>
        </Show>
        <Show when=move || facts.with(|s| s.vote_error.is_some())>
            <p class="message message--error">
                {move || facts.with(|s| s.vote_error.clone().unwrap_or_default())}
            </p>
        </Show>
        <main class="main">
            <CategoryFilters/>
            <Show
                when=move || !facts.with(|s| s.loading)
                fallback=|| view! { <p class="message">"Loading..."</p> }
            >
                <FactList/>
            </Show>
        </main>
    }
}

fn load_facts(facts: RwSignal<FactsState>, filter: CategoryFilter, seq: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_facts(filter).await;
        if let Err(e) = &result {
            crate::util::alert::blocking_alert(&load_failed_message(e));
        }
        facts.update(|s| {
            s.finish_load(seq, result);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (facts, filter, seq);
    }
}
