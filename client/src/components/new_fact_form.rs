//! Compose form for sharing a new fact.
//!
//! DESIGN
//! ======
//! Validation runs before any request is made, so an invalid draft never
//! leaves the browser and the form stays open with the draft intact. A
//! successful insert prepends the stored row to the list and closes the form.

use facts::Category;
use leptos::prelude::*;

use crate::state::facts::FactsState;
use crate::state::form::FormState;

#[component]
pub fn NewFactForm() -> impl IntoView {
    let facts = expect_context::<RwSignal<FactsState>>();
    let form = expect_context::<RwSignal<FormState>>();
    let uploading = move || form.with(|f| f.uploading);
    let over_limit = move || form.with(FormState::remaining) < 0;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut submission = None;
        form.update(|f| submission = f.begin_submit());
        let Some(draft) = submission else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_fact(&draft).await {
                Ok(fact) => {
                    log::info!("fact {} created", fact.id);
                    facts.update(|s| s.add_created(fact));
                    form.update(FormState::reset);
                }
                Err(e) => form.update(|f| f.fail_submit(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, facts);
        }
    };

    view! {
        <form class="fact-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Share a fact with the world..."
                prop:value=move || form.with(|f| f.draft.text.clone())
                on:input=move |ev| form.update(|f| f.draft.text = event_target_value(&ev))
                disabled=uploading
            />
            <span class="fact-form__remaining" class:fact-form__remaining--over=over_limit>
                {move || form.with(FormState::remaining)}
            </span>
            <input
                type="text"
                placeholder="Trustworthy source..."
                prop:value=move || form.with(|f| f.draft.source.clone())
                on:input=move |ev| form.update(|f| f.draft.source = event_target_value(&ev))
                disabled=uploading
            />
            <select
                prop:value=move || form.with(|f| f.draft.category.clone().unwrap_or_default())
                on:change=move |ev| form.update(|f| f.set_category(&event_target_value(&ev)))
                disabled=uploading
            >
                <option value="">"Choose category:"</option>
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        view! { <option value=category.name()>{category.name().to_uppercase()}</option> }
                    })
                    .collect_view()}
            </select>
            <button class="btn btn-large" disabled=uploading>
                "Post"
            </button>
            <Show when=move || form.with(|f| f.error.is_some())>
                <p class="fact-form__error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
            </Show>
        </form>
    }
}
