//! Sidebar of category buttons that narrows the fact list.
//!
//! Selecting a button only changes `FactsState::filter`; the home page
//! watches the filter and re-fetches.

use facts::{Category, CategoryFilter};
use leptos::prelude::*;

use crate::state::facts::FactsState;

#[component]
pub fn CategoryFilters() -> impl IntoView {
    let facts = expect_context::<RwSignal<FactsState>>();
    let select = move |filter: CategoryFilter| {
        facts.update(|s| {
            s.select_filter(filter);
        });
    };
    let is_active = move |filter: CategoryFilter| facts.with(|s| s.filter == filter);

    view! {
        <aside>
            <ul>
                <li class="category">
                    <button
                        class="btn btn-all-categories"
                        class:btn--active=move || is_active(CategoryFilter::All)
                        on:click=move |_| select(CategoryFilter::All)
                    >
                        "All"
                    </button>
                </li>
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        let filter = CategoryFilter::Only(category);
                        view! {
                            <li class="category">
                                <button
                                    class="btn btn-category"
                                    class:btn--active=move || is_active(filter)
                                    style:background-color=category.color()
                                    on:click=move |_| select(filter)
                                >
                                    {category.name()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
