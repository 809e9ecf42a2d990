//! Fact list and individual fact rows with vote buttons.

use facts::{Fact, VoteKind};
use leptos::prelude::*;

use crate::state::facts::{FactsState, count_label};

pub const EMPTY_MESSAGE: &str = "No facts for this category yet! Create the first one ✌️";

/// Renders the facts visible under the active filter plus a count footer.
/// The footer counts the same vector the rows are rendered from.
#[component]
pub fn FactList() -> impl IntoView {
    let facts = expect_context::<RwSignal<FactsState>>();
    let visible = Memo::new(move |_| facts.with(FactsState::visible));

    view! {
        <section>
            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=|| view! { <p class="message">{EMPTY_MESSAGE}</p> }
            >
                <ul class="facts-list">
                    <For
                        each=move || visible.get()
                        key=|fact| (fact.id, fact.votes_interesting, fact.votes_mindblowing, fact.votes_false)
                        children=move |fact: Fact| view! { <FactItem fact=fact/> }
                    />
                </ul>
                <p class="facts-count">{move || count_label(visible.with(Vec::len))}</p>
            </Show>
        </section>
    }
}

#[component]
pub fn FactItem(fact: Fact) -> impl IntoView {
    let facts = expect_context::<RwSignal<FactsState>>();
    let id = fact.id;
    let category = fact.category;
    let vote_pending = move || facts.with(|s| s.voting.is_some());

    let on_vote = move |kind: VoteKind| {
        let mut started = false;
        facts.update(|s| started = s.begin_vote(id));
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::vote(id, kind).await;
            if let Err(e) = &result {
                log::warn!("vote on fact {id} failed: {e}");
            }
            facts.update(|s| s.finish_vote(result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = kind;
        }
    };

    let buttons = VoteKind::ALL
        .into_iter()
        .map(|kind| {
            let count = fact.votes(kind);
            view! {
                <button on:click=move |_| on_vote(kind) disabled=vote_pending title=kind.as_str()>
                    {format!("{} {count}", kind.emoji())}
                </button>
            }
        })
        .collect_view();

    view! {
        <li class="fact">
            <p>
                {fact.is_disputed().then(|| view! { <span class="disputed">"[⛔️ DISPUTED] "</span> })}
                {fact.text.clone()}
                " "
                <a class="source" href=fact.source.clone() target="_blank" rel="noopener noreferrer">
                    "(Source)"
                </a>
            </p>
            <span class="tag" style:background-color=category.color()>
                {category.name()}
            </span>
            <div class="vote-buttons">{buttons}</div>
        </li>
    }
}
