//! Example questions offered on a fresh chat session.

use leptos::prelude::*;

use crate::state::chat::SUGGESTED_QUESTIONS;

/// Clickable example questions; `on_pick` receives the chosen text.
#[component]
pub fn SuggestionList(on_pick: Callback<String>) -> impl IntoView {
    view! {
        <div class="suggestions">
            <span class="suggestions__title">"Try asking:"</span>
            {SUGGESTED_QUESTIONS
                .into_iter()
                .map(|question| {
                    view! {
                        <button class="btn suggestions__item" on:click=move |_| on_pick.run(question.to_owned())>
                            {question}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
