//! Chat view: transcript, example questions, and the prompt box.
//!
//! SYSTEM CONTEXT
//! ==============
//! Turns user input into a `ChatState::send` call, posts the returned request
//! to `/api/chat`, and completes the cycle with whatever comes back. The
//! `Awaiting` phase disables the prompt so only one question is in flight.

use leptos::prelude::*;

use crate::components::chat_message::ChatMessageView;
use crate::components::suggestion_list::SuggestionList;
use crate::net::types::ChatRequest;
use crate::state::chat::ChatState;
use crate::util::clock;

/// Chat page bound to the app-level `ChatState` context.
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keyed on length: keystrokes touch `chat` but never re-clone or
    // re-render the transcript.
    let transcript_len = Memo::new(move |_| chat.with(ChatState::transcript_len));
    let awaiting = Memo::new(move |_| chat.with(ChatState::is_awaiting));
    let suggestions_visible = Memo::new(move |_| chat.with(ChatState::suggestions_visible));

    Effect::new(move || {
        let _ = transcript_len.get();
        let _ = awaiting.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let submit = move |question: Option<String>| {
        let now = clock::now_ms();
        let request = chat
            .try_update(|c| match question {
                Some(q) => c.send(&q, now),
                None => c.send_input(now),
            })
            .flatten();
        if let Some(request) = request {
            dispatch(chat, request);
        }
    };

    let on_pick = Callback::new(move |question: String| submit(Some(question)));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit(None);
        }
    };

    view! {
        <section class="chat-page">
            <div class="chat-page__messages" node_ref=messages_ref>
                {move || {
                    let _ = transcript_len.get();
                    chat.with_untracked(|c| c.messages().to_vec())
                        .into_iter()
                        .map(|message| view! { <ChatMessageView message=message/> })
                        .collect::<Vec<_>>()
                }}
                {move || awaiting.get().then(|| view! { <div class="chat-page__loading">"Hugo is thinking..."</div> })}
            </div>

            <Show when=move || suggestions_visible.get()>
                <SuggestionList on_pick=on_pick/>
            </Show>

            <div class="chat-page__input-row">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Ask about inventory, suppliers, or build capacity..."
                    disabled=move || awaiting.get()
                    prop:value=move || chat.with(|c| c.input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        chat.update(|c| c.input = value);
                    }
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-page__send"
                    on:click=move |_| submit(None)
                    disabled=move || !chat.with(ChatState::can_send)
                >
                    "Send"
                </button>
            </div>
        </section>
    }
}

/// Post `request` and fold the result back into the session.
fn dispatch(chat: RwSignal<ChatState>, request: ChatRequest) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::post_chat(&request).await;
            chat.update(|c| {
                c.complete(result, clock::now_ms());
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, request);
    }
}
