//! A single transcript entry.
//!
//! Assistant answers are rendered as markdown; user text and the error
//! fallback are shown verbatim. Structured data attached to an answer is
//! tucked into a collapsed `<details>` block.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatRole};
use crate::util::format::format_attached_data;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatMessageView(message: ChatMessage) -> impl IntoView {
    let is_assistant = message.role == ChatRole::Assistant;
    let is_error = message.error;
    let content = message.content;
    let attached = message.data.as_ref().map(format_attached_data);

    view! {
        <div
            class="chat-message"
            class:chat-message--user=!is_assistant
            class:chat-message--assistant=is_assistant
            class:chat-message--error=is_error
        >
            <div class="chat-message__content">
                {if is_assistant && !is_error {
                    let rendered = render_markdown_html(&content);
                    view! { <div class="chat-message__markdown" inner_html=rendered></div> }.into_any()
                } else {
                    view! { <span>{content}</span> }.into_any()
                }}
            </div>
            {attached
                .map(|json| {
                    view! {
                        <details class="chat-message__data">
                            <summary>"Data"</summary>
                            <pre>{json}</pre>
                        </details>
                    }
                })}
        </div>
    }
}
