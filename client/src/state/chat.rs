//! Chat transcript and request gating for the assistant conversation.
//!
//! DESIGN
//! ======
//! The transcript is append-only and always starts with a greeting. A send
//! moves the session from [`ChatPhase::Idle`] to [`ChatPhase::Awaiting`] and
//! hands back the [`ChatRequest`] to put on the wire; the page completes the
//! cycle with the round-trip result. While awaiting, further sends are
//! ignored, so each user message is directly followed by its reply.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::ApiError;
use crate::net::types::{ChatRequest, ChatResponse};
use crate::util::clock;

/// Synthetic assistant message that seeds every transcript.
pub const GREETING: &str = "Hi, I'm Hugo, your procurement assistant. Ask me about build capacity, \
stock levels, stockout risks, or supplier performance.";

/// Reply shown when a chat round trip fails.
pub const CHAT_ERROR_MESSAGE: &str = "Sorry, I couldn't get an answer from the procurement service. \
Please try asking again.";

/// Example questions offered before the first exchange.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "How many S2_V1 scooters can we build right now?",
    "Which materials are at risk of stocking out this month?",
    "Which suppliers have the worst on-time delivery rate?",
    "What should we reorder this week?",
];

/// Whether a chat request is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatPhase {
    #[default]
    Idle,
    Awaiting,
}

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
    /// Structured data returned alongside an assistant answer.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// Set on the fallback reply of a failed request.
    #[serde(default)]
    pub error: bool,
}

impl ChatMessage {
    fn new(role: ChatRole, content: String, timestamp: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
            timestamp,
            data: None,
            error: false,
        }
    }
}

/// Chat session state: transcript, input buffer, and request phase.
#[derive(Clone, Debug)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    phase: ChatPhase,
    /// Text currently typed into the prompt box.
    pub input: String,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(clock::now_ms())
    }
}

impl ChatState {
    /// Start a session whose greeting is stamped `now_ms`.
    pub fn new(now_ms: f64) -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::Assistant, GREETING.to_owned(), now_ms)],
            phase: ChatPhase::Idle,
            input: String::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of transcript entries. The transcript is append-only, so this
    /// changes exactly when a message is added.
    pub fn transcript_len(&self) -> usize {
        self.messages.len()
    }

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_awaiting(&self) -> bool {
        self.phase == ChatPhase::Awaiting
    }

    /// Suggestions are offered only while the greeting is the sole message.
    pub fn suggestions_visible(&self) -> bool {
        self.messages.len() == 1
    }

    /// Whether the current input buffer could be sent right now.
    pub fn can_send(&self) -> bool {
        self.phase == ChatPhase::Idle && !self.input.trim().is_empty()
    }

    /// Begin a send cycle for `question`.
    ///
    /// Appends the user message, clears the input buffer, and enters
    /// `Awaiting`. Returns `None` without touching any state if the question
    /// is blank or a request is already in flight.
    pub fn send(&mut self, question: &str, now_ms: f64) -> Option<ChatRequest> {
        let question = question.trim();
        if question.is_empty() || self.phase == ChatPhase::Awaiting {
            return None;
        }
        self.messages
            .push(ChatMessage::new(ChatRole::User, question.to_owned(), now_ms));
        self.input.clear();
        self.phase = ChatPhase::Awaiting;
        Some(ChatRequest { question: question.to_owned() })
    }

    /// Send whatever is in the input buffer.
    pub fn send_input(&mut self, now_ms: f64) -> Option<ChatRequest> {
        let question = self.input.clone();
        self.send(&question, now_ms)
    }

    /// Finish the in-flight cycle with its result, appending exactly one
    /// assistant message. Returns `false` (and changes nothing) when no
    /// request is in flight.
    pub fn complete(&mut self, result: Result<ChatResponse, ApiError>, now_ms: f64) -> bool {
        if self.phase != ChatPhase::Awaiting {
            return false;
        }
        let reply = match result {
            Ok(resp) => {
                let mut msg = ChatMessage::new(ChatRole::Assistant, resp.answer, now_ms);
                msg.data = resp.data;
                msg
            }
            Err(e) => {
                log::warn!("chat request failed: {e}");
                let mut msg = ChatMessage::new(ChatRole::Assistant, CHAT_ERROR_MESSAGE.to_owned(), now_ms);
                msg.error = true;
                msg
            }
        };
        self.messages.push(reply);
        self.phase = ChatPhase::Idle;
        true
    }
}
