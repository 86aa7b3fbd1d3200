//! Transcript types and the busy-flag guard.

use askcourse_common::SessionId;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::AnswerResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    /// Citation references (bot messages only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<serde_json::Value>>,
    /// Backend confidence flag (bot messages only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_plausible: Option<bool>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            sources: None,
            is_plausible: None,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            sources: None,
            is_plausible: None,
        }
    }

    pub(crate) fn from_answer(reply: AnswerResponse) -> Self {
        Self {
            sender: Sender::Bot,
            text: reply.answer.trim().to_string(),
            sources: reply.sources,
            is_plausible: reply.is_plausible,
        }
    }
}

/// Everything a presentation layer needs to draw the chat.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    pub session_id: SessionId,
    /// Always starts with the greeting.
    pub transcript: Vec<Message>,
    /// Set while a question is in flight.
    pub busy: bool,
    /// Description of the last failed request, cleared by the next one.
    pub error: Option<String>,
}

impl ChatState {
    pub(crate) fn fresh(greeting: &str) -> Self {
        Self {
            session_id: SessionId::new(),
            transcript: vec![Message::bot(greeting)],
            busy: false,
            error: None,
        }
    }
}

/// Clears `busy` on drop, so the flag is released even if the `send`
/// future is dropped before the reply arrives.
pub(crate) struct BusyGuard<'a> {
    state: &'a watch::Sender<ChatState>,
}

impl<'a> BusyGuard<'a> {
    pub(crate) fn new(state: &'a watch::Sender<ChatState>) -> Self {
        Self { state }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state
            .send_if_modified(|s| std::mem::replace(&mut s.busy, false));
    }
}
