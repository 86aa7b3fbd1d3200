//! The chat controller: send, regenerate, reset.

use std::sync::Arc;

use askcourse_common::{new_correlation_id, SessionId, StaleReplyPolicy, DEFAULT_GREETING};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{AnswerRequest, CourseApi};

use super::types::{BusyGuard, ChatState, Message, Sender};

/// Owns one chat session against the answer endpoint.
///
/// All operations take `&self`; a `reset` may run while a `send` is
/// suspended on the network. The controller does not reject overlapping
/// sends: callers are expected to check [`ChatState::busy`] first.
pub struct ChatController {
    api: Arc<dyn CourseApi>,
    greeting: String,
    stale_replies: StaleReplyPolicy,
    state: watch::Sender<ChatState>,
}

impl ChatController {
    pub fn new(api: Arc<dyn CourseApi>) -> Self {
        let (state, _) = watch::channel(ChatState::fresh(DEFAULT_GREETING));
        Self {
            api,
            greeting: DEFAULT_GREETING.to_string(),
            stale_replies: StaleReplyPolicy::default(),
            state,
        }
    }

    /// Replace the seed greeting, restarting the transcript with it.
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        let seed = Message::bot(self.greeting.clone());
        self.state.send_modify(|s| s.transcript = vec![seed]);
        self
    }

    pub fn with_stale_replies(mut self, policy: StaleReplyPolicy) -> Self {
        self.stale_replies = policy;
        self
    }

    /// Ask `text`, appending it to `history` if given, else to the current
    /// transcript. The reply, or the error, lands in the state.
    pub async fn send(&self, text: impl Into<String>, history: Option<Vec<Message>>) {
        let text = text.into();

        let mut issued_under = None;
        self.state.send_modify(|s| {
            let mut transcript = history.unwrap_or_else(|| std::mem::take(&mut s.transcript));
            transcript.push(Message::user(text.clone()));
            s.transcript = transcript;
            s.busy = true;
            s.error = None;
            issued_under = Some(s.session_id.clone());
        });
        let session_id = issued_under.unwrap_or_default();
        let _busy = BusyGuard::new(&self.state);

        let request_id = new_correlation_id();
        debug!(request = %request_id, session = %session_id, "asking question");

        let request = AnswerRequest {
            question: text,
            chat_session_id: session_id.clone(),
        };
        let outcome = self.api.answer(&request).await;

        let policy = self.stale_replies;
        self.state.send_modify(|s| {
            s.busy = false;
            if s.session_id != session_id && policy == StaleReplyPolicy::Discard {
                warn!(
                    request = %request_id,
                    issued_under = %session_id,
                    current = %s.session_id,
                    "discarding reply for a reset session"
                );
                return;
            }
            match outcome {
                Ok(reply) => {
                    debug!(request = %request_id, "answer received");
                    s.transcript.push(Message::from_answer(reply));
                }
                Err(e) => {
                    warn!(request = %request_id, error = %e, "answer request failed");
                    s.error = Some(e.to_string());
                }
            }
        });
    }

    /// Replay the last user turn: drop it (and the bot reply after it, if
    /// any) and ask the same question again.
    ///
    /// Returns `false` without sending anything if there is no user turn to
    /// replay.
    pub async fn regenerate(&self) -> bool {
        let replay = replay_point(&self.state.borrow().transcript);
        match replay {
            Some((question, history)) => {
                self.send(question, Some(history)).await;
                true
            }
            None => {
                debug!("nothing to regenerate");
                false
            }
        }
    }

    /// Start a new chat: fresh session id, transcript back to the greeting,
    /// error cleared. An in-flight `send` is not aborted.
    pub fn reset(&self) {
        let seed = Message::bot(self.greeting.clone());
        let mut previous = None;
        self.state.send_modify(|s| {
            previous = Some(std::mem::replace(&mut s.session_id, SessionId::new()));
            s.transcript = vec![seed];
            s.error = None;
        });
        if let Some(previous) = previous {
            info!(%previous, current = %self.state.borrow().session_id, "chat reset");
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ChatState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ChatState> {
        self.state.subscribe()
    }

    pub fn session_id(&self) -> SessionId {
        self.state.borrow().session_id.clone()
    }

    pub fn transcript(&self) -> Vec<Message> {
        self.state.borrow().transcript.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }
}

/// The question to replay and the transcript to replay it onto.
fn replay_point(transcript: &[Message]) -> Option<(String, Vec<Message>)> {
    let last = transcript.last()?;
    let offset = usize::from(last.sender == Sender::Bot);
    let index = transcript.len().checked_sub(1 + offset)?;
    let target = &transcript[index];
    (target.sender == Sender::User).then(|| (target.text.clone(), transcript[..index].to_vec()))
}
