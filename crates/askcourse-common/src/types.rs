use serde::{Deserialize, Serialize};

/// Bot message every fresh chat transcript starts with.
pub const DEFAULT_GREETING: &str = "Hi! What can I help you with?";

/// What to do with an answer that arrives after the chat it was asked in
/// has been reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleReplyPolicy {
    /// Append the reply to whatever transcript exists when it lands.
    #[default]
    Append,
    /// Drop the reply if the session id changed while it was in flight.
    Discard,
}
