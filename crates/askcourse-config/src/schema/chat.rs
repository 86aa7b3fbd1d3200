//! Chat session settings.

use askcourse_common::{StaleReplyPolicy, DEFAULT_GREETING};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Bot message every fresh transcript starts with.
    pub greeting: String,
    pub stale_replies: StaleReplyPolicy,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.into(),
            stale_replies: StaleReplyPolicy::Append,
        }
    }
}
