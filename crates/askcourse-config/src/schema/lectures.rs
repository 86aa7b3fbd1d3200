//! Lecture polling settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LecturesConfig {
    /// Delay between the end of one fetch and the start of the next.
    pub poll_interval_ms: u64,
}

impl Default for LecturesConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2000,
        }
    }
}
