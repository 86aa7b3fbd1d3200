//! Backend connection settings.

use serde::{Deserialize, Serialize};

/// Where the answer/lecture service lives and how long to wait on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; `/answer` and `/lectures` are appended to it.
    pub base_url: String,
    pub connect_timeout_secs: u32,
    pub request_timeout_secs: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
        }
    }
}
