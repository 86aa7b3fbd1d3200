//! Wire types and the HTTP client for the answer/lecture service.

mod http;

pub use http::HttpCourseApi;

use askcourse_common::SessionId;
use serde::{Deserialize, Serialize};

/// Body of `POST /answer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub question: String,
    pub chat_session_id: SessionId,
}

/// Successful `POST /answer` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    /// Citation references; the backend owns their shape.
    #[serde(default)]
    pub sources: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub is_plausible: Option<bool>,
}

/// One row of `GET /lectures`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    pub status: String,
    pub title: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. Displays as the status description alone, since
    /// that is what gets shown to the user.
    #[error("{reason}")]
    Status { code: u16, reason: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        Self::Status {
            code: status.as_u16(),
            reason,
        }
    }
}
