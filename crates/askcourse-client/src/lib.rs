//! Client-side controllers for the course question-answering service.
//!
//! - [`ChatController`]: session id, transcript, and request sequencing
//!   against `POST /answer`
//! - [`LecturePoller`]: fixed-interval polling of `GET /lectures`
//!
//! Both publish their state through `tokio::sync::watch` channels so a
//! presentation layer can subscribe to changes. Failures never escape as
//! `Err`; they are recorded in the state's `error` field.

pub mod api;
pub mod chat;
pub mod lectures;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;

pub use api::{AnswerRequest, AnswerResponse, ApiError, HttpCourseApi, Lecture};
pub use chat::{ChatController, ChatState, Message, Sender};
pub use lectures::{LecturePoller, LectureState, PollHandle, DEFAULT_POLL_INTERVAL};

/// The backend the controllers talk to.
#[async_trait]
pub trait CourseApi: Send + Sync {
    /// Ask a question within a chat session.
    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerResponse, ApiError>;

    /// Fetch the full lecture list.
    async fn lectures(&self) -> Result<Vec<Lecture>, ApiError>;
}
