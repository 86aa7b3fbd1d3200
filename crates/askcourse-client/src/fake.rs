//! Scripted in-memory `CourseApi` for controller tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;
use tokio::time::Instant;

use crate::{AnswerRequest, AnswerResponse, ApiError, CourseApi, Lecture};

#[derive(Default)]
pub(crate) struct FakeApi {
    answers: Mutex<VecDeque<Result<AnswerResponse, ApiError>>>,
    lectures: Mutex<VecDeque<Result<Vec<Lecture>, ApiError>>>,
    questions: Mutex<Vec<AnswerRequest>>,
    lecture_calls: Mutex<Vec<Instant>>,
    gated: bool,
    received: Notify,
    gate: Notify,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Hold every answer until [`FakeApi::release`] is called.
    pub(crate) fn gated(mut self) -> Self {
        self.gated = true;
        self
    }

    pub(crate) fn with_answer(self, answer: Result<AnswerResponse, ApiError>) -> Self {
        self.answers.lock().unwrap().push_back(answer);
        self
    }

    pub(crate) fn with_lectures(self, lectures: Result<Vec<Lecture>, ApiError>) -> Self {
        self.lectures.lock().unwrap().push_back(lectures);
        self
    }

    /// Resolves once an answer request has reached the fake.
    pub(crate) async fn question_received(&self) {
        self.received.notified().await;
    }

    pub(crate) fn release(&self) {
        self.gate.notify_one();
    }

    pub(crate) fn questions(&self) -> Vec<AnswerRequest> {
        self.questions.lock().unwrap().clone()
    }

    pub(crate) fn lecture_calls(&self) -> Vec<Instant> {
        self.lecture_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CourseApi for FakeApi {
    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerResponse, ApiError> {
        self.questions.lock().unwrap().push(request.clone());
        self.received.notify_one();
        if self.gated {
            self.gate.notified().await;
        }
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted answer".into())))
    }

    async fn lectures(&self) -> Result<Vec<Lecture>, ApiError> {
        self.lecture_calls.lock().unwrap().push(Instant::now());
        self.lectures
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted lectures".into())))
    }
}

pub(crate) fn answer(text: &str) -> Result<AnswerResponse, ApiError> {
    Ok(AnswerResponse {
        answer: text.into(),
        sources: Some(Vec::new()),
        is_plausible: Some(true),
    })
}

pub(crate) fn status(code: u16) -> ApiError {
    ApiError::from_status(reqwest::StatusCode::from_u16(code).unwrap())
}

pub(crate) fn lecture(status: &str, title: &str, source: &str) -> Lecture {
    Lecture {
        status: status.into(),
        title: title.into(),
        source: source.into(),
    }
}
