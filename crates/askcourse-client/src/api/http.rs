//! reqwest-backed `CourseApi`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::CourseApi;

use super::{AnswerRequest, AnswerResponse, ApiError, Lecture};

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client for a service rooted at `base_url`.
pub struct HttpCourseApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpCourseApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeouts(base_url, DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeouts(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Turn a response into `T`, or into the status error without reading the body.
async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::from_status(status));
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait]
impl CourseApi for HttpCourseApi {
    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerResponse, ApiError> {
        let url = self.endpoint("answer");
        debug!(%url, session = %request.chat_session_id, "answer request");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    async fn lectures(&self) -> Result<Vec<Lecture>, ApiError> {
        let url = self.endpoint("lectures");
        debug!(%url, "lectures request");

        let response = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }
}
