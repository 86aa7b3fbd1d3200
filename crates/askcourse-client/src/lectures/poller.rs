//! Fixed-interval polling of the lecture list.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::{CourseApi, Lecture};

use super::handle::PollHandle;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LectureState {
    /// Latest successful fetch; `None` until the first one lands.
    pub lectures: Option<Vec<Lecture>>,
    /// Set while a poll loop is running.
    pub polling: bool,
    /// Description of the failure that halted the last loop.
    pub error: Option<String>,
}

/// Keeps a snapshot of the lecture list fresh.
///
/// Each fetch is scheduled only after the previous one completes, so
/// fetches never overlap. The loop stops on the first failure.
pub struct LecturePoller {
    api: Arc<dyn CourseApi>,
    interval: Duration,
    state: Arc<watch::Sender<LectureState>>,
}

impl LecturePoller {
    pub fn new(api: Arc<dyn CourseApi>) -> Self {
        let (state, _) = watch::channel(LectureState::default());
        Self {
            api,
            interval: DEFAULT_POLL_INTERVAL,
            state: Arc::new(state),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Fetch immediately and keep polling, unless a loop is already running.
    ///
    /// A loop that halted on an error can be restarted by calling this
    /// again. Must be called from within a tokio runtime.
    pub fn start(&self) -> Option<PollHandle> {
        let started = self.state.send_if_modified(|s| {
            if s.polling {
                return false;
            }
            s.polling = true;
            s.error = None;
            true
        });
        if !started {
            debug!("lecture polling already running");
            return None;
        }

        info!(interval_ms = self.interval.as_millis() as u64, "lecture polling started");
        let token = CancellationToken::new();
        let task = tokio::spawn(poll_loop(
            Arc::clone(&self.api),
            Arc::clone(&self.state),
            self.interval,
            token.clone(),
        ));
        Some(PollHandle { token, task })
    }

    pub fn state(&self) -> LectureState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LectureState> {
        self.state.subscribe()
    }

    pub fn lectures(&self) -> Option<Vec<Lecture>> {
        self.state.borrow().lectures.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }
}

async fn poll_loop(
    api: Arc<dyn CourseApi>,
    state: Arc<watch::Sender<LectureState>>,
    interval: Duration,
    token: CancellationToken,
) {
    loop {
        match api.lectures().await {
            Ok(lectures) => {
                debug!(count = lectures.len(), "lecture snapshot");
                state.send_modify(|s| s.lectures = Some(lectures));
            }
            Err(e) => {
                warn!(error = %e, "lecture poll failed, polling stopped");
                state.send_modify(|s| {
                    s.error = Some(e.to_string());
                    s.polling = false;
                });
                return;
            }
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    info!("lecture polling cancelled");
    state.send_modify(|s| s.polling = false);
}
