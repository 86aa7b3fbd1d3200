//! Handle to a running poll loop.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::warn;

/// Returned by [`LecturePoller::start`](super::LecturePoller::start).
///
/// Dropping the handle detaches the loop; it keeps running until a fetch
/// fails.
pub struct PollHandle {
    pub(super) token: CancellationToken,
    pub(super) task: JoinHandle<()>,
}

impl PollHandle {
    /// Stop scheduling further fetches. A fetch already in flight still
    /// completes and its result is applied.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Wait for the loop to end.
    pub async fn wait(self) {
        if let Err(e) = self.task.await {
            warn!("lecture poll task ended abnormally: {e}");
        }
    }
}
