//! Lecture list polling.

mod handle;
mod poller;

#[cfg(test)]
mod tests;

pub use handle::PollHandle;
pub use poller::{LecturePoller, LectureState, DEFAULT_POLL_INTERVAL};
