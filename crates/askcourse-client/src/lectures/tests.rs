use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::fake::{lecture, status, FakeApi};

#[test]
fn no_snapshot_before_start() {
    let poller = LecturePoller::new(Arc::new(FakeApi::new()));
    assert_eq!(poller.state(), LectureState::default());
    assert!(poller.lectures().is_none());
}

#[tokio::test(start_paused = true)]
async fn each_poll_replaces_the_snapshot() {
    let api = Arc::new(
        FakeApi::new()
            .with_lectures(Ok(vec![lecture("done", "L1", "u1")]))
            .with_lectures(Ok(Vec::new()))
            .with_lectures(Err(status(503))),
    );
    let poller = LecturePoller::new(api.clone());
    let mut rx = poller.subscribe();

    let handle = poller.start().expect("poll loop started");

    let first = rx
        .wait_for(|s| s.lectures.is_some())
        .await
        .unwrap()
        .clone();
    assert_eq!(first.lectures, Some(vec![lecture("done", "L1", "u1")]));
    assert!(first.polling);

    let second = rx
        .wait_for(|s| s.lectures.as_ref().is_some_and(|l| l.is_empty()))
        .await
        .unwrap()
        .clone();
    assert_eq!(second.lectures, Some(Vec::new()));

    handle.wait().await;

    let calls = api.lecture_calls();
    assert_eq!(calls.len(), 3);
    assert!(calls[1] - calls[0] >= DEFAULT_POLL_INTERVAL);
    assert!(calls[2] - calls[1] >= DEFAULT_POLL_INTERVAL);

    // The failed third fetch keeps the last good snapshot.
    let end = poller.state();
    assert_eq!(end.lectures, Some(Vec::new()));
    assert_eq!(end.error.as_deref(), Some("Service Unavailable"));
    assert!(!end.polling);
}

#[tokio::test(start_paused = true)]
async fn first_fetch_failure_halts_polling() {
    let api = Arc::new(FakeApi::new().with_lectures(Err(status(503))));
    let poller = LecturePoller::new(api.clone());

    poller.start().expect("poll loop started").wait().await;

    let state = poller.state();
    assert!(state.lectures.is_none());
    assert_eq!(state.error.as_deref(), Some("Service Unavailable"));
    assert!(!state.polling);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(api.lecture_calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn start_is_ignored_while_polling() {
    let api = Arc::new(
        FakeApi::new()
            .with_lectures(Ok(Vec::new()))
            .with_lectures(Err(status(500))),
    );
    let poller = LecturePoller::new(api.clone());

    let handle = poller.start().expect("poll loop started");
    assert!(poller.start().is_none());

    handle.wait().await;
    assert_eq!(api.lecture_calls().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn restart_after_error_clears_it() {
    let api = Arc::new(
        FakeApi::new()
            .with_lectures(Err(status(503)))
            .with_lectures(Ok(vec![lecture("processing", "L2", "u2")])),
    );
    let poller = LecturePoller::new(api.clone());
    poller.start().expect("first loop").wait().await;
    assert!(poller.error().is_some());

    let mut rx = poller.subscribe();
    let handle = poller.start().expect("restarted after error");
    assert!(poller.error().is_none());

    rx.wait_for(|s| s.lectures.is_some()).await.unwrap();
    assert_eq!(
        poller.lectures(),
        Some(vec![lecture("processing", "L2", "u2")])
    );
    handle.cancel();
    handle.wait().await;
}

#[tokio::test(start_paused = true)]
async fn custom_interval_is_honoured() {
    let api = Arc::new(
        FakeApi::new()
            .with_lectures(Ok(Vec::new()))
            .with_lectures(Err(status(500))),
    );
    let poller = LecturePoller::new(api.clone()).with_interval(Duration::from_millis(250));

    poller.start().expect("poll loop started").wait().await;

    let calls = api.lecture_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[1] - calls[0] >= Duration::from_millis(250));
    assert!(calls[1] - calls[0] < DEFAULT_POLL_INTERVAL);
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_scheduling() {
    let api = Arc::new(
        FakeApi::new()
            .with_lectures(Ok(vec![lecture("done", "L1", "u1")]))
            .with_lectures(Ok(Vec::new())),
    );
    let poller = LecturePoller::new(api.clone());
    let mut rx = poller.subscribe();

    let handle = poller.start().expect("poll loop started");
    rx.wait_for(|s| s.lectures.is_some()).await.unwrap();
    handle.cancel();
    handle.wait().await;

    let state = poller.state();
    assert!(!state.polling);
    assert!(state.error.is_none());
    assert_eq!(state.lectures, Some(vec![lecture("done", "L1", "u1")]));
    assert_eq!(api.lecture_calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_keeps_polling() {
    let api = Arc::new(
        FakeApi::new()
            .with_lectures(Ok(Vec::new()))
            .with_lectures(Ok(Vec::new()))
            .with_lectures(Err(status(500))),
    );
    let poller = LecturePoller::new(api.clone());
    let mut rx = poller.subscribe();

    drop(poller.start().expect("poll loop started"));

    rx.wait_for(|s| s.error.is_some()).await.unwrap();
    assert_eq!(api.lecture_calls().len(), 3);
}
