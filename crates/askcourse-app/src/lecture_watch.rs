//! Live lecture table.

use std::future::Future;

use askcourse_client::{Lecture, LecturePoller};
use tracing::{info, warn};

use crate::render;

/// Print the lecture table whenever it changes, until polling halts on an
/// error or the user presses Ctrl-C.
pub async fn run(poller: &LecturePoller) -> askcourse_common::Result<()> {
    run_until(poller, || async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("cannot listen for Ctrl-C: {e}");
        }
    })
    .await
}

/// Like [`run`], with `interrupt` producing one future per interrupt.
///
/// The first interrupt stops scheduling fetches and waits for the loop.
/// A second one abandons a fetch that is still in flight.
async fn run_until<F, Fut>(poller: &LecturePoller, mut interrupt: F) -> askcourse_common::Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    let mut rx = poller.subscribe();
    let Some(handle) = poller.start() else {
        return Ok(());
    };
    println!("Loading lectures...");

    let interrupted = interrupt();
    tokio::pin!(interrupted);

    let mut shown: Option<Vec<Lecture>> = None;
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                if let Some(table) = render::table_update(shown.as_deref(), state.lectures.as_deref()) {
                    print!("{table}");
                    shown = state.lectures;
                }
                if let Some(error) = state.error {
                    eprintln!("Error: {error}");
                    break;
                }
            }
            _ = &mut interrupted => {
                info!("interrupted, stopping lecture polling");
                handle.cancel();
                break;
            }
        }
    }

    tokio::select! {
        _ = handle.wait() => {}
        _ = interrupt() => warn!("interrupted again, abandoning in-flight lecture fetch"),
    }
    Ok(())
}
