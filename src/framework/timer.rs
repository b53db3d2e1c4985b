//! One-shot timers that post a message to an actor at an absolute deadline.
//!
//! A timer never touches actor state. When it fires it builds a request and
//! posts it onto the actor's queue, so the work it triggers is serialized with
//! everything else the actor does. Timers hold only a weak sender: once the
//! actor has shut down, a firing timer is treated as cancelled.

use crate::framework::clock::Clock;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Spawns a task that sleeps until `deadline` and then posts `make(fired_at)`
/// to `target`, unless the actor behind `target` is already gone.
pub fn post_at<R, F>(
    target: mpsc::WeakSender<R>,
    clock: Arc<dyn Clock>,
    deadline: DateTime<Utc>,
    make: F,
) -> JoinHandle<()>
where
    R: Send + 'static,
    F: FnOnce(DateTime<Utc>) -> R + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(clock.until(deadline)).await;

        let Some(sender) = target.upgrade() else {
            debug!(%deadline, "Timer target closed, skipping");
            return;
        };
        let fired_at = clock.now();
        if sender.send(make(fired_at)).await.is_err() {
            debug!(%deadline, "Timer target closed while posting, skipping");
        }
    })
}
