//! # Mock Framework
//!
//! Utilities for testing code that talks to an actor without spawning the actor.
//!
//! # Testing Strategy
//! In unit tests we don't want to spin up a full [`SerialActor`](crate::framework::SerialActor)
//! if we are only testing the code that *sends* requests (a courier, for instance).
//!
//! Instead, [`create_mock_sender`] returns a sender wired to a receiver we control.
//! The test then pulls requests off that receiver with [`expect_request`], asserts
//! they are the right shape and answers through the embedded response channel.
//! This lets us simulate the actor's behavior (success, misses, closed channels)
//! deterministically.

use crate::framework::RequestSender;
use tokio::sync::mpsc;

/// Creates a sender and the receiver end that stands in for the actor.
pub fn create_mock_sender<R: Send + 'static>(
    buffer_size: usize,
) -> (RequestSender<R>, mpsc::Receiver<R>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RequestSender::new(sender), receiver)
}

/// Waits for the next request and hands it to `select`, which returns `Some`
/// only when the request has the expected shape.
///
/// Returns `None` if the channel closed or the request did not match.
pub async fn expect_request<R, T>(
    receiver: &mut mpsc::Receiver<R>,
    select: impl FnOnce(R) -> Option<T>,
) -> Option<T> {
    receiver.recv().await.and_then(select)
}
