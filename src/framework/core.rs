//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the serialized state owners
//! in the simulation.
//!
//! ## Key Types
//!
//! - [`ActorState`]: The trait that any state owned by an actor must implement.
//! - [`SerialActor`]: The generic actor that owns the state and drains its queue.
//! - [`RequestSender`]: The cloneable handle used to talk to the actor.
//! - [`FrameworkError`]: Common channel errors (e.g., ActorClosed, ActorDropped).

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any state must implement to be owned by a [`SerialActor`].
///
/// # Architecture Note
/// The actor owns exactly one value implementing this trait and hands it every
/// request that arrives on its queue, one at a time. Because nothing else can
/// reach the state, `handle` never needs a `Mutex` even though requests come
/// from many tasks spread over the worker pool.
///
/// # Async & Context
/// The `Context` type is injected into every call to `handle`. It is supplied to
/// [`SerialActor::run`] rather than to [`SerialActor::new`] so that it can hold
/// things that only exist once the actor's own handle exists (a weak sender back
/// to the actor, for instance).
#[async_trait]
pub trait ActorState: Send + 'static {
    /// Message type accepted by the actor.
    type Request: Send + Debug + 'static;

    /// Runtime dependencies injected into every request.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Handle a single request. Replies travel through the oneshot senders
    /// embedded in the request itself.
    async fn handle(&mut self, request: Self::Request, ctx: &Self::Context);

    /// Called once after the last sender is gone and the queue is drained.
    fn on_shutdown(&mut self) {}
}

// =============================================================================
// 2. ERRORS & RESPONSES
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel embedded in requests.
pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a piece of state and serializes access to it.
///
/// **Concurrency Model**:
/// The actor's `run` loop is the only code that ever touches `state`. Requests
/// are queued in a bounded mpsc channel and processed strictly in arrival order,
/// so two requests never overlap even on a multi-threaded runtime.
pub struct SerialActor<S: ActorState> {
    receiver: mpsc::Receiver<S::Request>,
    state: S,
}

impl<S: ActorState> SerialActor<S> {
    /// Creates the actor around `state` and returns it with its sender.
    ///
    /// * `buffer_size` - capacity of the request queue. Senders wait when it is full.
    pub fn new(state: S, buffer_size: usize) -> (Self, RequestSender<S::Request>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        (actor, RequestSender::new(sender))
    }

    /// Runs the actor's event loop until every strong sender is dropped, then
    /// returns the final state.
    pub async fn run(mut self, context: S::Context) -> S {
        // Extract just the type name (e.g., "Kitchen" instead of "kitchen_sim::kitchen_actor::Kitchen")
        let actor = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(actor, "Actor started");

        let mut handled: u64 = 0;
        while let Some(request) = self.receiver.recv().await {
            debug!(actor, ?request, "Request");
            self.state.handle(request, &context).await;
            handled += 1;
        }

        self.state.on_shutdown();
        info!(actor, handled, "Shutdown");
        self.state
    }
}

// =============================================================================
// 4. THE GENERIC SENDER
// =============================================================================

/// A cloneable handle for posting requests to a [`SerialActor`].
pub struct RequestSender<R> {
    sender: mpsc::Sender<R>,
}

impl<R> Clone for RequestSender<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<R> Debug for RequestSender<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSender")
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

impl<R: Send + 'static> RequestSender<R> {
    pub fn new(sender: mpsc::Sender<R>) -> Self {
        Self { sender }
    }

    /// Sends a request built around a fresh response channel and waits for the reply.
    pub async fn request<T, E>(
        &self,
        build: impl FnOnce(Response<T, E>) -> R,
    ) -> Result<Result<T, E>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Sends a request that expects no reply.
    pub async fn notify(&self, request: R) -> Result<(), FrameworkError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }

    /// A sender that does not keep the actor alive.
    pub fn downgrade(&self) -> mpsc::WeakSender<R> {
        self.sender.downgrade()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
