//! Generic actor plumbing for serialized state.
//!
//! This module provides the building blocks that the kitchen is built on: an actor
//! that owns one piece of state and processes its queue one request at a time, the
//! sender used to reach it, one-shot timers that post back into the queue, and the
//! clock everything agrees on.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that state owned by an actor implements
//! - [`SerialActor`] - Generic actor that owns the state and drains the queue
//! - [`RequestSender`] - Cloneable handle for posting requests
//! - [`FrameworkError`] - Common channel errors
//! - [`Clock`] / [`TokioClock`] - Wall-clock time that follows Tokio's timer
//! - [`post_at`] - One-shot timer that posts a request at a deadline
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test senders without spawning full actors.

pub mod clock;
pub mod core;
pub mod mock;
pub mod timer;

// Re-export core types for convenience
pub use clock::{Clock, TokioClock};
pub use self::core::*;
pub use timer::post_at;
