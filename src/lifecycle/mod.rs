//! # Simulation Lifecycle
//!
//! Everything around the kitchen that turns it into a runnable program:
//! configuration, loading order batches, pacing orders into the kitchen, the
//! couriers that collect them, and logging setup.
//!
//! ## Wiring
//!
//! [`KitchenSimulation::run`] starts one kitchen actor per run:
//!
//! ```rust,ignore
//! let (kitchen, handle) = kitchen_actor::spawn(options, rng, clock, buffer);
//! // ... take_order for each order, one courier task per cooked order ...
//! drop(kitchen);               // couriers hold the remaining clients
//! let kitchen = handle.await?; // returns once the last courier is done
//! ```
//!
//! The actor's context (an [`ExpiryScheduler`](crate::kitchen_actor::ExpiryScheduler))
//! holds only a weak handle back to the kitchen, so expiry timers never keep
//! it running.

pub mod config;
pub mod error;
pub mod orders_reader;
pub mod simulation;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use orders_reader::*;
pub use simulation::*;
