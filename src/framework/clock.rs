//! Wall-clock abstraction shared by the kitchen, its timers and the driver.
//!
//! Every timestamp in the simulation is a `DateTime<Utc>`, while every wait is a
//! Tokio sleep. [`TokioClock`] ties the two together so that a paused Tokio
//! runtime (as used in tests) also freezes and advances the wall clock.

use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// Source of "now" for the simulation.
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;

    /// Time left until `deadline`, zero if it has already passed.
    fn until(&self, deadline: DateTime<Utc>) -> Duration {
        (deadline - self.now()).to_std().unwrap_or(Duration::ZERO)
    }
}

/// A clock anchored at a wall-clock origin that advances with Tokio's timer.
#[derive(Debug, Clone)]
pub struct TokioClock {
    origin: DateTime<Utc>,
    started: tokio::time::Instant,
}

impl TokioClock {
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    pub fn starting_at(origin: DateTime<Utc>) -> Self {
        Self {
            origin,
            started: tokio::time::Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed =
            TimeDelta::from_std(self.started.elapsed()).unwrap_or_else(|_| TimeDelta::zero());
        self.origin.checked_add_signed(elapsed).unwrap_or(self.origin)
    }
}
