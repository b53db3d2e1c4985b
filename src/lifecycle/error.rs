//! Error types for running a simulation.

use crate::courier::CourierError;
use crate::domain::OrderError;
use crate::kitchen_actor::KitchenError;
use crate::lifecycle::ConfigError;
use thiserror::Error;

/// Errors that end a simulation run.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Usage: kitchen-sim <orders.json>")]
    Usage,

    #[error("Could not read JSON orders from path: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed order batch: {0}")]
    Json(#[from] serde_json::Error),

    /// Entry `index` of the batch failed validation and the run does not skip
    /// invalid orders.
    #[error("Invalid order at index {index}: {source}")]
    InvalidOrder {
        index: usize,
        #[source]
        source: OrderError,
    },

    #[error(transparent)]
    Kitchen(#[from] KitchenError),

    #[error(transparent)]
    Courier(#[from] CourierError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Could not start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
