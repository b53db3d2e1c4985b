//! Error types for the Kitchen actor.

use crate::domain::{OrderId, Temperature};
use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while the kitchen handles an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KitchenError {
    /// The kitchen has no shelf for the order's temperature group.
    #[error("Could not find shelf for kitchen: {kitchen} temperature group: {temperature}")]
    NoShelfForTemperature {
        temperature: Temperature,
        kitchen: String,
    },

    /// An order with the same id is already in the kitchen.
    #[error("Duplicate order: {0}")]
    DuplicateOrder(OrderId),

    /// Neither the temperature shelf nor the overflow shelf can take the order.
    #[error("No shelf space for order: {0}")]
    NoShelfSpace(OrderId),

    /// The kitchen actor is no longer accepting requests.
    #[error("Kitchen closed")]
    ActorClosed,

    /// The kitchen actor dropped the response channel.
    #[error("Kitchen dropped response channel")]
    ActorDropped,
}

impl From<FrameworkError> for KitchenError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::ActorClosed => KitchenError::ActorClosed,
            FrameworkError::ActorDropped => KitchenError::ActorDropped,
        }
    }
}
