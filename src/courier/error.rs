//! Error types for couriers.

use crate::kitchen_actor::KitchenError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CourierError {
    /// Pickup was attempted before any order was accepted.
    #[error("Cannot pickup when no order has been accepted")]
    NoOrderAccepted,

    /// The kitchen could not be reached.
    #[error(transparent)]
    Kitchen(#[from] KitchenError),
}
