//! Error types for order validation.

use thiserror::Error;

/// Errors raised by the validating order constructor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Order IDs cannot be empty.
    #[error("Order IDs cannot be empty")]
    EmptyId,

    /// Order names cannot be empty.
    #[error("Order names cannot be empty (order {0})")]
    EmptyName(String),

    /// The temperature group is not one of hot, cold or frozen.
    #[error("Unknown temperature group: {0:?}")]
    UnknownTemperature(String),

    /// Shelf life must be non-negative.
    #[error("Order shelf life must be non-negative, got {0}")]
    NegativeShelfLife(i64),

    /// Shelf life does not fit the supported range.
    #[error("Order shelf life is too long: {0} seconds")]
    ShelfLifeTooLong(i64),

    /// Decay rate must be a non-negative number.
    #[error("Order decay rate must be finite and non-negative, got {0}")]
    InvalidDecayRate(f64),
}
