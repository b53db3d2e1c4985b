//! Pure data structures: orders, their valuation math, and shelves.
//!
//! Nothing in here knows about time sources, channels or randomness; every
//! operation takes the instant it should be evaluated at.

pub mod error;
pub mod order;
pub mod shelf;

pub use error::*;
pub use order::*;
pub use shelf::*;
