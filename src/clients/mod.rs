//! Type-safe wrappers around [`RequestSender`](crate::framework::RequestSender).

pub mod kitchen_client;
pub mod pickup_counter;

pub use kitchen_client::*;
pub use pickup_counter::*;
