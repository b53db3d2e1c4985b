//! The kitchen: shelves, placement and eviction rules, and the actor that owns
//! them.

pub mod entity;
pub mod error;
pub mod fulfillment;
pub mod kitchen;
pub mod scheduler;

pub use entity::*;
pub use error::*;
pub use fulfillment::*;
pub use kitchen::*;
pub use scheduler::*;

use crate::clients::KitchenClient;
use crate::framework::{Clock, SerialActor};
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Creates a Kitchen actor and its client. Run it with an [`ExpiryScheduler`]
/// built from [`KitchenClient::downgrade`].
pub fn new(
    options: KitchenOptions,
    rng: StdRng,
    buffer_size: usize,
) -> (SerialActor<Kitchen>, KitchenClient) {
    let (actor, sender) = SerialActor::new(Kitchen::new(options, rng), buffer_size);
    (actor, KitchenClient::new(sender))
}

/// Creates the actor and starts it on the current runtime.
///
/// The task ends once every [`KitchenClient`] is dropped, and yields the
/// kitchen's final state.
pub fn spawn(
    options: KitchenOptions,
    rng: StdRng,
    clock: Arc<dyn Clock>,
    buffer_size: usize,
) -> (KitchenClient, JoinHandle<Kitchen>) {
    let (actor, client) = new(options, rng, buffer_size);
    let scheduler = ExpiryScheduler::new(client.downgrade(), clock);
    let handle = tokio::spawn(actor.run(scheduler));
    (client, handle)
}
