//! Deferred results of `take_order`.

use crate::domain::{describe_event, Order, OrderEvent, OrderId, ShelfKind, Temperature};
use crate::kitchen_actor::KitchenError;
use chrono::{DateTime, Utc};
use tokio::sync::oneshot;

/// Snapshot of an order at the moment it was placed on a shelf.
#[derive(Debug, Clone, PartialEq)]
pub struct CookedOrder {
    pub id: OrderId,
    pub name: String,
    pub temperature: Temperature,
    pub fulfilled_at: DateTime<Utc>,
    pub shelf: ShelfKind,
    /// When the expiry event is due. `None` only if the order was never cooked.
    pub expires_at: Option<DateTime<Utc>>,
}

impl CookedOrder {
    pub(crate) fn new(order: &Order, shelf: ShelfKind) -> Self {
        Self {
            id: order.id().clone(),
            name: order.name().to_string(),
            temperature: order.temperature(),
            fulfilled_at: order.fulfillment_time().unwrap_or_else(|| order.receipt_time()),
            shelf,
            expires_at: order.expiry(shelf.decay_modifier()),
        }
    }

    pub fn describe(&self, event: OrderEvent) -> String {
        describe_event(event, &self.name, &self.id)
    }
}

/// Completion of a cooking request.
///
/// Cooking is instantaneous today, so the kitchen always answers with `Ready`.
/// `Pending` lets a cook time be introduced without changing callers: they
/// always go through [`Fulfillment::wait`].
#[derive(Debug)]
pub enum Fulfillment {
    Ready(CookedOrder),
    Pending(oneshot::Receiver<CookedOrder>),
}

impl Fulfillment {
    /// Resolves to the cooked order.
    ///
    /// # Errors
    /// [`KitchenError::ActorDropped`] if the kitchen dropped a pending fulfillment.
    pub async fn wait(self) -> Result<CookedOrder, KitchenError> {
        match self {
            Fulfillment::Ready(cooked) => Ok(cooked),
            Fulfillment::Pending(receiver) => {
                receiver.await.map_err(|_| KitchenError::ActorDropped)
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Fulfillment::Ready(_))
    }
}
