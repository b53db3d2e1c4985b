//! Requests understood by the kitchen actor and the [`ActorState`] implementation
//! that applies them to a [`Kitchen`].

use crate::domain::{Order, OrderId, ShelfReport};
use crate::framework::{ActorState, Response};
use crate::kitchen_actor::{ExpiryScheduler, Fulfillment, Kitchen, KitchenError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Messages processed by the kitchen actor, strictly one at a time.
#[derive(Debug)]
pub enum KitchenRequest {
    /// Cook and shelve an order, then schedule its expiry.
    TakeOrder {
        order: Order,
        at: DateTime<Utc>,
        respond_to: Response<Fulfillment, KitchenError>,
    },
    /// Hand an order to a courier, if it is still here and worth something.
    PickupOrder {
        id: OrderId,
        at: DateTime<Utc>,
        respond_to: Response<Option<Order>, KitchenError>,
    },
    /// Current value of an order on its shelf.
    OrderValue {
        id: OrderId,
        at: DateTime<Utc>,
        respond_to: Response<f64, KitchenError>,
    },
    /// Snapshot of every shelf.
    ShelfReport {
        at: DateTime<Utc>,
        respond_to: Response<Vec<ShelfReport>, KitchenError>,
    },
    /// Posted by expiry timers. Never answered.
    Expire {
        id: OrderId,
        fired_at: DateTime<Utc>,
    },
}

#[async_trait]
impl ActorState for Kitchen {
    type Request = KitchenRequest;
    type Context = ExpiryScheduler;

    async fn handle(&mut self, request: KitchenRequest, scheduler: &ExpiryScheduler) {
        match request {
            KitchenRequest::TakeOrder {
                order,
                at,
                respond_to,
            } => {
                let id = order.id().clone();
                let result = match self.take_order(order, at) {
                    Ok(cooked) => {
                        if let Some(timer) = scheduler.schedule(&cooked) {
                            self.track_expiry(cooked.id.clone(), timer);
                        }
                        self.log_shelves(at);
                        Ok(Fulfillment::Ready(cooked))
                    }
                    Err(e) => {
                        warn!(order_id = %id, error = %e, "Order rejected");
                        Err(e)
                    }
                };
                let _ = respond_to.send(result);
            }
            KitchenRequest::PickupOrder { id, at, respond_to } => {
                let order = self.pickup_order(&id, at);
                if order.is_some() {
                    self.log_shelves(at);
                } else {
                    debug!(order_id = %id, "Nothing to pick up");
                }
                let _ = respond_to.send(Ok(order));
            }
            KitchenRequest::OrderValue { id, at, respond_to } => {
                let _ = respond_to.send(Ok(self.order_value(&id, at)));
            }
            KitchenRequest::ShelfReport { at, respond_to } => {
                let _ = respond_to.send(Ok(self.shelf_report(at)));
            }
            KitchenRequest::Expire { id, fired_at } => {
                if self.expire_order(&id, fired_at).is_some() {
                    self.log_shelves(fired_at);
                }
            }
        }
    }

    fn on_shutdown(&mut self) {
        let cancelled = self.cancel_expiry_timers();
        let stats = self.stats();
        info!(
            kitchen = %self.name(),
            remaining = self.len(),
            cancelled_timers = cancelled,
            placed = stats.placed,
            picked_up = stats.picked_up,
            expired = stats.expired,
            discarded = stats.discarded,
            "Kitchen closed"
        );
    }
}
