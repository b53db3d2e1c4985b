//! Expiry timers for cooked orders.

use crate::domain::OrderEvent;
use crate::framework::{post_at, Clock};
use crate::kitchen_actor::{CookedOrder, KitchenRequest};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::info;

/// Context injected into the kitchen actor: posts `Expire` requests back onto
/// its own queue when an order's deadline passes.
///
/// Holds a weak sender only, so pending timers never keep the kitchen alive.
#[derive(Clone)]
pub struct ExpiryScheduler {
    requests: mpsc::WeakSender<KitchenRequest>,
    clock: Arc<dyn Clock>,
}

impl ExpiryScheduler {
    pub fn new(requests: mpsc::WeakSender<KitchenRequest>, clock: Arc<dyn Clock>) -> Self {
        Self { requests, clock }
    }

    /// Starts the timer that expires `cooked` at its deadline.
    ///
    /// Returns `None` for an order without a deadline (never cooked).
    pub fn schedule(&self, cooked: &CookedOrder) -> Option<AbortHandle> {
        let deadline = cooked.expires_at?;
        info!(
            order_id = %cooked.id,
            %deadline,
            "{}",
            cooked.describe(OrderEvent::ExpiryScheduled)
        );

        let id = cooked.id.clone();
        let timer = post_at(
            self.requests.clone(),
            self.clock.clone(),
            deadline,
            move |fired_at| KitchenRequest::Expire { id, fired_at },
        );
        Some(timer.abort_handle())
    }
}
