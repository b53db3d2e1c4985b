//! Couriers carry one order at a time from the kitchen to the customer.

pub mod error;

pub use error::*;

use crate::clients::{KitchenClient, PickupCounter};
use crate::domain::{Order, OrderId};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

struct Assignment<K> {
    order_id: OrderId,
    kitchen: K,
}

/// Holds at most one accepted order, identified by id, and the kitchen to
/// collect it from.
pub struct Courier<K = KitchenClient> {
    assignment: Option<Assignment<K>>,
}

impl<K> Default for Courier<K> {
    fn default() -> Self {
        Self { assignment: None }
    }
}

impl<K: PickupCounter> Courier<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes on `order_id`. Always succeeds; an unfinished assignment is
    /// replaced.
    pub fn accept_order(&mut self, order_id: OrderId, kitchen: K) -> bool {
        let previous = self.assignment.replace(Assignment { order_id, kitchen });
        if let Some(previous) = previous {
            warn!(order_id = %previous.order_id, "Courier dropped an accepted order");
        }
        true
    }

    /// Collects the accepted order at `at` and marks it delivered.
    ///
    /// The courier is free again afterwards, whatever the outcome.
    ///
    /// # Returns
    /// `Ok(None)` if the kitchen no longer had the order (discarded, expired or
    /// worthless).
    ///
    /// # Errors
    /// * [`CourierError::NoOrderAccepted`] - nothing was accepted
    /// * [`CourierError::Kitchen`] - the kitchen is unreachable
    pub async fn pickup_current_order(
        &mut self,
        at: DateTime<Utc>,
    ) -> Result<Option<Order>, CourierError> {
        let Assignment { order_id, kitchen } =
            self.assignment.take().ok_or(CourierError::NoOrderAccepted)?;

        let mut order = kitchen.pickup_order(order_id.clone(), at).await?;
        match order.as_mut() {
            Some(order) => order.mark_delivered(at),
            None => debug!(%order_id, "Order already expired or discarded"),
        }
        Ok(order)
    }

    pub fn has_order(&self) -> bool {
        self.assignment.is_some()
    }

    pub fn current_order(&self) -> Option<&OrderId> {
        self.assignment.as_ref().map(|assignment| &assignment.order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Temperature;
    use crate::framework::mock::{create_mock_sender, expect_request};
    use crate::kitchen_actor::{KitchenError, KitchenRequest};
    use chrono::TimeZone;

    fn at(s: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(s, 0).unwrap()
    }

    #[tokio::test]
    async fn test_pickup_without_order() {
        let mut courier: Courier = Courier::new();
        assert!(!courier.has_order());
        assert_eq!(
            courier.pickup_current_order(at(0)).await,
            Err(CourierError::NoOrderAccepted)
        );
    }

    #[tokio::test]
    async fn test_pickup_sets_delivery_time() {
        let (sender, mut receiver) = create_mock_sender(4);
        let mut courier = Courier::new();
        assert!(courier.accept_order(OrderId::from("1"), KitchenClient::new(sender)));
        assert_eq!(courier.current_order(), Some(&OrderId::from("1")));

        let kitchen = tokio::spawn(async move {
            let (id, requested_at, respond_to) =
                expect_request(&mut receiver, |request| match request {
                    KitchenRequest::PickupOrder { id, at, respond_to } => {
                        Some((id, at, respond_to))
                    }
                    _ => None,
                })
                .await
                .expect("Expected PickupOrder request");
            assert_eq!(id, OrderId::from("1"));
            assert_eq!(requested_at, at(4));

            let mut order = Order::new("1", "tea", Temperature::Cold, 300, 0.5, at(0)).unwrap();
            order.mark_fulfilled(at(0));
            respond_to.send(Ok(Some(order))).unwrap();
        });

        let delivered = courier.pickup_current_order(at(4)).await.unwrap().unwrap();
        kitchen.await.unwrap();

        assert_eq!(delivered.delivery_time(), Some(at(4)));
        assert!(!courier.has_order());
    }

    #[tokio::test]
    async fn test_pickup_of_missing_order() {
        let (sender, mut receiver) = create_mock_sender(4);
        let mut courier = Courier::new();
        courier.accept_order(OrderId::from("1"), KitchenClient::new(sender));

        let kitchen = tokio::spawn(async move {
            let respond_to = expect_request(&mut receiver, |request| match request {
                KitchenRequest::PickupOrder { respond_to, .. } => Some(respond_to),
                _ => None,
            })
            .await
            .expect("Expected PickupOrder request");
            respond_to.send(Ok(None)).unwrap();
        });

        assert_eq!(courier.pickup_current_order(at(4)).await, Ok(None));
        kitchen.await.unwrap();

        // Single pickup per accepted order.
        assert_eq!(
            courier.pickup_current_order(at(5)).await,
            Err(CourierError::NoOrderAccepted)
        );
    }

    #[tokio::test]
    async fn test_pickup_from_closed_kitchen() {
        let (sender, receiver) = create_mock_sender(1);
        drop(receiver);
        let mut courier = Courier::new();
        courier.accept_order(OrderId::from("1"), KitchenClient::new(sender));

        assert_eq!(
            courier.pickup_current_order(at(1)).await,
            Err(CourierError::Kitchen(KitchenError::ActorClosed))
        );
        assert!(!courier.has_order());
    }
}
