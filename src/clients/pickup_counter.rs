use crate::domain::{Order, OrderId};
use crate::kitchen_actor::KitchenError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Where a courier collects its order from.
///
/// [`KitchenClient`](crate::clients::KitchenClient) is the real implementation;
/// couriers are generic over this so they can be tested against anything that
/// hands out orders.
#[async_trait]
pub trait PickupCounter: Send + Sync {
    /// Removes and returns the order, or `None` if it is gone or worthless.
    async fn pickup_order(
        &self,
        id: OrderId,
        at: DateTime<Utc>,
    ) -> Result<Option<Order>, KitchenError>;
}
