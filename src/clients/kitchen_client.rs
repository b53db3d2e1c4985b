use crate::clients::PickupCounter;
use crate::domain::{Order, OrderId, ShelfReport};
use crate::framework::RequestSender;
use crate::kitchen_actor::{Fulfillment, KitchenError, KitchenRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Client for interacting with the Kitchen actor.
///
/// Cheap to clone; every courier carries one. The kitchen shuts down once the
/// last clone is dropped.
#[derive(Clone, Debug)]
pub struct KitchenClient {
    inner: RequestSender<KitchenRequest>,
}

impl KitchenClient {
    pub fn new(inner: RequestSender<KitchenRequest>) -> Self {
        Self { inner }
    }

    /// Cooks and shelves `order` at `at`.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn take_order(
        &self,
        order: Order,
        at: DateTime<Utc>,
    ) -> Result<Fulfillment, KitchenError> {
        debug!(?order, "take_order called");
        self.inner
            .request(|respond_to| KitchenRequest::TakeOrder {
                order,
                at,
                respond_to,
            })
            .await?
    }

    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn pickup_order(
        &self,
        id: OrderId,
        at: DateTime<Utc>,
    ) -> Result<Option<Order>, KitchenError> {
        debug!("Sending request");
        self.inner
            .request(|respond_to| KitchenRequest::PickupOrder { id, at, respond_to })
            .await?
    }

    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn order_value(&self, id: OrderId, at: DateTime<Utc>) -> Result<f64, KitchenError> {
        debug!("Sending request");
        self.inner
            .request(|respond_to| KitchenRequest::OrderValue { id, at, respond_to })
            .await?
    }

    #[instrument(skip(self))]
    pub async fn shelf_report(&self, at: DateTime<Utc>) -> Result<Vec<ShelfReport>, KitchenError> {
        debug!("Sending request");
        self.inner
            .request(|respond_to| KitchenRequest::ShelfReport { at, respond_to })
            .await?
    }

    /// Posts an expiry event, exactly as an expiry timer would.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn expire_order(&self, id: OrderId, fired_at: DateTime<Utc>) -> Result<(), KitchenError> {
        self.inner
            .notify(KitchenRequest::Expire { id, fired_at })
            .await
            .map_err(KitchenError::from)
    }

    /// A sender that does not keep the kitchen alive.
    pub fn downgrade(&self) -> mpsc::WeakSender<KitchenRequest> {
        self.inner.downgrade()
    }
}

#[async_trait]
impl PickupCounter for KitchenClient {
    async fn pickup_order(
        &self,
        id: OrderId,
        at: DateTime<Utc>,
    ) -> Result<Option<Order>, KitchenError> {
        KitchenClient::pickup_order(self, id, at).await
    }
}
