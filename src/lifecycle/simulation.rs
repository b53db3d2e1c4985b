use crate::courier::Courier;
use crate::domain::{Order, OrderEvent};
use crate::framework::{Clock, TokioClock};
use crate::kitchen_actor::{self, KitchenError, KitchenStats};
use crate::lifecycle::{read_order_batch, SimulationConfig, SimulationError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// What happened to the orders of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationReport {
    /// Batch entries skipped by validation.
    pub invalid: usize,
    /// Orders handed to the kitchen.
    pub received: usize,
    /// Orders the kitchen refused (duplicates and the like).
    pub rejected: usize,
    /// Orders a courier delivered.
    pub delivered: usize,
    /// Couriers that found nothing to collect.
    pub missed: usize,
    /// Orders still shelved when the kitchen closed.
    pub left_on_shelves: usize,
    pub kitchen: KitchenStats,
}

/// Simulates the intake, fulfillment and delivery of a stream of orders for a
/// single kitchen.
///
/// # Architecture
///
/// - **Kitchen actor**: owns shelves and orders, started per run
/// - **Pacer**: hands one order to the kitchen every `1 / orders_per_second` seconds
/// - **Couriers**: one task per cooked order, arriving after a random delay
///
/// A run ends when every courier has returned; the kitchen then shuts down and
/// cancels the expiry timers still pending.
pub struct KitchenSimulation {
    config: SimulationConfig,
    clock: Arc<dyn Clock>,
}

impl KitchenSimulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_clock(config, Arc::new(TokioClock::new()))
    }

    pub fn with_clock(config: SimulationConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Loads the batch at `path` and runs it.
    pub async fn run_from_json<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<SimulationReport, SimulationError> {
        let batch = read_order_batch(
            path,
            self.clock.now(),
            self.config.continue_after_invalid_order,
        )?;
        let mut report = self.run(batch.orders).await?;
        report.invalid = batch.skipped;
        Ok(report)
    }

    /// Feeds `orders` to a fresh kitchen at the configured rate and waits for
    /// every courier.
    pub async fn run(&self, orders: Vec<Order>) -> Result<SimulationReport, SimulationError> {
        self.config.validate()?;
        info!(
            kitchen = %self.config.kitchen_name,
            orders = orders.len(),
            "SIMULATION START"
        );

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (kitchen, kitchen_handle) = kitchen_actor::spawn(
            self.config.kitchen_options(),
            StdRng::seed_from_u64(rng.gen()),
            self.clock.clone(),
            self.config.request_buffer,
        );

        let mut report = SimulationReport::default();
        let mut couriers = JoinSet::new();
        let period = Duration::from_secs_f64(1.0 / self.config.orders_per_second);
        let mut pacer = tokio::time::interval(period.max(Duration::from_nanos(1)));

        for order in orders {
            pacer.tick().await;
            report.received += 1;
            debug!(order_id = %order.id(), "{}", order.describe(OrderEvent::Received));

            let id = order.id().clone();
            let cooked = match kitchen.take_order(order, self.clock.now()).await {
                Ok(fulfillment) => fulfillment.wait().await?,
                Err(e @ (KitchenError::ActorClosed | KitchenError::ActorDropped)) => {
                    return Err(e.into())
                }
                Err(e) if self.config.continue_after_invalid_order => {
                    warn!(order_id = %id, error = %e, "Kitchen rejected order");
                    report.rejected += 1;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            info!(order_id = %cooked.id, shelf = %cooked.shelf, "{}", cooked.describe(OrderEvent::Cooked));

            let mut courier = Courier::new();
            courier.accept_order(cooked.id.clone(), kitchen.clone());
            debug!(order_id = %cooked.id, "{}", cooked.describe(OrderEvent::Accepted));

            let delay = Duration::from_secs(rng.gen_range(self.config.courier_delay_secs()));
            let clock = self.clock.clone();
            couriers.spawn(async move {
                tokio::time::sleep(delay).await;
                courier.pickup_current_order(clock.now()).await
            });
        }
        // Couriers hold their own handles; the kitchen closes after the last one.
        drop(kitchen);

        while let Some(joined) = couriers.join_next().await {
            match joined?? {
                Some(order) => {
                    report.delivered += 1;
                    info!(order_id = %order.id(), "{}", order.describe(OrderEvent::Delivered));
                }
                None => report.missed += 1,
            }
        }

        let kitchen = kitchen_handle.await?;
        report.left_on_shelves = kitchen.len();
        report.kitchen = kitchen.stats();
        info!(
            delivered = report.delivered,
            missed = report.missed,
            rejected = report.rejected,
            discarded = report.kitchen.discarded,
            expired = report.kitchen.expired,
            "SIMULATION END"
        );
        Ok(report)
    }
}
