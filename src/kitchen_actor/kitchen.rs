//! The kitchen's state and rules: shelf placement, overflow relief, pickup and
//! expiry.
//!
//! Everything here is synchronous and takes the instant to evaluate at, so it
//! can be tested without a runtime. The actor in [`super::entity`] is the only
//! thing that mutates a live kitchen.

use crate::domain::{
    Order, OrderEvent, OrderId, Shelf, ShelfEntry, ShelfKind, ShelfReport, Temperature,
};
use crate::kitchen_actor::{CookedOrder, KitchenError};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, HashMap};
use tokio::task::AbortHandle;
use tracing::{debug, info};

/// Shelf layout of a kitchen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitchenOptions {
    pub name: String,
    pub overflow_capacity: usize,
    pub shelf_capacities: BTreeMap<Temperature, usize>,
}

impl KitchenOptions {
    /// Same capacity on every temperature shelf.
    pub fn uniform(name: impl Into<String>, shelf_capacity: usize, overflow_capacity: usize) -> Self {
        Self {
            name: name.into(),
            overflow_capacity,
            shelf_capacities: Temperature::ALL
                .iter()
                .map(|temperature| (*temperature, shelf_capacity))
                .collect(),
        }
    }

    pub fn small(name: impl Into<String>) -> Self {
        Self::uniform(name, 4, 6)
    }

    pub fn large(name: impl Into<String>) -> Self {
        Self::uniform(name, 10, 15)
    }
}

/// Outcome of [`Kitchen::make_overflow_room`].
#[derive(Debug, Clone, PartialEq)]
pub enum OverflowRelief {
    /// An overflow order went back to its (now open) temperature shelf.
    Moved { id: OrderId, to: Temperature },
    /// No overflow order could move, so a random one was thrown away.
    Discarded(Order),
    /// The overflow shelf was empty.
    Nothing,
}

/// Running totals of what happened to orders in this kitchen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KitchenStats {
    pub placed: usize,
    pub moved: usize,
    pub picked_up: usize,
    pub refused_pickups: usize,
    pub expired: usize,
    pub discarded: usize,
}

/// Owns every shelf and every order between cooking and removal.
///
/// `orders` and `shelf_by_order` always hold the same ids, and the shelf named
/// for an id always contains it. See [`Kitchen::check_invariants`].
#[derive(Debug)]
pub struct Kitchen {
    name: String,
    shelves: BTreeMap<Temperature, Shelf>,
    overflow: Shelf,
    orders: HashMap<OrderId, Order>,
    shelf_by_order: HashMap<OrderId, ShelfKind>,
    expiry_timers: HashMap<OrderId, AbortHandle>,
    rng: StdRng,
    stats: KitchenStats,
}

impl Kitchen {
    pub fn new(options: KitchenOptions, rng: StdRng) -> Self {
        let shelves = options
            .shelf_capacities
            .iter()
            .map(|(temperature, capacity)| {
                let kind = ShelfKind::Temperature(*temperature);
                (*temperature, Shelf::new(*capacity, kind.decay_modifier()))
            })
            .collect();

        Self {
            name: options.name,
            shelves,
            overflow: Shelf::new(options.overflow_capacity, ShelfKind::Overflow.decay_modifier()),
            orders: HashMap::new(),
            shelf_by_order: HashMap::new(),
            expiry_timers: HashMap::new(),
            rng,
            stats: KitchenStats::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cooks `order` at `at` and puts it on a shelf.
    ///
    /// Tries the temperature shelf, then overflow. With overflow full it makes
    /// room once (see [`Kitchen::make_overflow_room`]) and retries.
    ///
    /// # Errors
    /// * [`KitchenError::NoShelfForTemperature`] - no shelf for the order's temperature
    /// * [`KitchenError::DuplicateOrder`] - the id is already in the kitchen
    /// * [`KitchenError::NoShelfSpace`] - every candidate shelf is full and overflow is empty
    pub fn take_order(
        &mut self,
        mut order: Order,
        at: DateTime<Utc>,
    ) -> Result<CookedOrder, KitchenError> {
        let temperature = order.temperature();
        if !self.shelves.contains_key(&temperature) {
            return Err(KitchenError::NoShelfForTemperature {
                temperature,
                kitchen: self.name.clone(),
            });
        }
        if self.orders.contains_key(order.id()) {
            return Err(KitchenError::DuplicateOrder(order.id().clone()));
        }

        order.mark_fulfilled(at);
        let id = order.id().clone();
        let shelf = self.place(&id, temperature, at)?;

        let cooked = CookedOrder::new(&order, shelf);
        self.orders.insert(id.clone(), order);
        self.shelf_by_order.insert(id, shelf);
        self.stats.placed += 1;
        Ok(cooked)
    }

    fn place(
        &mut self,
        id: &OrderId,
        temperature: Temperature,
        at: DateTime<Utc>,
    ) -> Result<ShelfKind, KitchenError> {
        let primary = ShelfKind::Temperature(temperature);
        if self.shelf_mut(primary).is_some_and(|shelf| shelf.add(id.clone())) {
            return Ok(primary);
        }
        if self.overflow.add(id.clone()) {
            return Ok(ShelfKind::Overflow);
        }
        if self.overflow.is_empty() {
            return Err(KitchenError::NoShelfSpace(id.clone()));
        }

        self.make_overflow_room(at);
        if self.overflow.add(id.clone()) {
            Ok(ShelfKind::Overflow)
        } else {
            Err(KitchenError::NoShelfSpace(id.clone()))
        }
    }

    /// Frees one overflow slot.
    ///
    /// The first overflow order (in id order) whose temperature shelf has room
    /// moves there, keeping the value it had reached. If none can move, one
    /// overflow order picked at random is discarded from the kitchen.
    pub fn make_overflow_room(&mut self, at: DateTime<Utc>) -> OverflowRelief {
        let movable = self.overflow.iter().find_map(|id| {
            let temperature = self.orders.get(id)?.temperature();
            let open = self
                .shelves
                .get(&temperature)
                .is_some_and(|shelf| !shelf.at_capacity());
            open.then(|| (id.clone(), temperature))
        });
        if let Some((id, temperature)) = movable {
            return self.relocate(id, temperature, at);
        }

        let candidates: Vec<&OrderId> = self.overflow.iter().collect();
        let Some(victim) = candidates.choose(&mut self.rng).map(|id| (*id).clone()) else {
            return OverflowRelief::Nothing;
        };
        let value = self.order_value(&victim, at);
        match self.remove_order(&victim) {
            Some(order) => {
                self.stats.discarded += 1;
                info!(order_id = %victim, value, "{}", order.describe(OrderEvent::Discarded));
                OverflowRelief::Discarded(order)
            }
            None => OverflowRelief::Nothing,
        }
    }

    fn relocate(&mut self, id: OrderId, temperature: Temperature, at: DateTime<Utc>) -> OverflowRelief {
        let added = self
            .shelves
            .get_mut(&temperature)
            .is_some_and(|shelf| shelf.add(id.clone()));
        if !added {
            return OverflowRelief::Nothing;
        }
        self.overflow.remove(&id);

        let destination = ShelfKind::Temperature(temperature);
        self.shelf_by_order.insert(id.clone(), destination);
        if let Some(order) = self.orders.get_mut(&id) {
            order.move_from(ShelfKind::Overflow.decay_modifier(), at);
            info!(
                order_id = %id,
                shelf = %destination,
                value = order.value(destination.decay_modifier(), at),
                "{}",
                order.describe(OrderEvent::Moved)
            );
        }
        self.stats.moved += 1;
        OverflowRelief::Moved { id, to: temperature }
    }

    /// Hands the order to a courier.
    ///
    /// `None` if the order is gone, or if it has no value left at `at`; such an
    /// order stays put until its expiry event removes it.
    pub fn pickup_order(&mut self, id: &OrderId, at: DateTime<Utc>) -> Option<Order> {
        let shelf = *self.shelf_by_order.get(id)?;
        let value = self.orders.get(id)?.value(shelf.decay_modifier(), at);
        if value <= 0.0 {
            self.stats.refused_pickups += 1;
            debug!(order_id = %id, %shelf, "Order has no value left, leaving it for expiry");
            return None;
        }

        let order = self.remove_order(id)?;
        self.stats.picked_up += 1;
        info!(order_id = %id, %shelf, value, "{}", order.describe(OrderEvent::PickedUp));
        Some(order)
    }

    /// Handles an expiry event: removes the order if it is still here.
    pub fn expire_order(&mut self, id: &OrderId, at: DateTime<Utc>) -> Option<Order> {
        let value = self.order_value(id, at);
        let Some(order) = self.remove_order(id) else {
            debug!(order_id = %id, "Expiry for order no longer in kitchen");
            return None;
        };
        self.stats.expired += 1;
        info!(order_id = %id, value, "{}", order.describe(OrderEvent::Expired));
        Some(order)
    }

    /// Value of the order on its current shelf; 0 for unknown ids.
    pub fn order_value(&self, id: &OrderId, at: DateTime<Utc>) -> f64 {
        match (self.orders.get(id), self.shelf_by_order.get(id)) {
            (Some(order), Some(shelf)) => order.value(shelf.decay_modifier(), at),
            _ => 0.0,
        }
    }

    /// Contents of every shelf: HOT, COLD, FROZEN, then OVERFLOW.
    pub fn shelf_report(&self, at: DateTime<Utc>) -> Vec<ShelfReport> {
        self.shelves
            .iter()
            .map(|(temperature, shelf)| {
                self.report(ShelfKind::Temperature(*temperature), shelf, at)
            })
            .chain(std::iter::once(self.report(ShelfKind::Overflow, &self.overflow, at)))
            .collect()
    }

    pub fn describe_shelves(&self, at: DateTime<Utc>) -> Vec<String> {
        self.shelf_report(at).iter().map(ToString::to_string).collect()
    }

    pub fn log_shelves(&self, at: DateTime<Utc>) {
        for line in self.describe_shelves(at) {
            info!("{line}");
        }
    }

    fn report(&self, kind: ShelfKind, shelf: &Shelf, at: DateTime<Utc>) -> ShelfReport {
        ShelfReport {
            shelf: kind,
            capacity: shelf.capacity(),
            entries: shelf
                .iter()
                .filter_map(|id| self.orders.get(id))
                .map(|order| ShelfEntry {
                    id: order.id().clone(),
                    name: order.name().to_string(),
                    value: order.value(kind.decay_modifier(), at),
                })
                .collect(),
        }
    }

    /// Verifies that both indexes and the shelves agree.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.orders.len() != self.shelf_by_order.len() {
            return Err(format!(
                "{} orders but {} shelf entries",
                self.orders.len(),
                self.shelf_by_order.len()
            ));
        }
        for (id, kind) in &self.shelf_by_order {
            if !self.orders.contains_key(id) {
                return Err(format!("shelf entry for unknown order {id}"));
            }
            if !self.shelf(*kind).is_some_and(|shelf| shelf.contains(id)) {
                return Err(format!("order {id} is not on its {kind} shelf"));
            }
        }

        let mut shelved = 0;
        let all_shelves = self
            .shelves
            .iter()
            .map(|(temperature, shelf)| (ShelfKind::Temperature(*temperature), shelf))
            .chain(std::iter::once((ShelfKind::Overflow, &self.overflow)));
        for (kind, shelf) in all_shelves {
            if shelf.len() > shelf.capacity() {
                return Err(format!("{kind} shelf holds {} of {}", shelf.len(), shelf.capacity()));
            }
            for id in shelf.iter() {
                if self.shelf_by_order.get(id) != Some(&kind) {
                    return Err(format!("order {id} on {kind} shelf is indexed elsewhere"));
                }
            }
            shelved += shelf.len();
        }
        if shelved != self.orders.len() {
            return Err(format!("{shelved} shelved ids for {} orders", self.orders.len()));
        }
        Ok(())
    }

    pub fn temperature_shelf(&self, temperature: Temperature) -> Option<&Shelf> {
        self.shelves.get(&temperature)
    }

    pub fn overflow_shelf(&self) -> &Shelf {
        &self.overflow
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn shelf_of(&self, id: &OrderId) -> Option<ShelfKind> {
        self.shelf_by_order.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn stats(&self) -> KitchenStats {
        self.stats
    }

    /// Remembers the timer that will expire `id`, so removal can cancel it.
    pub(crate) fn track_expiry(&mut self, id: OrderId, timer: AbortHandle) {
        if self.orders.contains_key(&id) {
            self.expiry_timers.insert(id, timer);
        } else {
            timer.abort();
        }
    }

    /// Cancels every outstanding expiry timer; returns how many there were.
    pub(crate) fn cancel_expiry_timers(&mut self) -> usize {
        let pending = self.expiry_timers.len();
        for (_, timer) in self.expiry_timers.drain() {
            timer.abort();
        }
        pending
    }

    fn remove_order(&mut self, id: &OrderId) -> Option<Order> {
        let order = self.orders.remove(id)?;
        if let Some(kind) = self.shelf_by_order.remove(id) {
            if let Some(shelf) = self.shelf_mut(kind) {
                shelf.remove(id);
            }
        }
        if let Some(timer) = self.expiry_timers.remove(id) {
            timer.abort();
        }
        Some(order)
    }

    fn shelf(&self, kind: ShelfKind) -> Option<&Shelf> {
        match kind {
            ShelfKind::Temperature(temperature) => self.shelves.get(&temperature),
            ShelfKind::Overflow => Some(&self.overflow),
        }
    }

    fn shelf_mut(&mut self, kind: ShelfKind) -> Option<&mut Shelf> {
        match kind {
            ShelfKind::Temperature(temperature) => self.shelves.get_mut(&temperature),
            ShelfKind::Overflow => Some(&mut self.overflow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn epoch() -> DateTime<Utc> {
        Utc.timestamp_opt(0, 0).unwrap()
    }

    fn secs(s: i64) -> DateTime<Utc> {
        epoch() + TimeDelta::seconds(s)
    }

    fn id(s: &str) -> OrderId {
        OrderId::from(s)
    }

    fn order(id: &str, name: &str, temperature: Temperature, decay_rate: f64) -> Order {
        Order::new(id, name, temperature, 300, decay_rate, epoch()).unwrap()
    }

    fn barebones_kitchen() -> Kitchen {
        Kitchen::new(KitchenOptions::uniform("test", 1, 1), StdRng::seed_from_u64(7))
    }

    fn ids(shelf: &Shelf) -> Vec<&str> {
        shelf.iter().map(OrderId::as_str).collect()
    }

    #[test]
    fn test_take_order_missing_temperature_shelf() {
        let options = KitchenOptions {
            name: "test".to_string(),
            overflow_capacity: 1,
            shelf_capacities: BTreeMap::from([(Temperature::Hot, 1)]),
        };
        let mut kitchen = Kitchen::new(options, StdRng::seed_from_u64(1));

        let result = kitchen.take_order(order("1", "ice cream", Temperature::Cold, 0.5), epoch());
        assert_eq!(
            result,
            Err(KitchenError::NoShelfForTemperature {
                temperature: Temperature::Cold,
                kitchen: "test".to_string(),
            })
        );
        assert!(kitchen.is_empty());
    }

    #[test]
    fn test_take_order_fulfillment_time_recorded() {
        let mut kitchen = Kitchen::new(KitchenOptions::large("test"), StdRng::seed_from_u64(1));
        let cooked = kitchen
            .take_order(order("1", "ice cream", Temperature::Cold, 0.5), secs(12))
            .unwrap();

        assert_eq!(cooked.fulfilled_at, secs(12));
        assert_eq!(cooked.shelf, ShelfKind::Temperature(Temperature::Cold));
        assert_eq!(kitchen.order(&id("1")).unwrap().fulfillment_time(), Some(secs(12)));
        kitchen.check_invariants().unwrap();
    }

    #[test]
    fn test_take_order_overflow_used() {
        let mut kitchen = barebones_kitchen();
        kitchen.take_order(order("1", "tea", Temperature::Cold, 0.5), epoch()).unwrap();
        let soda = kitchen.take_order(order("2", "soda", Temperature::Cold, 0.5), epoch()).unwrap();

        assert_eq!(soda.shelf, ShelfKind::Overflow);
        assert_eq!(ids(kitchen.overflow_shelf()), vec!["2"]);
        kitchen.check_invariants().unwrap();
    }

    #[test]
    fn test_take_order_overflow_room_made() {
        let mut kitchen = barebones_kitchen();
        kitchen.take_order(order("1", "tea", Temperature::Cold, 0.5), epoch()).unwrap();
        kitchen.take_order(order("2", "soda", Temperature::Cold, 0.5), epoch()).unwrap(); // overflow
        kitchen.pickup_order(&id("1"), epoch()).unwrap();
        kitchen.take_order(order("3", "burger", Temperature::Hot, 0.5), epoch()).unwrap();
        // Soda gets moved back to the cold shelf.
        kitchen.take_order(order("4", "pizza", Temperature::Hot, 0.5), epoch()).unwrap();

        assert_eq!(ids(kitchen.temperature_shelf(Temperature::Hot).unwrap()), vec!["3"]);
        assert_eq!(ids(kitchen.temperature_shelf(Temperature::Cold).unwrap()), vec!["2"]);
        assert_eq!(ids(kitchen.overflow_shelf()), vec!["4"]);
        assert_eq!(kitchen.shelf_of(&id("2")), Some(ShelfKind::Temperature(Temperature::Cold)));
        assert_eq!(kitchen.stats().moved, 1);
        kitchen.check_invariants().unwrap();
    }

    #[test]
    fn test_take_order_overflow_discarded() {
        let mut kitchen = barebones_kitchen();
        kitchen.take_order(order("1", "tea", Temperature::Cold, 0.5), epoch()).unwrap();
        kitchen.take_order(order("2", "soda", Temperature::Cold, 0.5), epoch()).unwrap();
        // Removes soda, the only overflow order.
        kitchen.take_order(order("3", "juice", Temperature::Cold, 0.5), epoch()).unwrap();

        assert_eq!(ids(kitchen.temperature_shelf(Temperature::Cold).unwrap()), vec!["1"]);
        assert_eq!(ids(kitchen.overflow_shelf()), vec!["3"]);
        assert!(kitchen.order(&id("2")).is_none());
        assert_eq!(kitchen.shelf_of(&id("2")), None);
        assert_eq!(kitchen.stats().discarded, 1);
        kitchen.check_invariants().unwrap();
    }

    #[test]
    fn test_discard_takes_exactly_one_earlier_overflow_order() {
        let mut kitchen = Kitchen::new(KitchenOptions::uniform("test", 1, 3), StdRng::seed_from_u64(11));
        for n in 0..4 {
            let name = format!("drink {n}");
            kitchen
                .take_order(order(&n.to_string(), &name, Temperature::Cold, 0.5), epoch())
                .unwrap();
        }
        // Cold shelf is full, so nothing on overflow can move.
        let before: BTreeSet<OrderId> = kitchen.overflow_shelf().iter().cloned().collect();
        assert_eq!(before.len(), 3);

        kitchen.take_order(order("4", "drink 4", Temperature::Cold, 0.5), epoch()).unwrap();
        let after: BTreeSet<OrderId> = kitchen.overflow_shelf().iter().cloned().collect();

        let gone: Vec<&OrderId> = before.difference(&after).collect();
        assert_eq!(gone.len(), 1);
        assert!(before.contains(gone[0]));
        assert_eq!(after.difference(&before).collect::<Vec<_>>(), vec![&id("4")]);
        assert!(kitchen.order(gone[0]).is_none());
        assert_eq!(kitchen.stats().discarded, 1);
        assert_eq!(kitchen.stats().moved, 0);
        kitchen.check_invariants().unwrap();
    }

    #[test]
    fn test_discard_is_reproducible_with_seed() {
        fn run(seed: u64) -> Vec<String> {
            let options = KitchenOptions::uniform("test", 1, 3);
            let mut kitchen = Kitchen::new(options, StdRng::seed_from_u64(seed));
            for n in 0..8 {
                let name = format!("drink {n}");
                kitchen
                    .take_order(order(&n.to_string(), &name, Temperature::Cold, 0.5), epoch())
                    .unwrap();
                kitchen.check_invariants().unwrap();
            }
            kitchen.overflow_shelf().iter().map(|id| id.0.clone()).collect()
        }

        let first = run(42);
        assert_eq!(first.len(), 3);
        assert_eq!(first, run(42));
    }

    #[test]
    fn test_make_overflow_room_on_empty_overflow() {
        let mut kitchen = barebones_kitchen();
        assert_eq!(kitchen.make_overflow_room(epoch()), OverflowRelief::Nothing);
    }

    #[test]
    fn test_relocation_keeps_value_reached_on_overflow() {
        let mut kitchen = barebones_kitchen();
        let tea = Order::new("1", "tea", Temperature::Cold, 500, 1.0, epoch()).unwrap();
        let soda = Order::new("2", "soda", Temperature::Cold, 500, 1.0, epoch()).unwrap();
        kitchen.take_order(tea, epoch()).unwrap();
        kitchen.take_order(soda, epoch()).unwrap();
        kitchen.pickup_order(&id("1"), secs(50)).unwrap();

        // 100s on overflow: 1 - 1 * 100 * 2 / 500 = 0.6.
        let relief = kitchen.make_overflow_room(secs(100));
        assert_eq!(relief, OverflowRelief::Moved { id: id("2"), to: Temperature::Cold });

        let value = kitchen.order_value(&id("2"), secs(250));
        assert!((value - 0.3).abs() < 1e-9, "got {value}");
    }

    #[test]
    fn test_duplicate_order_rejected() {
        let mut kitchen = barebones_kitchen();
        kitchen.take_order(order("1", "tea", Temperature::Cold, 0.5), epoch()).unwrap();

        let result = kitchen.take_order(order("1", "tea again", Temperature::Cold, 0.5), secs(1));
        assert_eq!(result, Err(KitchenError::DuplicateOrder(id("1"))));
        assert_eq!(kitchen.order(&id("1")).unwrap().name(), "tea");
        assert!(kitchen.overflow_shelf().is_empty());
        kitchen.check_invariants().unwrap();
    }

    #[test]
    fn test_no_overflow_capacity() {
        let mut kitchen =
            Kitchen::new(KitchenOptions::uniform("test", 1, 0), StdRng::seed_from_u64(1));
        kitchen.take_order(order("1", "tea", Temperature::Cold, 0.5), epoch()).unwrap();

        let result = kitchen.take_order(order("2", "soda", Temperature::Cold, 0.5), epoch());
        assert_eq!(result, Err(KitchenError::NoShelfSpace(id("2"))));
        assert_eq!(kitchen.len(), 1);
        kitchen.check_invariants().unwrap();
    }

    #[test]
    fn test_order_value_expired() {
        let mut kitchen = Kitchen::new(KitchenOptions::large("test"), StdRng::seed_from_u64(1));
        kitchen.take_order(order("1", "ice cream", Temperature::Frozen, 0.5), epoch()).unwrap();

        // 50+ years is a long time to be sitting on a shelf.
        assert_eq!(kitchen.order_value(&id("1"), Utc::now()), 0.0);
        assert_eq!(kitchen.order_value(&id("unknown"), epoch()), 0.0);
    }

    #[test]
    fn test_order_value_overflow() {
        let mut kitchen = barebones_kitchen();
        kitchen.take_order(order("1", "ice cream", Temperature::Frozen, 1.0), epoch()).unwrap();
        kitchen.take_order(order("2", "cannoli", Temperature::Frozen, 1.0), epoch()).unwrap();

        // (shelfLife - decayRate * orderAge * shelfDecayModifier) / shelfLife
        let regular = kitchen.order_value(&id("1"), secs(100));
        let overflow = kitchen.order_value(&id("2"), secs(100));
        assert!((regular - (300.0 - 100.0) / 300.0).abs() < 1e-9);
        assert!((overflow - (300.0 - 2.0 * 100.0) / 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_pickup_leaves_worthless_order_for_expiry() {
        let mut kitchen = barebones_kitchen();
        let cooked = kitchen.take_order(order("1", "tea", Temperature::Cold, 2.0), epoch()).unwrap();
        let expires_at = cooked.expires_at.unwrap();
        assert_eq!(expires_at, secs(150));

        assert!(kitchen.pickup_order(&id("1"), expires_at).is_none());
        assert!(kitchen.order(&id("1")).is_some());
        assert_eq!(kitchen.stats().refused_pickups, 1);

        assert!(kitchen.expire_order(&id("1"), expires_at).is_some());
        assert!(kitchen.is_empty());
        kitchen.check_invariants().unwrap();
    }

    #[test]
    fn test_double_removal_is_harmless() {
        let mut kitchen = barebones_kitchen();
        kitchen.take_order(order("1", "tea", Temperature::Cold, 0.5), epoch()).unwrap();
        kitchen.take_order(order("2", "soda", Temperature::Cold, 0.5), epoch()).unwrap();

        assert!(kitchen.pickup_order(&id("1"), secs(5)).is_some());
        assert!(kitchen.pickup_order(&id("1"), secs(6)).is_none());
        assert!(kitchen.expire_order(&id("1"), secs(300)).is_none());

        assert!(kitchen.expire_order(&id("2"), secs(300)).is_some());
        assert!(kitchen.expire_order(&id("2"), secs(300)).is_none());
        assert!(kitchen.pickup_order(&id("2"), secs(301)).is_none());

        let stats = kitchen.stats();
        assert_eq!((stats.picked_up, stats.expired), (1, 1));
        kitchen.check_invariants().unwrap();
    }

    #[test]
    fn test_describe_shelves() {
        let mut kitchen = barebones_kitchen();
        kitchen.take_order(order("1", "tea", Temperature::Cold, 1.0), epoch()).unwrap();
        kitchen.take_order(order("2", "soda", Temperature::Cold, 1.0), epoch()).unwrap();

        assert_eq!(
            kitchen.describe_shelves(secs(150)),
            vec![
                "shelf: HOT []".to_string(),
                "shelf: COLD [tea: 0.5000]".to_string(),
                "shelf: FROZEN []".to_string(),
                "shelf: OVERFLOW [soda: 0.0000]".to_string(),
            ]
        );
    }

    #[test]
    fn test_options_presets() {
        let small = KitchenOptions::small("s");
        assert_eq!(small.overflow_capacity, 6);
        assert!(small.shelf_capacities.values().all(|capacity| *capacity == 4));

        let large = KitchenOptions::large("l");
        assert_eq!(large.overflow_capacity, 15);
        assert_eq!(large.shelf_capacities.len(), 3);
        assert!(large.shelf_capacities.values().all(|capacity| *capacity == 10));
    }
}
