//! Orders and their time-decaying value.
//!
//! An order is worth `1.0` when cooking completes and loses value linearly with
//! the time it spends on a shelf. The slope depends on the shelf holding it (see
//! [`Order::value`]), so every shelf move snapshots the value reached so far and
//! decays from there at the new rate.
//!
//! Orders are owned by the kitchen for their whole stay; shelves and couriers
//! refer to them by [`OrderId`] only.

use crate::domain::OrderError;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Temperature group an order belongs to. Decides its primary shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Hot,
    Cold,
    Frozen,
}

impl Temperature {
    pub const ALL: [Temperature; 3] = [Temperature::Hot, Temperature::Cold, Temperature::Frozen];
}

impl FromStr for Temperature {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hot" => Ok(Temperature::Hot),
            "cold" => Ok(Temperature::Cold),
            "frozen" => Ok(Temperature::Frozen),
            _ => Err(OrderError::UnknownTemperature(s.to_string())),
        }
    }
}

impl Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Temperature::Hot => "HOT",
            Temperature::Cold => "COLD",
            Temperature::Frozen => "FROZEN",
        })
    }
}

/// Lifecycle events an order goes through, as they appear in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderEvent {
    Received,
    Cooked,
    Accepted,
    ExpiryScheduled,
    Moved,
    Expired,
    Discarded,
    PickedUp,
    Delivered,
}

impl Display for OrderEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderEvent::Received => "RECEIVED",
            OrderEvent::Cooked => "COOKED",
            OrderEvent::Accepted => "ACCEPTED",
            OrderEvent::ExpiryScheduled => "EXPIRY_SCHEDULED",
            OrderEvent::Moved => "MOVED",
            OrderEvent::Expired => "EXPIRED",
            OrderEvent::Discarded => "DISCARDED",
            OrderEvent::PickedUp => "PICKED_UP",
            OrderEvent::Delivered => "DELIVERED",
        })
    }
}

/// Payload describing an incoming order, as found in an order batch file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub id: String,
    pub name: String,
    #[serde(rename = "temp")]
    pub temperature: String,
    #[serde(rename = "shelfLife")]
    pub shelf_life: i64,
    #[serde(rename = "decayRate")]
    pub decay_rate: f64,
}

/// Represents a single perishable order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    name: String,
    temperature: Temperature,
    shelf_life_secs: u32,
    decay_rate: f64,
    receipt_time: DateTime<Utc>,

    // Set once each, later in the pipeline.
    fulfillment_time: Option<DateTime<Utc>>,
    delivery_time: Option<DateTime<Utc>>,

    // Decay baseline, reset on every shelf move.
    last_value_at_move: f64,
    last_move_time: Option<DateTime<Utc>>,
}

impl Order {
    /// Validating constructor.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for this order
    /// * `name` - Order name (e.g. "Cheese Pizza")
    /// * `temperature` - Temperature group
    /// * `shelf_life_secs` - Seconds the order can sit on a shelf before it is waste
    /// * `decay_rate` - Rate at which value deteriorates per second
    /// * `receipt_time` - When the order was received
    ///
    /// # Errors
    /// Empty id or name, negative shelf life, negative or non-finite decay rate.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        temperature: Temperature,
        shelf_life_secs: i64,
        decay_rate: f64,
        receipt_time: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        let id = id.into();
        let name = name.into();
        check_identity(&id, &name)?;
        if shelf_life_secs < 0 {
            return Err(OrderError::NegativeShelfLife(shelf_life_secs));
        }
        let shelf_life = u32::try_from(shelf_life_secs)
            .map_err(|_| OrderError::ShelfLifeTooLong(shelf_life_secs))?;
        if !decay_rate.is_finite() || decay_rate < 0.0 {
            return Err(OrderError::InvalidDecayRate(decay_rate));
        }

        Ok(Self {
            id: OrderId(id),
            name,
            temperature,
            shelf_life_secs: shelf_life,
            decay_rate,
            receipt_time,
            fulfillment_time: None,
            delivery_time: None,
            last_value_at_move: 1.0,
            last_move_time: None,
        })
    }

    /// Builds an order from a batch entry, parsing its temperature group.
    pub fn from_create_params(
        params: OrderCreate,
        receipt_time: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        check_identity(&params.id, &params.name)?;
        let temperature = params.temperature.parse()?;
        Self::new(
            params.id,
            params.name,
            temperature,
            params.shelf_life,
            params.decay_rate,
            receipt_time,
        )
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn shelf_life_secs(&self) -> u32 {
        self.shelf_life_secs
    }

    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    pub fn receipt_time(&self) -> DateTime<Utc> {
        self.receipt_time
    }

    pub fn fulfillment_time(&self) -> Option<DateTime<Utc>> {
        self.fulfillment_time
    }

    pub fn delivery_time(&self) -> Option<DateTime<Utc>> {
        self.delivery_time
    }

    /// Records that cooking finished. Decay starts from here.
    pub fn mark_fulfilled(&mut self, at: DateTime<Utc>) {
        self.fulfillment_time = Some(at);
        self.last_move_time = Some(at);
        self.last_value_at_move = 1.0;
    }

    pub fn mark_delivered(&mut self, at: DateTime<Utc>) {
        self.delivery_time = Some(at);
    }

    /// Value in `[0, 1]` at `at` while sitting on a shelf with `decay_modifier`.
    ///
    /// `value = last_value_at_move - decay_rate * age * decay_modifier / shelf_life`,
    /// where `age` is measured from the last move. Zero before cooking, and zero
    /// once more than `shelf_life` seconds have passed since cooking regardless
    /// of the decay rate.
    pub fn value(&self, decay_modifier: u32, at: DateTime<Utc>) -> f64 {
        let (Some(fulfilled), Some(last_move)) = (self.fulfillment_time, self.last_move_time)
        else {
            return 0.0;
        };
        if at < fulfilled || self.shelf_life_secs == 0 {
            return 0.0;
        }
        let shelf_life = f64::from(self.shelf_life_secs);
        if seconds_between(fulfilled, at) > shelf_life {
            return 0.0;
        }

        let age = seconds_between(last_move, at);
        let value = self.last_value_at_move
            - (self.decay_rate * age * f64::from(decay_modifier)) / shelf_life;
        value.clamp(0.0, 1.0)
    }

    /// Snapshots the value reached on the current shelf and restarts decay from
    /// `at`. Call before the order changes shelf, with the *old* shelf's modifier.
    pub fn move_from(&mut self, current_decay_modifier: u32, at: DateTime<Utc>) {
        self.last_value_at_move = self.value(current_decay_modifier, at);
        self.last_move_time = Some(at);
    }

    /// Estimated time the value reaches zero on a shelf with `current_decay_modifier`,
    /// capped to `fulfillment_time + shelf_life`. `None` until the order is cooked.
    pub fn expiry(&self, current_decay_modifier: u32) -> Option<DateTime<Utc>> {
        let fulfilled = self.fulfillment_time?;
        let last_move = self.last_move_time?;
        let hard_limit = fulfilled + TimeDelta::seconds(i64::from(self.shelf_life_secs));

        let slope = self.decay_rate * f64::from(current_decay_modifier);
        if slope <= 0.0 {
            return Some(hard_limit);
        }
        let ttl_secs = self.last_value_at_move * f64::from(self.shelf_life_secs) / slope;
        let decayed = last_move
            .checked_add_signed(TimeDelta::microseconds((ttl_secs * 1e6).round() as i64))
            .unwrap_or(hard_limit);
        Some(decayed.min(hard_limit))
    }

    /// One-line description used in event logs.
    pub fn describe(&self, event: OrderEvent) -> String {
        describe_event(event, &self.name, &self.id)
    }
}

/// Renders `[ event: <EVENT> | name: <name> | id: <id> ]`.
pub fn describe_event(event: OrderEvent, name: &str, id: &OrderId) -> String {
    format!("[ event: {event} | name: {name} | id: {id} ]")
}

fn check_identity(id: &str, name: &str) -> Result<(), OrderError> {
    if id.is_empty() {
        return Err(OrderError::EmptyId);
    }
    if name.is_empty() {
        return Err(OrderError::EmptyName(id.to_string()));
    }
    Ok(())
}

/// Fractional seconds from `from` to `to` (negative if `to` is earlier).
pub(crate) fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to - from;
    match delta.num_microseconds() {
        Some(micros) => micros as f64 / 1e6,
        None => delta.num_seconds() as f64,
    }
}
