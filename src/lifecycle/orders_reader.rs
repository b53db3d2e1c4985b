//! Loading order batches from JSON.
//!
//! A batch is a JSON array of `{ "id", "name", "temp", "shelfLife", "decayRate" }`
//! objects. Entries are validated one by one; what happens to an invalid entry is
//! decided by the run's `continue_after_invalid_order` setting.

use crate::domain::{Order, OrderCreate};
use crate::lifecycle::SimulationError;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

/// Orders that passed validation, plus how many entries were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBatch {
    pub orders: Vec<Order>,
    pub skipped: usize,
}

/// Reads the raw batch entries from `path`.
pub fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<OrderCreate>, SimulationError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SimulationError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Parses the raw batch entries from a JSON string.
pub fn parse_orders(json: &str) -> Result<Vec<OrderCreate>, SimulationError> {
    Ok(serde_json::from_str(json)?)
}

/// Turns raw entries into orders received at `receipt_time`.
///
/// # Errors
/// [`SimulationError::InvalidOrder`] for the first bad entry, unless
/// `continue_after_invalid_order` is set, in which case bad entries are logged
/// and skipped.
pub fn validate_orders(
    entries: Vec<OrderCreate>,
    receipt_time: DateTime<Utc>,
    continue_after_invalid_order: bool,
) -> Result<OrderBatch, SimulationError> {
    let mut orders = Vec::with_capacity(entries.len());
    let mut skipped = 0;
    for (index, entry) in entries.into_iter().enumerate() {
        let id = entry.id.clone();
        match Order::from_create_params(entry, receipt_time) {
            Ok(order) => orders.push(order),
            Err(source) if continue_after_invalid_order => {
                warn!(index, order_id = %id, error = %source, "Skipping invalid order");
                skipped += 1;
            }
            Err(source) => return Err(SimulationError::InvalidOrder { index, source }),
        }
    }
    info!(valid = orders.len(), skipped, "Order batch loaded");
    Ok(OrderBatch { orders, skipped })
}

/// Reads and validates the batch at `path`.
pub fn read_order_batch<P: AsRef<Path>>(
    path: P,
    receipt_time: DateTime<Utc>,
    continue_after_invalid_order: bool,
) -> Result<OrderBatch, SimulationError> {
    let entries = read_orders_from_file(path)?;
    validate_orders(entries, receipt_time, continue_after_invalid_order)
}
