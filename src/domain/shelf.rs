//! Fixed-capacity shelves and the reports used to log their contents.

use crate::domain::{OrderId, Temperature};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Decay multiplier of a shelf matching the order's temperature.
pub const TEMPERATURE_DECAY_MODIFIER: u32 = 1;

/// Decay multiplier of the overflow shelf.
pub const OVERFLOW_DECAY_MODIFIER: u32 = 2;

/// Identifies one of the kitchen's shelves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShelfKind {
    Temperature(Temperature),
    Overflow,
}

impl ShelfKind {
    pub fn decay_modifier(self) -> u32 {
        match self {
            ShelfKind::Temperature(_) => TEMPERATURE_DECAY_MODIFIER,
            ShelfKind::Overflow => OVERFLOW_DECAY_MODIFIER,
        }
    }
}

impl Display for ShelfKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShelfKind::Temperature(temperature) => temperature.fmt(f),
            ShelfKind::Overflow => f.write_str("OVERFLOW"),
        }
    }
}

/// A single order shelf.
///
/// Holds order ids only; the kitchen owns the orders themselves. Ids iterate in
/// sorted order, which keeps rebalancing and seeded discards reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct Shelf {
    max_capacity: usize,
    decay_modifier: u32,
    orders: BTreeSet<OrderId>,
}

impl Shelf {
    pub fn new(max_capacity: usize, decay_modifier: u32) -> Self {
        Self {
            max_capacity,
            decay_modifier,
            orders: BTreeSet::new(),
        }
    }

    /// Adds `id` if there is room. A rejected add leaves the shelf untouched.
    #[must_use]
    pub fn add(&mut self, id: OrderId) -> bool {
        if self.at_capacity() {
            return false;
        }
        self.orders.insert(id);
        true
    }

    /// Removes `id`; returns whether it was present.
    pub fn remove(&mut self, id: &OrderId) -> bool {
        self.orders.remove(id)
    }

    pub fn contains(&self, id: &OrderId) -> bool {
        self.orders.contains(id)
    }

    pub fn at_capacity(&self) -> bool {
        self.orders.len() >= self.max_capacity
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn decay_modifier(&self) -> u32 {
        self.decay_modifier
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderId> {
        self.orders.iter()
    }
}

/// An order as listed in a shelf report.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfEntry {
    pub id: OrderId,
    pub name: String,
    pub value: f64,
}

/// Snapshot of one shelf's contents and their values at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfReport {
    pub shelf: ShelfKind,
    pub capacity: usize,
    pub entries: Vec<ShelfEntry>,
}

impl Display for ShelfReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "shelf: {} [", self.shelf)?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:.4}", entry.name, entry.value)?;
        }
        f.write_str("]")
    }
}
