//! Run configuration.
//!
//! Loads configuration from `KITCHEN_SIM_*` environment variables on top of
//! defaults. The order file path is not part of it; `main` takes that from the
//! command line.

use crate::kitchen_actor::KitchenOptions;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "KITCHEN_SIM_";

/// Errors raised while loading or validating a [`SimulationConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    /// The values parse but do not make a runnable simulation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Predefined shelf layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KitchenSize {
    /// 4 orders per temperature shelf, 6 on overflow.
    Small,
    /// 10 orders per temperature shelf, 15 on overflow.
    #[default]
    Large,
}

impl FromStr for KitchenSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SMALL" => Ok(KitchenSize::Small),
            "LARGE" => Ok(KitchenSize::Large),
            _ => Err(ConfigError::InvalidValue {
                key: format!("{ENV_PREFIX}KITCHEN_SIZE"),
                value: s.to_string(),
            }),
        }
    }
}

/// Settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Name of the simulated kitchen
    pub kitchen_name: String,
    /// Shelf layout
    pub kitchen_size: KitchenSize,
    /// Rate at which incoming orders are handed to the kitchen
    pub orders_per_second: f64,
    /// Skip invalid orders with a warning instead of aborting the run
    pub continue_after_invalid_order: bool,
    /// Tokio worker threads
    pub worker_threads: usize,
    /// Seed for discards and courier delays; random when unset
    pub seed: Option<u64>,
    /// Shortest courier arrival delay in seconds
    pub courier_min_delay_secs: u64,
    /// Longest courier arrival delay in seconds
    pub courier_max_delay_secs: u64,
    /// Capacity of the kitchen's request queue
    pub request_buffer: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            kitchen_name: "Ghost Kitchen".to_string(),
            kitchen_size: KitchenSize::Large,
            orders_per_second: 2.0,
            continue_after_invalid_order: true,
            worker_threads: std::thread::available_parallelism()
                .map(|threads| threads.get())
                .unwrap_or(1),
            seed: None,
            courier_min_delay_secs: 2,
            courier_max_delay_secs: 6,
            request_buffer: 64,
        }
    }
}

impl SimulationConfig {
    /// Defaults overridden by `KITCHEN_SIM_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each
    /// `KITCHEN_SIM_*` key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let var = |name: &str| {
            let key = format!("{ENV_PREFIX}{name}");
            lookup(&key).map(|value| (key, value))
        };

        if let Some((_, value)) = var("KITCHEN_NAME") {
            config.kitchen_name = value;
        }
        if let Some((_, value)) = var("KITCHEN_SIZE") {
            config.kitchen_size = value.parse()?;
        }
        if let Some((key, value)) = var("ORDERS_PER_SECOND") {
            config.orders_per_second = parse(&key, &value)?;
        }
        if let Some((key, value)) = var("CONTINUE_AFTER_INVALID_ORDER") {
            config.continue_after_invalid_order = parse(&key, &value)?;
        }
        if let Some((key, value)) = var("WORKER_THREADS") {
            config.worker_threads = parse(&key, &value)?;
        }
        if let Some((key, value)) = var("SEED") {
            config.seed = Some(parse(&key, &value)?);
        }
        if let Some((key, value)) = var("COURIER_MIN_DELAY_SECS") {
            config.courier_min_delay_secs = parse(&key, &value)?;
        }
        if let Some((key, value)) = var("COURIER_MAX_DELAY_SECS") {
            config.courier_max_delay_secs = parse(&key, &value)?;
        }
        if let Some((key, value)) = var("REQUEST_BUFFER") {
            config.request_buffer = parse(&key, &value)?;
        }
        Ok(config)
    }

    /// Rejects settings the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.orders_per_second > 0.0 && self.orders_per_second.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "orders_per_second must be positive, got {}",
                self.orders_per_second
            )));
        }
        if self.worker_threads == 0 {
            return Err(ConfigError::Invalid("worker_threads must be at least 1".to_string()));
        }
        if self.courier_min_delay_secs > self.courier_max_delay_secs {
            return Err(ConfigError::Invalid(format!(
                "empty courier delay range {}..={}",
                self.courier_min_delay_secs, self.courier_max_delay_secs
            )));
        }
        if self.request_buffer == 0 {
            return Err(ConfigError::Invalid("request_buffer must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn courier_delay_secs(&self) -> RangeInclusive<u64> {
        self.courier_min_delay_secs..=self.courier_max_delay_secs
    }

    pub fn kitchen_options(&self) -> KitchenOptions {
        match self.kitchen_size {
            KitchenSize::Small => KitchenOptions::small(self.kitchen_name.clone()),
            KitchenSize::Large => KitchenOptions::large(self.kitchen_name.clone()),
        }
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
