//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the simulation.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Every order event is logged once, with the order id as a structured field and a
//! human-readable description as the message:
//!
//! ```text
//! INFO take_order: [ event: EXPIRY_SCHEDULED | name: Banana Split | id: a8cfcb76 ] order_id=a8cfcb76 deadline=2026-10-19 10:00:20 UTC
//! INFO shelf: FROZEN [Banana Split: 1.0000]
//! INFO [ event: COOKED | name: Banana Split | id: a8cfcb76 ] order_id=a8cfcb76 shelf=FROZEN
//! ```
//!
//! After every change the kitchen logs one `shelf:` line per shelf (HOT, COLD,
//! FROZEN, then OVERFLOW) with each order's current value.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`). Verbosity comes from the `RUST_LOG` environment variable:
//!
//! ```bash
//! # Cooked, moved, discarded, expired and delivered orders plus shelf contents
//! RUST_LOG=info kitchen-sim orders.json
//!
//! # Also received and accepted orders, every kitchen request and full payloads
//! RUST_LOG=debug kitchen-sim orders.json
//!
//! # Only the kitchen's client spans
//! RUST_LOG=kitchen_sim::clients=debug kitchen-sim orders.json
//! ```
//!
//! ## Debug Flag for Full Payload
//!
//! When you run with `RUST_LOG=debug`, client methods log their payload **once** at the start:
//!
//! ```rust,ignore
//! debug!(?order, "take_order called");
//! ```
//!
//! The `?` syntax records the variable using its `Debug` representation as a
//! structured field.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact() // spans inline, e.g. "take_order:"
        .init();
}
