#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Kitchen Simulation
//!
//! > **Perishable orders, finite shelves, and couriers on a timer.**
//!
//! This crate simulates a delivery kitchen. Orders arrive at a fixed rate, are
//! cooked instantly and placed on a shelf matching their temperature, and lose
//! value while they wait for a courier. When shelves fill up, orders spill onto
//! an overflow shelf where they decay twice as fast, and when that fills too,
//! something has to go.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One Owner for Kitchen State
//!
//! Placement, pickup and expiry all touch the same shelves, and they arrive from
//! many tasks at once: the pacer, every courier, every expiry timer. Rather than
//! locking, the [`Kitchen`](kitchen_actor::Kitchen) is owned by a single actor
//! task that handles one request at a time.
//!
//! This gives us:
//! - **No locks**: kitchen code is plain `&mut self` methods.
//! - **Testability**: the same methods run synchronously in unit tests.
//! - **Idempotent races**: pickup and expiry of the same order are two queued
//!   requests; whichever runs second finds nothing and does nothing.
//!
//! ## 🚀 Core Concepts
//!
//! ### Time-Decaying Value
//! An order's value starts at `1.0` when cooked and drops linearly with time on
//! its shelf, faster on overflow. Moving shelves snapshots the value reached so
//! far. See [`Order::value`](domain::Order::value).
//!
//! ### Timers Post Messages
//! Expiry timers never touch kitchen state. They sleep until the deadline and
//! post an `Expire` request onto the kitchen's queue, through a weak sender so a
//! closed kitchen cancels them. See [`framework::timer`].
//!
//! ### Mocking: Testing without Pain
//! Code that talks to the kitchen (couriers, the client) is tested against a
//! mock channel instead of a running actor. See the [`framework::mock`] module.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each layer defines its own error type ([`OrderError`](domain::OrderError),
//! [`KitchenError`](kitchen_actor::KitchenError),
//! [`CourierError`](courier::CourierError),
//! [`SimulationError`](lifecycle::SimulationError)). Expected misses, such as a
//! courier arriving after its order was discarded, are `Ok(None)`, not errors.
//!
//! ### 2. Async Context Injection
//! The kitchen actor's [`ExpiryScheduler`](kitchen_actor::ExpiryScheduler) needs a
//! handle to the actor itself, so it is injected via `run()` after the actor is
//! created, not at construction time.
//!
//! ### 3. Observability
//! We use `tracing` everywhere with structured logging. See the
//! [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The serialized actor, its sender, the clock and one-shot timers.
//! - **Key items**: [`SerialActor`](framework::SerialActor), [`RequestSender`](framework::RequestSender), [`post_at`](framework::post_at).
//!
//! ### 2. The Data ([`domain`])
//! Orders, their valuation math, and shelves. No async, no I/O.
//!
//! ### 3. The Kitchen ([`kitchen_actor`])
//! Placement, overflow relief, pickup and expiry, and the actor that owns them.
//!
//! ### 4. The Interface ([`clients`], [`courier`])
//! [`KitchenClient`](clients::KitchenClient) hides the message passing; couriers
//! use it to collect their order.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Configuration, batch loading and the [`KitchenSimulation`](lifecycle::KitchenSimulation) driver.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run a batch with info logs
//! RUST_LOG=info cargo run -- orders.json
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod courier;
pub mod domain;
pub mod framework;
pub mod kitchen_actor;
pub mod lifecycle;
