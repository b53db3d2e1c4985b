//! # Kitchen Simulation
//!
//! Runs one batch of orders through a simulated kitchen.
//!
//! ```bash
//! KITCHEN_SIM_KITCHEN_SIZE=SMALL KITCHEN_SIM_ORDERS_PER_SECOND=10 RUST_LOG=info \
//!     kitchen-sim orders.json
//! ```
//!
//! See [`kitchen_sim::lifecycle::config`] for every setting.

use kitchen_sim::lifecycle::tracing::setup_tracing;
use kitchen_sim::lifecycle::{KitchenSimulation, SimulationConfig, SimulationError, SimulationReport};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    // Setup tracing once for the entire application
    setup_tracing();

    match run() {
        Ok(report) => {
            info!(?report, "Simulation completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Simulation failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<SimulationReport, SimulationError> {
    let path = std::env::args().nth(1).ok_or(SimulationError::Usage)?;
    let config = SimulationConfig::from_env()?;
    config.validate()?;
    info!(?config, %path, "Starting kitchen simulation");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .enable_all()
        .build()
        .map_err(SimulationError::Runtime)?;

    runtime.block_on(async move { KitchenSimulation::new(config).run_from_json(path).await })
}
