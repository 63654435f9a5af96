//! Trial execution and statistics.
//!
//! - [`engine`]: Core trial runner (serial and rayon-parallel batches)
//! - [`statistics`]: Aggregate statistics and JSON output
//! - [`sweep`]: Point-count grids and the multi-n sweep driver

pub mod engine;
pub mod statistics;
pub mod sweep;

pub use engine::{simulate_batch, simulate_batch_serial, simulate_trial, SimulationResult};
pub use statistics::{aggregate_statistics, save_statistics, ExperimentStatistics};
pub use sweep::{range_grid, resolve_grid, run_sweep, SweepEntry};
