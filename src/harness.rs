//! Benchmark and validation driver for the selection strategies.
//!
//! One parametrized driver replaces a copy of the timing loop per algorithm:
//! - `config`: run parameters
//! - `data`: synthetic lowercase items
//! - `timing`: best-of-N timing of an [`Algorithm`](crate::Algorithm)
//! - `histogram`: output distributions and a chi-square check against uniform
//! - `report`: CSV profile output

pub mod config;
pub mod data;
pub mod histogram;
pub mod report;
pub mod timing;

pub use config::BenchConfig;
pub use data::{generate_items, random_lowercase};
pub use histogram::{parallel_trials, run_trials, Histogram};
pub use report::CsvReport;
pub use timing::{profile, time_algorithm, time_all, ProfileRow, Timing};
