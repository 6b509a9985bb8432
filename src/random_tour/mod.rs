//! Random-permutation baseline.
//!
//! Draws uniformly random tours until one has finite cost or the time
//! budget runs out. Useful as a floor for benchmark comparisons and as a
//! sanity check that a scenario is feasible at all.

mod config;
mod runner;

pub use config::RandomTourConfig;
pub use runner::RandomTourRunner;
