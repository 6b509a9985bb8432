//! Greedy nearest-neighbor constructor.
//!
//! Builds one tour per start city by repeatedly hopping to the cheapest
//! unvisited city, keeping only completed tours with finite cost. Start
//! order is shuffled so that truncated runs still sample diverse starts.
//!
//! Used standalone (best single tour) and as the elite seed supplier for
//! the genetic optimizer and the initial BSSF for branch-and-bound.

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::GreedyRunner;
