//! Branch-and-bound engine.
//!
//! Best-first search over partial tours. Each live node carries its own
//! reduced-cost matrix and accumulated lower bound; the priority queue is
//! ordered by partial-tour depth, deepest first, so complete tours are
//! reached early and the BSSF tightens quickly. Pruning is exclusively
//! against the BSSF cost, never via the queue key.
//!
//! The initial BSSF comes from the greedy constructor; a scenario the
//! greedy pass cannot complete is a hard precondition failure
//! ([`SolverError::InfeasibleSeed`](crate::error::SolverError)).

mod config;
mod node;
mod runner;

pub use config::BnbConfig;
pub use node::{CostMatrix, SearchNode};
pub use runner::BnbRunner;
