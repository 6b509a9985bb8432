//! Time-budgeted solvers for the Traveling Salesman Problem.
//!
//! Given a [`Scenario`](scenario::Scenario) — an indexed set of cities plus a
//! [`CostModel`](scenario::CostModel) that may declare edges unreachable —
//! the crate approximates a minimum-cost Hamiltonian cycle with four
//! independent, wall-clock-bounded algorithms:
//!
//! - **Branch-and-bound** ([`bnb`]): best-first search over partial tours
//!   with per-node reduced-cost matrices and BSSF pruning. The priority
//!   queue is ordered by partial-tour depth (deepest first), which drives
//!   the search toward complete tours early to tighten the bound.
//! - **Genetic optimizer** ([`ga`]): elite-preserving generational search
//!   with slice crossover and swap mutation under an improvement-or-luck
//!   acceptance rule.
//! - **Greedy constructor** ([`greedy`]): nearest-neighbor tours from every
//!   start city, used standalone and as the seed for the other two.
//! - **Random baseline** ([`random_tour`]): repeated random permutations
//!   until one has finite cost.
//!
//! All four return the same [`SolveResult`](result::SolveResult) record, so
//! callers (benchmark scripts, UIs, CSV exporters) treat them uniformly.
//! The [`TspSolver`](solver::TspSolver) facade dispatches by algorithm and
//! enforces the attach-a-scenario-first precondition.
//!
//! # Determinism
//!
//! Every config carries an optional seed; with a fixed seed and a budget
//! long enough to avoid early cutoff, runs are reproducible. No component
//! touches a hidden global RNG.

pub mod bnb;
pub mod error;
pub mod ga;
pub mod greedy;
pub mod random;
pub mod random_tour;
pub mod result;
pub mod scenario;
pub mod solver;
pub mod tour;
