//! Genetic optimizer.
//!
//! Elite-preserving generational search over tour permutations: the best
//! greedy tours seed an otherwise random population, parents are drawn
//! from an elite pool, offspring come from slice crossover, and swap
//! mutations are accepted only when improving (or with a small constant
//! luck probability, which keeps the search from freezing in local optima
//! without any cooling schedule).

mod breeding;
mod config;
mod runner;

pub use breeding::{pick_distinct_parents, slice_crossover, swap_mutation};
pub use config::GaConfig;
pub use runner::GaRunner;
