//! Uniform result record produced by every algorithm.

use crate::scenario::Cost;
use crate::tour::Tour;
use std::time::Duration;

/// Algorithm-agnostic outcome of a solver run.
///
/// Every field is always present; the three search-specific counters are
/// `None` for algorithms where they do not apply, so callers can consume
/// results from any algorithm with one shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Cost of the best tour found; infinite when none was found.
    pub cost: Cost,

    /// Wall-clock time spent inside the algorithm.
    pub time: Duration,

    /// Algorithm-specific success counter: solutions found (random,
    /// greedy), BSSF improvements (branch-and-bound, genetic).
    pub count: usize,

    /// The best tour found, if any.
    pub solution: Option<Tour>,

    /// Branch-and-bound: largest queue size observed.
    /// Genetic: population size.
    pub max_queue: Option<usize>,

    /// Branch-and-bound: total states generated.
    /// Genetic: generations run.
    pub total_states: Option<usize>,

    /// Branch-and-bound: states pruned against the BSSF.
    pub pruned_states: Option<usize>,
}

impl SolveResult {
    /// Result shape for algorithms without search counters.
    pub fn basic(cost: Cost, time: Duration, count: usize, solution: Option<Tour>) -> Self {
        Self {
            cost,
            time,
            count,
            solution,
            max_queue: None,
            total_states: None,
            pruned_states: None,
        }
    }
}

impl std::fmt::Display for SolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solve result:")?;
        writeln!(f, "  Best cost:      {}", self.cost)?;
        writeln!(f, "  Time:           {:.3?}", self.time)?;
        writeln!(f, "  Count:          {}", self.count)?;
        if let Some(max_queue) = self.max_queue {
            writeln!(f, "  Max queue:      {max_queue}")?;
        }
        if let Some(total) = self.total_states {
            writeln!(f, "  Total states:   {total}")?;
        }
        if let Some(pruned) = self.pruned_states {
            writeln!(f, "  Pruned states:  {pruned}")?;
        }
        Ok(())
    }
}
