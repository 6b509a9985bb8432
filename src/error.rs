//! Error types for scenario validation and solver preconditions.

use thiserror::Error;

/// Errors surfaced by scenario construction and the solver facade.
///
/// Budget exhaustion is never an error — algorithms return the best
/// solution found so far. Errors are reserved for precondition failures
/// that must not be silently defaulted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A solve method was called before a scenario was attached.
    #[error("no scenario attached; call set_scenario first")]
    ScenarioNotSet,

    /// The scenario failed validation (empty city list, non-square matrix,
    /// inconsistent city indices).
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    /// An algorithm configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Branch-and-bound requires a feasible greedy tour as its initial
    /// BSSF; the greedy constructor found none within its budget.
    #[error("greedy constructor found no feasible tour to seed branch-and-bound")]
    InfeasibleSeed,
}
