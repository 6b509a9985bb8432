//! Solver facade: scenario attachment and per-algorithm entry points.

use crate::bnb::{BnbConfig, BnbRunner};
use crate::error::SolverError;
use crate::ga::{GaConfig, GaRunner};
use crate::greedy::{GreedyConfig, GreedyRunner};
use crate::random_tour::{RandomTourConfig, RandomTourRunner};
use crate::result::SolveResult;
use crate::scenario::Scenario;
use std::sync::Arc;
use std::time::Duration;

/// Facade orchestrating algorithm selection over an attached scenario.
///
/// All methods fail with [`SolverError::ScenarioNotSet`] until a scenario
/// is attached. The scenario is held behind an `Arc` so callers can keep
/// inspecting it while results are produced.
///
/// ```
/// use tsp_heur::scenario::Scenario;
/// use tsp_heur::solver::TspSolver;
/// use std::time::Duration;
///
/// let scenario = Scenario::from_matrix(vec![
///     vec![0.0, 2.0, 9.0, 10.0],
///     vec![1.0, 0.0, 6.0, 4.0],
///     vec![15.0, 7.0, 0.0, 8.0],
///     vec![6.0, 3.0, 12.0, 0.0],
/// ]).unwrap();
///
/// let mut solver = TspSolver::new();
/// solver.set_scenario(scenario);
/// let result = solver.greedy(Duration::from_secs(1)).unwrap();
/// assert!(result.cost.is_finite());
/// ```
#[derive(Default)]
pub struct TspSolver {
    scenario: Option<Arc<Scenario>>,
}

impl TspSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches (or replaces) the scenario to solve.
    pub fn set_scenario(&mut self, scenario: Scenario) {
        self.scenario = Some(Arc::new(scenario));
    }

    pub fn scenario(&self) -> Option<&Arc<Scenario>> {
        self.scenario.as_ref()
    }

    fn require_scenario(&self) -> Result<&Scenario, SolverError> {
        self.scenario.as_deref().ok_or(SolverError::ScenarioNotSet)
    }

    /// Random-permutation baseline within the given budget.
    pub fn random_tour(&self, time_limit: Duration) -> Result<SolveResult, SolverError> {
        self.random_tour_with(&RandomTourConfig::default().with_time_limit(time_limit))
    }

    pub fn random_tour_with(&self, config: &RandomTourConfig) -> Result<SolveResult, SolverError> {
        RandomTourRunner::run(self.require_scenario()?, config)
    }

    /// Greedy nearest-neighbor constructor within the given budget.
    pub fn greedy(&self, time_limit: Duration) -> Result<SolveResult, SolverError> {
        self.greedy_with(&GreedyConfig::default().with_time_limit(time_limit))
    }

    pub fn greedy_with(&self, config: &GreedyConfig) -> Result<SolveResult, SolverError> {
        GreedyRunner::run(self.require_scenario()?, config)
    }

    /// Branch-and-bound search within the given budget.
    pub fn branch_and_bound(&self, time_limit: Duration) -> Result<SolveResult, SolverError> {
        self.branch_and_bound_with(&BnbConfig::default().with_time_limit(time_limit))
    }

    pub fn branch_and_bound_with(&self, config: &BnbConfig) -> Result<SolveResult, SolverError> {
        BnbRunner::run(self.require_scenario()?, config)
    }

    /// Genetic optimizer within the given budget.
    pub fn genetic(&self, time_limit: Duration) -> Result<SolveResult, SolverError> {
        self.genetic_with(&GaConfig::default().with_time_limit(time_limit))
    }

    pub fn genetic_with(&self, config: &GaConfig) -> Result<SolveResult, SolverError> {
        GaRunner::run(self.require_scenario()?, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asymmetric_scenario() -> Scenario {
        Scenario::from_matrix(vec![
            vec![0.0, 2.0, 9.0, 10.0],
            vec![1.0, 0.0, 6.0, 4.0],
            vec![15.0, 7.0, 0.0, 8.0],
            vec![6.0, 3.0, 12.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_calls_before_attach() {
        let solver = TspSolver::new();
        let budget = Duration::from_millis(10);
        assert_eq!(solver.random_tour(budget).unwrap_err(), SolverError::ScenarioNotSet);
        assert_eq!(solver.greedy(budget).unwrap_err(), SolverError::ScenarioNotSet);
        assert_eq!(solver.branch_and_bound(budget).unwrap_err(), SolverError::ScenarioNotSet);
        assert_eq!(solver.genetic(budget).unwrap_err(), SolverError::ScenarioNotSet);
    }

    #[test]
    fn test_all_algorithms_share_result_shape() {
        let mut solver = TspSolver::new();
        solver.set_scenario(asymmetric_scenario());
        let budget = Duration::from_millis(50);

        let random = solver
            .random_tour_with(&RandomTourConfig::default().with_time_limit(budget).with_seed(42))
            .unwrap();
        let greedy = solver
            .greedy_with(&GreedyConfig::default().with_time_limit(budget).with_seed(42))
            .unwrap();
        let bnb = solver
            .branch_and_bound_with(&BnbConfig::default().with_time_limit(budget).with_seed(42))
            .unwrap();
        let ga = solver
            .genetic_with(
                &GaConfig::default()
                    .with_population_size(20)
                    .with_elite_size(4)
                    .with_time_limit(budget)
                    .with_seed(42),
            )
            .unwrap();

        for result in [&random, &greedy, &bnb, &ga] {
            assert!(result.cost.is_finite());
            assert!(result.solution.is_some());
        }
        // Search counters only where they apply.
        assert!(random.max_queue.is_none());
        assert!(greedy.max_queue.is_none());
        assert!(bnb.max_queue.is_some() && bnb.pruned_states.is_some());
        assert!(ga.max_queue.is_some() && ga.pruned_states.is_none());
        // Exact search dominates the heuristics on this instance.
        assert!(bnb.cost <= greedy.cost);
        assert!(bnb.cost <= ga.cost);
        assert!(bnb.cost <= random.cost);
    }

    #[test]
    fn test_scenario_replacement() {
        let mut solver = TspSolver::new();
        solver.set_scenario(asymmetric_scenario());
        assert_eq!(solver.scenario().unwrap().len(), 4);
        solver.set_scenario(Scenario::from_matrix(vec![vec![0.0]]).unwrap());
        assert_eq!(solver.scenario().unwrap().len(), 1);
    }
}
