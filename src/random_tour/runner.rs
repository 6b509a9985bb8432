//! Random baseline execution loop.

use super::config::RandomTourConfig;
use crate::error::SolverError;
use crate::random::{create_rng, permutation};
use crate::result::SolveResult;
use crate::scenario::{Scenario, UNREACHABLE};
use crate::tour::Tour;
use std::time::Instant;

/// Executes the random-tour baseline.
pub struct RandomTourRunner;

impl RandomTourRunner {
    /// Draws random permutations until one has finite cost or the budget
    /// expires. `count` in the result is the number of permutations tried;
    /// an infeasible run yields infinite cost and no solution.
    pub fn run(scenario: &Scenario, config: &RandomTourConfig) -> Result<SolveResult, SolverError> {
        config.validate().map_err(SolverError::InvalidConfig)?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let n = scenario.len();
        let start = Instant::now();
        let mut count = 0usize;
        let mut found: Option<Tour> = None;

        while found.is_none() && start.elapsed() < config.time_limit {
            let tour = Tour::new(scenario, permutation(n, &mut rng));
            count += 1;
            if tour.cost() < UNREACHABLE {
                found = Some(tour);
            }
        }

        let cost = found.as_ref().map_or(UNREACHABLE, Tour::cost);
        Ok(SolveResult::basic(cost, start.elapsed(), count, found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn finite_scenario() -> Scenario {
        Scenario::from_matrix(vec![
            vec![0.0, 2.0, 9.0, 10.0],
            vec![1.0, 0.0, 6.0, 4.0],
            vec![15.0, 7.0, 0.0, 8.0],
            vec![6.0, 3.0, 12.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_finds_finite_tour_on_finite_matrix() {
        let scenario = finite_scenario();
        let config = RandomTourConfig::default().with_seed(42);
        let result = RandomTourRunner::run(&scenario, &config).unwrap();
        assert!(result.cost < UNREACHABLE);
        assert_eq!(result.count, 1);
        let tour = result.solution.expect("finite matrix must yield a tour");
        assert_eq!(tour.route().len(), 4);
    }

    #[test]
    fn test_infeasible_scenario_returns_none() {
        let scenario = Scenario::from_matrix(vec![
            vec![0.0, UNREACHABLE],
            vec![UNREACHABLE, 0.0],
        ])
        .unwrap();
        let config = RandomTourConfig::default()
            .with_time_limit(Duration::from_millis(20))
            .with_seed(42);
        let result = RandomTourRunner::run(&scenario, &config).unwrap();
        assert_eq!(result.cost, UNREACHABLE);
        assert!(result.solution.is_none());
        assert!(result.count >= 1);
    }

    #[test]
    fn test_counters_absent() {
        let scenario = finite_scenario();
        let config = RandomTourConfig::default().with_seed(1);
        let result = RandomTourRunner::run(&scenario, &config).unwrap();
        assert!(result.max_queue.is_none());
        assert!(result.total_states.is_none());
        assert!(result.pruned_states.is_none());
    }

    #[test]
    fn test_deterministic_for_seed() {
        let scenario = finite_scenario();
        let config = RandomTourConfig::default().with_seed(7);
        let a = RandomTourRunner::run(&scenario, &config).unwrap();
        let b = RandomTourRunner::run(&scenario, &config).unwrap();
        assert_eq!(a.cost, b.cost);
        assert_eq!(a.solution.map(|t| t.route().to_vec()),
                   b.solution.map(|t| t.route().to_vec()));
    }

    #[test]
    fn test_rejects_zero_budget() {
        let scenario = finite_scenario();
        let config = RandomTourConfig::default().with_time_limit(Duration::ZERO);
        let err = RandomTourRunner::run(&scenario, &config).unwrap_err();
        assert!(matches!(err, SolverError::InvalidConfig(_)));
    }
}
