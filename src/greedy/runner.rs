//! Nearest-neighbor construction loop.

use super::config::GreedyConfig;
use crate::error::SolverError;
use crate::random::{create_rng, shuffle};
use crate::result::SolveResult;
use crate::scenario::{Scenario, UNREACHABLE};
use crate::tour::Tour;
use std::time::Instant;

/// Executes the multi-start nearest-neighbor constructor.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs one multi-start pass and returns the best finite-cost tour.
    ///
    /// `count` is the number of finite-cost tours completed. When every
    /// attempted start hit an unreachable hop the result carries infinite
    /// cost and no solution; callers must check before dereferencing.
    pub fn run(scenario: &Scenario, config: &GreedyConfig) -> Result<SolveResult, SolverError> {
        config.validate().map_err(SolverError::InvalidConfig)?;

        let start = Instant::now();
        let sample = collect_sample(scenario, config, start);
        let count = sample.len();
        let best = sample.into_iter().next();
        let cost = best.as_ref().map_or(UNREACHABLE, Tour::cost);

        Ok(SolveResult::basic(cost, start.elapsed(), count, best))
    }

    /// Returns the `k` lowest-cost completed tours, best first, for use as
    /// elite seeds. May return fewer than `k` (possibly none) when tours
    /// were infeasible or the budget ran out.
    pub fn sample(
        scenario: &Scenario,
        config: &GreedyConfig,
        k: usize,
    ) -> Result<Vec<Tour>, SolverError> {
        config.validate().map_err(SolverError::InvalidConfig)?;
        let mut sample = collect_sample(scenario, config, Instant::now());
        sample.truncate(k);
        Ok(sample)
    }
}

/// One nearest-neighbor tour per start city, shuffled start order, budget
/// checked before every hop. Completed finite tours, sorted by cost.
fn collect_sample(scenario: &Scenario, config: &GreedyConfig, start_time: Instant) -> Vec<Tour> {
    let mut rng = match config.seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    };

    let mut starts: Vec<usize> = (0..scenario.len()).collect();
    shuffle(&mut starts, &mut rng);

    let mut sample = Vec::new();

    'starts: for &first in &starts {
        let mut route = vec![first];
        // Shuffled order doubles as the deterministic tie-break: the
        // first equally-near city in list order wins.
        let mut remaining: Vec<usize> = starts.iter().copied().filter(|&c| c != first).collect();
        let mut current = first;

        while !remaining.is_empty() {
            if start_time.elapsed() > config.time_limit {
                break 'starts;
            }
            let mut nearest_pos = 0;
            let mut nearest_cost = scenario.cost(current, remaining[0]);
            for (pos, &candidate) in remaining.iter().enumerate().skip(1) {
                let hop = scenario.cost(current, candidate);
                if hop < nearest_cost {
                    nearest_pos = pos;
                    nearest_cost = hop;
                }
            }
            current = remaining.remove(nearest_pos);
            route.push(current);
        }

        if route.len() == scenario.len() {
            let tour = Tour::new(scenario, route);
            if tour.cost() < UNREACHABLE {
                sample.push(tour);
            }
        }
    }

    sample.sort_by(|a, b| a.cost().total_cmp(&b.cost()));
    sample
}
