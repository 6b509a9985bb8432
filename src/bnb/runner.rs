//! Best-first branch-and-bound loop.

use super::config::BnbConfig;
use super::node::SearchNode;
use crate::error::SolverError;
use crate::greedy::{GreedyConfig, GreedyRunner};
use crate::result::SolveResult;
use crate::scenario::Scenario;
use crate::tour::Tour;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Executes the branch-and-bound search.
pub struct BnbRunner;

impl BnbRunner {
    /// Runs the search until the queue empties (exhaustive convergence) or
    /// the budget expires.
    ///
    /// The greedy constructor supplies the initial BSSF; if it finds no
    /// feasible tour the run fails with [`SolverError::InfeasibleSeed`]
    /// rather than proceeding without a pruning bound.
    ///
    /// Result counters: `count` = complete-tour improvements (seed
    /// excluded), `max_queue` = largest queue observed, `total_states` =
    /// children generated, `pruned_states` = nodes discarded against the
    /// BSSF.
    pub fn run(scenario: &Scenario, config: &BnbConfig) -> Result<SolveResult, SolverError> {
        config.validate().map_err(SolverError::InvalidConfig)?;

        let start = Instant::now();
        let ncities = scenario.len();

        let mut count = 0usize;
        let mut max_queue = 0usize;
        let mut total_states = 0usize;
        let mut pruned_states = 0usize;

        let mut queue = BinaryHeap::new();
        queue.push(SearchNode::root(scenario));

        let greedy_config = GreedyConfig {
            time_limit: config.time_limit,
            seed: config.seed,
        };
        let seed_result = GreedyRunner::run(scenario, &greedy_config)?;
        let mut bssf = seed_result.solution.ok_or(SolverError::InfeasibleSeed)?;

        while let Some(node) = {
            if start.elapsed() < config.time_limit {
                queue.pop()
            } else {
                None
            }
        } {
            max_queue = max_queue.max(queue.len());

            if node.bound >= bssf.cost() {
                pruned_states += 1;
                continue;
            }

            if node.depth() == ncities {
                let tour = Tour::new(scenario, node.path);
                if tour.cost() < bssf.cost() {
                    count += 1;
                    log::debug!("new BSSF: {} after {:?}", tour.cost(), start.elapsed());
                    bssf = tour;
                }
                continue;
            }

            for city in 0..ncities {
                if node.visits(city) {
                    continue;
                }
                queue.push(node.child(city));
                total_states += 1;
            }
        }

        Ok(SolveResult {
            cost: bssf.cost(),
            time: start.elapsed(),
            count,
            solution: Some(bssf),
            max_queue: Some(max_queue),
            total_states: Some(total_states),
            pruned_states: Some(pruned_states),
        })
    }
}
