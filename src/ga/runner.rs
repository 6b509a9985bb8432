//! Generational loop of the genetic optimizer.

use super::breeding::{pick_distinct_parents, slice_crossover, swap_mutation};
use super::config::GaConfig;
use crate::error::SolverError;
use crate::greedy::{GreedyConfig, GreedyRunner};
use crate::random::{create_rng, permutation};
use crate::result::SolveResult;
use crate::scenario::{Scenario, UNREACHABLE};
use crate::tour::Tour;
use rand::Rng;
use std::time::Instant;

/// Executes the genetic optimizer.
pub struct GaRunner;

impl GaRunner {
    /// Runs generations until the budget expires, tracking the best
    /// individual ever seen as the BSSF.
    ///
    /// Result mapping: `count` = BSSF improvements, `max_queue` =
    /// population size, `total_states` = generations run. When every
    /// individual stayed infinite (infeasible scenario) the result has
    /// infinite cost and no solution.
    pub fn run(scenario: &Scenario, config: &GaConfig) -> Result<SolveResult, SolverError> {
        config.validate().map_err(SolverError::InvalidConfig)?;

        let start = Instant::now();
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // Greedy elites seed the population; the remainder is random.
        let greedy_config = GreedyConfig {
            time_limit: config.time_limit,
            seed: config.seed,
        };
        let elites = GreedyRunner::sample(scenario, &greedy_config, config.elite_size)?;

        let n = scenario.len();
        let mut population: Vec<Tour> = (0..config.population_size - elites.len())
            .map(|_| Tour::new(scenario, permutation(n, &mut rng)))
            .collect();
        population.extend(elites);

        let mut bssf = population
            .iter()
            .min_by(|a, b| a.cost().total_cmp(&b.cost()))
            .expect("population is never empty")
            .clone();
        let mut bssf_updates = 0usize;
        let mut generations = 1usize;

        while start.elapsed() < config.time_limit {
            let bred = breed_population(scenario, population, config, &mut rng);

            let mut next_generation = Vec::with_capacity(bred.len());
            for individual in &bred {
                let child = mutate_until_accepted(scenario, individual, config, &mut rng);
                if child.cost() < bssf.cost() {
                    bssf_updates += 1;
                    bssf = child.clone();
                }
                next_generation.push(child);
            }

            population = next_generation;
            generations += 1;
        }

        let cost = bssf.cost();
        let solution = (cost < UNREACHABLE).then_some(bssf);
        Ok(SolveResult {
            cost,
            time: start.elapsed(),
            count: bssf_updates,
            solution,
            max_queue: Some(config.population_size),
            total_states: Some(generations),
            pruned_states: None,
        })
    }
}

/// Sorts by cost, keeps the elites verbatim, and fills the remaining slots
/// with crossover children of elite-pool parents.
fn breed_population<R: Rng>(
    scenario: &Scenario,
    mut population: Vec<Tour>,
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Tour> {
    population.sort_by(|a, b| a.cost().total_cmp(&b.cost()));

    let mut next = population[..config.elite_size].to_vec();
    let pool = (config.elite_size * 2).min(population.len());

    for _ in config.elite_size..population.len() {
        let child = match pick_distinct_parents(
            population.len(),
            pool,
            config.choose_any_chance,
            config.parent_retry_cap,
            rng,
        ) {
            Some((first, second)) => {
                let route = slice_crossover(
                    population[first].route(),
                    population[second].route(),
                    rng,
                );
                Tour::new(scenario, route)
            }
            None => {
                // Exhausted pairing retries (degenerate population);
                // clone the best individual instead of self-breeding.
                log::warn!("parent pairing exhausted after {} retries", config.parent_retry_cap);
                population[0].clone()
            }
        };
        next.push(child);
    }
    next
}

/// Re-rolls swap mutations until one improves on the source individual or
/// the constant luck probability fires, bounded by the retry cap. On cap
/// exhaustion the last candidate is accepted.
fn mutate_until_accepted<R: Rng>(
    scenario: &Scenario,
    individual: &Tour,
    config: &GaConfig,
    rng: &mut R,
) -> Tour {
    let mut candidate = mutate(scenario, individual, rng);
    for _ in 0..config.mutation_retry_cap {
        if candidate.cost() < individual.cost()
            || rng.random_range(0.0..1.0) < config.accept_worse_probability
        {
            return candidate;
        }
        candidate = mutate(scenario, individual, rng);
    }
    log::warn!(
        "mutation acceptance exhausted after {} retries; accepting last candidate",
        config.mutation_retry_cap
    );
    candidate
}

fn mutate<R: Rng>(scenario: &Scenario, individual: &Tour, rng: &mut R) -> Tour {
    let mut route = individual.route().to_vec();
    swap_mutation(&mut route, rng);
    Tour::new(scenario, route)
}
