//! Genetic optimizer configuration.

use std::time::Duration;

/// Configuration for the genetic optimizer.
///
/// # Builder Pattern
///
/// ```
/// use tsp_heur::ga::GaConfig;
/// use std::time::Duration;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_elite_size(10)
///     .with_time_limit(Duration::from_secs(5))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals per generation.
    pub population_size: usize,

    /// Number of lowest-cost individuals copied verbatim into the next
    /// generation and injected as greedy seeds at initialization. Must be
    /// smaller than the population.
    pub elite_size: usize,

    /// Probability of drawing parents from the whole population instead
    /// of the elite pool (top `2 * elite_size` by cost).
    pub choose_any_chance: f64,

    /// Probability of accepting a non-improving mutation. Constant, not a
    /// cooling schedule.
    pub accept_worse_probability: f64,

    /// Upper bound on mutation re-rolls per individual. On exhaustion the
    /// last candidate is accepted and a warning is logged.
    pub mutation_retry_cap: usize,

    /// Upper bound on attempts to draw two distinct parents.
    pub parent_retry_cap: usize,

    /// Wall-clock budget. Checked once per generation, so a full
    /// generation pass may overrun it.
    pub time_limit: Duration,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            elite_size: 20,
            choose_any_chance: 0.01,
            accept_worse_probability: 0.01,
            mutation_retry_cap: 1000,
            parent_retry_cap: 100,
            time_limit: Duration::from_secs(60),
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    pub fn with_choose_any_chance(mut self, p: f64) -> Self {
        self.choose_any_chance = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_accept_worse_probability(mut self, p: f64) -> Self {
        self.accept_worse_probability = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_retry_cap(mut self, cap: usize) -> Self {
        self.mutation_retry_cap = cap;
        self
    }

    pub fn with_parent_retry_cap(mut self, cap: usize) -> Self {
        self.parent_retry_cap = cap;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.elite_size == 0 {
            return Err("elite_size must be at least 1".into());
        }
        if self.elite_size >= self.population_size {
            return Err("elite_size must be smaller than population_size".into());
        }
        if self.mutation_retry_cap == 0 {
            return Err("mutation_retry_cap must be at least 1".into());
        }
        if self.parent_retry_cap == 0 {
            return Err("parent_retry_cap must be at least 1".into());
        }
        if self.time_limit.is_zero() {
            return Err("time_limit must be positive".into());
        }
        Ok(())
    }
}
