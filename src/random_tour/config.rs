//! Random baseline configuration.

use std::time::Duration;

/// Configuration for the random-tour baseline.
#[derive(Debug, Clone)]
pub struct RandomTourConfig {
    /// Wall-clock budget. Checked once per attempted permutation.
    pub time_limit: Duration,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for RandomTourConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            seed: None,
        }
    }
}

impl RandomTourConfig {
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit.is_zero() {
            return Err("time_limit must be positive".into());
        }
        Ok(())
    }
}
