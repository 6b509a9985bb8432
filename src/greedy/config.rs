//! Greedy constructor configuration.

use std::time::Duration;

/// Configuration for the nearest-neighbor constructor.
#[derive(Debug, Clone)]
pub struct GreedyConfig {
    /// Wall-clock budget for the whole multi-start pass. Checked inside
    /// the construction loop, so one hop may overrun it slightly.
    pub time_limit: Duration,

    /// Random seed controlling the start-city shuffle.
    pub seed: Option<u64>,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            seed: None,
        }
    }
}

impl GreedyConfig {
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
