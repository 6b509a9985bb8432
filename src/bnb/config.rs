//! Branch-and-bound configuration.

use std::time::Duration;

/// Configuration for the branch-and-bound engine.
#[derive(Debug, Clone)]
pub struct BnbConfig {
    /// Wall-clock budget, shared with the greedy seeding pass. Checked
    /// once per node expansion, so one expansion may overrun it.
    pub time_limit: Duration,

    /// Random seed, forwarded to the greedy seeding pass (the engine
    /// itself is deterministic given the seed tour).
    pub seed: Option<u64>,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            seed: None,
        }
    }
}

impl BnbConfig {
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
