use crate::Time;
use serde::Deserialize;
use serde::Serialize;

/// driver-owned simulation budgets and the PRNG seed. the seed
/// fully determines a trajectory for fixed inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    pub t_max: Time,
    pub max_steps: u64,
    pub seed: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            t_max: 1.0,
            max_steps: 100_000_000,
            seed: 0,
        }
    }
}

impl Options {
    pub fn with_t_max(mut self, t_max: Time) -> Self {
        assert!(t_max > 0.);
        self.t_max = t_max;
        self
    }
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
