//! Simulation configuration.

use crate::doors::SamplingMode;

/// Trials run when no count is given.
pub const DEFAULT_TRIALS: i64 = 10_000_000;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of trials to play
    pub num_trials: i64,

    /// Random seed for reproducibility (None = OS entropy)
    pub seed: Option<u64>,

    /// How the host's reveal and the switch target are drawn
    pub sampling: SamplingMode,

    /// Log verbosity (0 = warnings only, 1 = summary, 2 = debug, 3+ = per-trial trace)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_trials: DEFAULT_TRIALS,
            seed: None,
            sampling: SamplingMode::Rejection,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Seeded config, for regression checks against known output
    pub fn reproducible(num_trials: i64, seed: u64) -> Self {
        Self {
            num_trials,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }
}
