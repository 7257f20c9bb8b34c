//! Trial runner: plays every trial in order and tallies the results.

use super::config::SimConfig;
use super::stats::Statistics;
use crate::doors::{play_trial, DoorSource, SamplingMode, TrialOutcome};
use crate::error::{SimError, SimResult};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use tracing::{debug, info, trace};

/// A run in progress: the door source plus the statistics it feeds.
#[derive(Debug)]
pub struct Simulation<R = ChaCha8Rng> {
    source: DoorSource<R>,
    sampling: SamplingMode,
    stats: Statistics,
}

impl Simulation<ChaCha8Rng> {
    /// Seeds the door source once from the config.
    pub fn from_config(config: &SimConfig) -> Self {
        let source = match config.seed {
            Some(seed) => DoorSource::from_seed(seed),
            None => DoorSource::from_entropy(),
        };
        Self::new(source, config.sampling)
    }
}

impl<R: Rng> Simulation<R> {
    pub fn new(source: DoorSource<R>, sampling: SamplingMode) -> Self {
        Self {
            source,
            sampling,
            stats: Statistics::new(),
        }
    }

    /// Play and record one trial.
    pub fn play_trial(&mut self) -> TrialOutcome {
        let outcome = play_trial(&mut self.source, self.sampling);
        self.stats.record(&outcome);
        outcome
    }

    /// Play `trials` trials, then derive the percentages.
    pub fn run(mut self, trials: i64) -> SimResult<Statistics> {
        if trials < 0 {
            return Err(SimError::InvalidArgument { trials });
        }

        for index in 0..trials {
            let outcome = self.play_trial();
            trace!(
                trial = index + 1,
                strategy = %outcome.strategy,
                prize = %outcome.prize_door,
                chosen = %outcome.chosen_door,
                revealed = %outcome.revealed_door,
                won = outcome.is_winner(),
                "trial finished"
            );
        }

        Ok(self.finish())
    }

    /// Statistics so far, percentages not yet derived.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Close the run and hand back the completed statistics.
    pub fn finish(mut self) -> Statistics {
        self.stats.calculate();
        self.stats
    }
}

/// Run the full simulation described by `config`.
pub fn run_simulation(config: &SimConfig) -> SimResult<Statistics> {
    let simulation = Simulation::from_config(config);
    info!(
        trials = config.num_trials,
        seed = ?config.seed,
        sampling = ?config.sampling,
        "starting simulation"
    );
    let started = Instant::now();

    let stats = simulation.run(config.num_trials)?;

    info!(
        games = stats.games,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "simulation finished"
    );
    if stats.has_degenerate_percentages() {
        debug!("some percentages are undefined (a strategy had no players)");
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_negative_trials_rejected() {
        let config = SimConfig::reproducible(-1, 42);
        assert_eq!(
            run_simulation(&config),
            Err(SimError::InvalidArgument { trials: -1 })
        );
    }

    #[test]
    fn test_zero_trials() {
        let stats = run_simulation(&SimConfig::reproducible(0, 42)).unwrap();

        assert_eq!(stats.games, 0);
        assert_eq!(stats.stay.players, 0);
        assert_eq!(stats.switch.winners, 0);
        assert!(stats.stay.per_players.is_nan());
        assert!(stats.stay.per_winners.is_nan());
        assert!(stats.switch.per_players.is_nan());
        assert!(stats.switch.per_winners.is_nan());
    }

    #[test]
    fn test_counts_add_up() {
        let stats = run_simulation(&SimConfig::reproducible(5_000, 7)).unwrap();

        assert_eq!(stats.games, 5_000);
        assert_eq!(stats.stay.players + stats.switch.players, 5_000);
        assert!(stats.stay.winners <= stats.stay.players);
        assert!(stats.switch.winners <= stats.switch.players);
        assert!((stats.stay.per_players + stats.switch.per_players - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_seed_same_statistics() {
        let a = run_simulation(&SimConfig::reproducible(1_000, 1234)).unwrap();
        let b = run_simulation(&SimConfig::reproducible(1_000, 1234)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_play_trial_updates_stats() {
        let source = DoorSource::new(ChaCha8Rng::seed_from_u64(5));
        let mut sim = Simulation::new(source, SamplingMode::Rejection);
        let outcome = sim.play_trial();

        assert_eq!(sim.stats().games, 1);
        assert_eq!(sim.stats().tally(outcome.strategy).players, 1);
        assert_eq!(
            sim.stats().tally(outcome.strategy).winners,
            i64::from(outcome.is_winner())
        );
    }

    #[test]
    fn test_direct_sampling_runs() {
        let config = SimConfig {
            sampling: SamplingMode::Direct,
            ..SimConfig::reproducible(2_000, 3)
        };
        let stats = run_simulation(&config).unwrap();
        assert_eq!(stats.games, 2_000);
    }
}
