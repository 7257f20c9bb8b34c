//! Per-run tallies and the percentages derived from them.

use crate::doors::{Strategy, TrialOutcome};
use serde::Serialize;

/// Players and winners for one strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StrategyTally {
    /// Trials assigned to this strategy
    pub players: i64,
    /// Trials this strategy won
    pub winners: i64,
    /// Share of all trials, in percent (NaN when no trials ran)
    pub per_players: f64,
    /// Share of this strategy's own trials that won, in percent (NaN when it had none)
    pub per_winners: f64,
}

impl StrategyTally {
    fn record(&mut self, won: bool) {
        self.players += 1;
        if won {
            self.winners += 1;
        }
    }
}

/// `part / whole` as a percentage; 0/0 is NaN rather than a panic.
pub fn percentage(part: i64, whole: i64) -> f64 {
    part as f64 / whole as f64 * 100.0
}

/// Aggregated results of one simulation run.
///
/// Counts accumulate while trials run; `calculate` fills the percentages
/// once the run is over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Total trials played
    pub games: i64,
    /// Players who kept their first pick
    pub stay: StrategyTally,
    /// Players who switched after the reveal
    pub switch: StrategyTally,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    pub fn new() -> Self {
        let empty = StrategyTally {
            per_players: f64::NAN,
            per_winners: f64::NAN,
            ..Default::default()
        };
        Self {
            games: 0,
            stay: empty,
            switch: empty,
        }
    }

    /// Count one finished trial.
    pub fn record(&mut self, outcome: &TrialOutcome) {
        self.games += 1;
        let won = outcome.is_winner();
        self.tally_mut(outcome.strategy).record(won);
    }

    /// Derive participation and win percentages from the counts.
    pub fn calculate(&mut self) {
        let games = self.games;
        for tally in [&mut self.stay, &mut self.switch] {
            tally.per_players = percentage(tally.players, games);
            tally.per_winners = percentage(tally.winners, tally.players);
        }
    }

    pub fn tally(&self, strategy: Strategy) -> &StrategyTally {
        match strategy {
            Strategy::Stay => &self.stay,
            Strategy::Switch => &self.switch,
        }
    }

    fn tally_mut(&mut self, strategy: Strategy) -> &mut StrategyTally {
        match strategy {
            Strategy::Stay => &mut self.stay,
            Strategy::Switch => &mut self.switch,
        }
    }

    /// True if any percentage came out as 0/0.
    pub fn has_degenerate_percentages(&self) -> bool {
        [self.stay, self.switch]
            .iter()
            .any(|t| t.per_players.is_nan() || t.per_winners.is_nan())
    }
}
