//! Monte Carlo runner for the Monty Hall puzzle.
//!
//! Plays many independent trials, each assigned to the stay or the switch
//! strategy by coin flip, and reports how often each strategy wins.

mod config;
mod report;
mod runner;
mod stats;

pub use config::{SimConfig, DEFAULT_TRIALS};
pub use report::{format_significant, REPORT_PRECISION};
pub use runner::{run_simulation, Simulation};
pub use stats::{percentage, Statistics, StrategyTally};
