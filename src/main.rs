//! Monty Hall simulator CLI.
//!
//! Usage:
//!   monty-hall <TRIALS> [OPTIONS]
//!
//! Examples:
//!   monty-hall 1000000              # One million trials, entropy-seeded
//!   monty-hall 6 --seed 42          # Reproducible run
//!   monty-hall 1000000 --json       # Statistics as JSON

use clap::{ArgAction, Parser};
use monty_hall::build_info;
use monty_hall::{run_simulation, SamplingMode, SimConfig};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "monty-hall",
    version = build_info::LONG_VERSION,
    about = "Simulate the Monty Hall puzzle and compare staying against switching"
)]
struct Args {
    /// Number of trials to play
    #[arg(value_parser = clap::value_parser!(i64).range(0..i64::MAX))]
    trials: i64,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pick the host's door directly instead of redrawing until valid
    #[arg(long)]
    direct: bool,

    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,

    /// More log output (-v debug, -vv per-trial trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn config(&self) -> SimConfig {
        SimConfig {
            num_trials: self.trials,
            seed: self.seed,
            sampling: if self.direct {
                SamplingMode::Direct
            } else {
                SamplingMode::Rejection
            },
            verbosity: if self.quiet {
                0
            } else {
                self.verbose.saturating_add(1)
            },
        }
    }
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.config();
    init_tracing(config.verbosity);

    if !args.json {
        println!("Starting the game with {} runs\n", config.num_trials);
    }

    let stats = match run_simulation(&config) {
        Ok(stats) => stats,
        Err(e) => {
            error!(error = %e, "simulation failed");
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        println!("{}", stats.to_json());
    } else {
        print!("{}", stats.to_text());
        println!("\nThanks for playing :)");
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trials_and_seed() {
        let args = Args::parse_from(["monty-hall", "6", "--seed", "42"]);
        let config = args.config();
        assert_eq!(config.num_trials, 6);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.sampling, SamplingMode::Rejection);
        assert_eq!(config.verbosity, 1);
    }

    #[test]
    fn test_direct_and_verbosity() {
        let args = Args::parse_from(["monty-hall", "10", "--direct", "-vv"]);
        let config = args.config();
        assert_eq!(config.sampling, SamplingMode::Direct);
        assert_eq!(config.verbosity, 3);
        assert_eq!(level_for(config.verbosity), LevelFilter::TRACE);
    }

    #[test]
    fn test_quiet() {
        let config = Args::parse_from(["monty-hall", "10", "-q"]).config();
        assert_eq!(config.verbosity, 0);
        assert_eq!(level_for(0), LevelFilter::WARN);
    }

    #[test]
    fn test_missing_trials_rejected() {
        assert!(Args::try_parse_from(["monty-hall"]).is_err());
    }

    #[test]
    fn test_unparsable_trials_rejected() {
        assert!(Args::try_parse_from(["monty-hall", "lots"]).is_err());
    }

    #[test]
    fn test_max_trials_rejected() {
        let max = i64::MAX.to_string();
        assert!(Args::try_parse_from(["monty-hall", max.as_str()]).is_err());
        let below = (i64::MAX - 1).to_string();
        assert!(Args::try_parse_from(["monty-hall", below.as_str()]).is_ok());
    }

    #[test]
    fn test_overflowing_trials_rejected() {
        assert!(Args::try_parse_from(["monty-hall", "99999999999999999999"]).is_err());
    }

    #[test]
    fn test_clap_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
