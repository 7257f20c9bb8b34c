//! Monty Hall - simulate the three-door puzzle and compare staying against switching.
//!
//! This module exposes the simulation core for the binary and for tests.

pub mod build_info;
pub mod doors;
pub mod error;
pub mod simulator;

pub use doors::{Door, DoorSource, SamplingMode, Strategy, TrialOutcome};
pub use error::{SimError, SimResult};
pub use simulator::{run_simulation, SimConfig, Simulation, Statistics};
