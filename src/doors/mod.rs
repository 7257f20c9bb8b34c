//! Doors, strategies, and the draws that decide a single trial.

pub mod logic;
pub mod source;
pub mod types;

pub use logic::{choose_doors, first_round, play_trial};
pub use source::DoorSource;
pub use types::*;
