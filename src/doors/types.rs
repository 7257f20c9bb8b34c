//! Door and strategy data structures.
//!
//! The puzzle always has three doors, one prize, and two player strategies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of doors on stage.
pub const DOOR_COUNT: usize = 3;

/// One of the three doors, numbered 1-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Door {
    One,
    Two,
    Three,
}

impl Door {
    /// All doors in stage order.
    pub const ALL: [Door; DOOR_COUNT] = [Door::One, Door::Two, Door::Three];

    /// The door's number as shown to the player (1-3).
    pub fn number(self) -> u8 {
        match self {
            Door::One => 1,
            Door::Two => 2,
            Door::Three => 3,
        }
    }

    /// The single door that is neither `a` nor `b`.
    ///
    /// Returns `None` when `a == b`, since two doors then remain.
    pub fn remaining(a: Door, b: Door) -> Option<Door> {
        if a == b {
            return None;
        }
        Self::ALL.into_iter().find(|&d| d != a && d != b)
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The player's decision rule after the host opens a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Keep the first pick ("common" player).
    Stay,
    /// Move to the other unopened door ("smart" player).
    Switch,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Stay => "stay",
            Strategy::Switch => "switch",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How constrained doors (the host's reveal, the switch target) are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// Redraw uniformly until the constraints hold.
    #[default]
    Rejection,
    /// Pick directly among the doors that satisfy the constraints.
    Direct,
}

/// Doors fixed before the player decides whether to switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstRound {
    /// The player's initial pick.
    pub chosen_door: Door,
    /// The door the host opens (never the pick, never the prize).
    pub revealed_door: Door,
}

/// Everything drawn during one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub strategy: Strategy,
    pub prize_door: Door,
    pub chosen_door: Door,
    pub revealed_door: Door,
    /// Final door for the switch strategy; `None` for stay.
    pub switched_door: Option<Door>,
}

impl TrialOutcome {
    /// Whether the strategy found the prize.
    pub fn is_winner(&self) -> bool {
        match self.strategy {
            Strategy::Stay => self.chosen_door == self.prize_door,
            Strategy::Switch => self.switched_door == Some(self.prize_door),
        }
    }
}
