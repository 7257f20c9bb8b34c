//! Strategy evaluation: the player's pick, the host's reveal, and the switch.
//!
//! Both strategies share one first-round draw (pick, then reveal). The switch
//! strategy only adds a final draw on top of it, so a switching player sees
//! exactly the same stage as a staying one up to the decision.

use super::source::DoorSource;
use super::types::{Door, FirstRound, SamplingMode, Strategy, TrialOutcome, DOOR_COUNT};
use rand::Rng;

/// Draw a door uniformly until it avoids both `a` and `b`.
fn draw_excluding<R: Rng>(source: &mut DoorSource<R>, a: Door, b: Door) -> Door {
    loop {
        let door = source.next_door();
        if door != a && door != b {
            return door;
        }
    }
}

/// Pick uniformly among the doors that are neither `a` nor `b`.
fn pick_excluding<R: Rng>(source: &mut DoorSource<R>, a: Door, b: Door) -> Door {
    if let Some(door) = Door::remaining(a, b) {
        return door;
    }
    // a == b leaves two doors
    let mut candidates = [Door::One; DOOR_COUNT - 1];
    for (slot, door) in candidates
        .iter_mut()
        .zip(Door::ALL.into_iter().filter(|&d| d != a))
    {
        *slot = door;
    }
    source.pick_from(&candidates)
}

fn constrained_door<R: Rng>(
    source: &mut DoorSource<R>,
    mode: SamplingMode,
    a: Door,
    b: Door,
) -> Door {
    match mode {
        SamplingMode::Rejection => draw_excluding(source, a, b),
        SamplingMode::Direct => pick_excluding(source, a, b),
    }
}

/// The player's initial pick followed by the host opening a door that is
/// neither the pick nor the prize.
pub fn first_round<R: Rng>(
    source: &mut DoorSource<R>,
    prize_door: Door,
    mode: SamplingMode,
) -> FirstRound {
    let chosen_door = source.next_door();
    let revealed_door = constrained_door(source, mode, chosen_door, prize_door);
    FirstRound {
        chosen_door,
        revealed_door,
    }
}

/// Play out `strategy` against a known prize door.
pub fn choose_doors<R: Rng>(
    source: &mut DoorSource<R>,
    strategy: Strategy,
    prize_door: Door,
    mode: SamplingMode,
) -> TrialOutcome {
    let round = first_round(source, prize_door, mode);

    let switched_door = match strategy {
        Strategy::Stay => None,
        // Only one door is left once the pick and the reveal are excluded
        Strategy::Switch => Some(constrained_door(
            source,
            mode,
            round.revealed_door,
            round.chosen_door,
        )),
    };

    TrialOutcome {
        strategy,
        prize_door,
        chosen_door: round.chosen_door,
        revealed_door: round.revealed_door,
        switched_door,
    }
}

/// One full trial: pick a strategy at random, hide the prize, then play.
pub fn play_trial<R: Rng>(source: &mut DoorSource<R>, mode: SamplingMode) -> TrialOutcome {
    let strategy = source.next_strategy();
    let prize_door = source.next_door();
    choose_doors(source, strategy, prize_door, mode)
}
