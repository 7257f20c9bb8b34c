//! Uniform door draws from a single, once-seeded generator.

use super::types::{Door, Strategy, DOOR_COUNT};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Owns the run's random generator and hands out door and strategy draws.
///
/// The generator is seeded once at construction and reused for every draw,
/// so one seed fixes the whole sequence of a run.
#[derive(Debug, Clone)]
pub struct DoorSource<R = ChaCha8Rng> {
    rng: R,
}

impl DoorSource<ChaCha8Rng> {
    /// Reproducible source for the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> DoorSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A door drawn uniformly from all three.
    pub fn next_door(&mut self) -> Door {
        Door::ALL[self.rng.gen_range(0..DOOR_COUNT)]
    }

    /// A door drawn uniformly from `candidates`.
    ///
    /// `candidates` must not be empty.
    pub fn pick_from(&mut self, candidates: &[Door]) -> Door {
        candidates[self.rng.gen_range(0..candidates.len())]
    }

    /// Stay or switch with equal probability.
    pub fn next_strategy(&mut self) -> Strategy {
        if self.rng.gen_bool(0.5) {
            Strategy::Switch
        } else {
            Strategy::Stay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_doors() {
        let mut a = DoorSource::from_seed(42);
        let mut b = DoorSource::from_seed(42);
        let seq_a: Vec<Door> = (0..100).map(|_| a.next_door()).collect();
        let seq_b: Vec<Door> = (0..100).map(|_| b.next_door()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_doors_roughly_uniform() {
        let mut source = DoorSource::from_seed(7);
        let mut counts = [0u32; DOOR_COUNT];
        let draws = 30_000;
        for _ in 0..draws {
            counts[(source.next_door().number() - 1) as usize] += 1;
        }
        for count in counts {
            // Expected 10_000 each; allow a generous band
            assert!((9_400..=10_600).contains(&count), "count {}", count);
        }
    }

    #[test]
    fn test_strategy_split_roughly_even() {
        let mut source = DoorSource::from_seed(99);
        let switches = (0..10_000)
            .filter(|_| source.next_strategy() == Strategy::Switch)
            .count();
        assert!((4_700..=5_300).contains(&switches), "switches {}", switches);
    }

    #[test]
    fn test_pick_from_single_candidate() {
        let mut source = DoorSource::from_seed(1);
        for _ in 0..20 {
            assert_eq!(source.pick_from(&[Door::Two]), Door::Two);
        }
    }

    #[test]
    fn test_pick_from_stays_in_candidates() {
        let mut source = DoorSource::from_seed(3);
        for _ in 0..100 {
            let door = source.pick_from(&[Door::One, Door::Three]);
            assert_ne!(door, Door::Two);
        }
    }
}
