//! A rat that wanders: rarely turns into a side opening, and flips a coin
//! at walls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mazerat_core::geometry::Surroundings;
use mazerat_core::policy::{Policy, Turn};

const LEFT_CHANCE: f64 = 0.05;
const RIGHT_CHANCE: f64 = 0.10;

/// Random wanderer.
#[derive(Debug, Clone)]
pub struct RandomRat {
    rng: StdRng,
}

impl RandomRat {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests and reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomRat {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomRat {
    fn name(&self) -> &str {
        "random"
    }

    fn decide(&mut self, s: &Surroundings) -> Turn {
        let r: f64 = self.rng.gen();
        if r < LEFT_CHANCE && s.left.is_open() {
            Turn::Left
        } else if r < RIGHT_CHANCE && s.right.is_open() {
            Turn::Right
        } else if s.front.is_wall {
            if self.rng.gen_bool(0.5) {
                Turn::Left
            } else {
                Turn::Right
            }
        } else {
            Turn::Straight
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerat_core::prelude::*;

    fn open_box() -> CellGrid {
        CellGrid::new(7, 7).unwrap()
    }

    #[test]
    fn same_seed_same_choices() {
        let grid = open_box();
        let s = Surroundings::snapshot(&grid, Location::new(3, 3), Heading::North).unwrap();
        let mut a = RandomRat::with_seed(7);
        let mut b = RandomRat::with_seed(7);
        for _ in 0..200 {
            assert_eq!(a.decide(&s), b.decide(&s));
        }
    }

    #[test]
    fn never_turns_around() {
        let grid = open_box();
        let mut rat = RandomRat::with_seed(11);
        for heading in Heading::ALL {
            let s = Surroundings::snapshot(&grid, Location::new(1, 1), heading).unwrap();
            for _ in 0..100 {
                assert_ne!(rat.decide(&s), Turn::Around);
            }
        }
    }

    #[test]
    fn always_turns_at_a_wall() {
        let grid = open_box();
        // (1,3) facing west: the border is straight ahead
        let s = Surroundings::snapshot(&grid, Location::new(1, 3), Heading::West).unwrap();
        let mut rat = RandomRat::with_seed(3);
        let mut lefts = 0;
        let mut rights = 0;
        for _ in 0..400 {
            match rat.decide(&s) {
                Turn::Left => lefts += 1,
                Turn::Right => rights += 1,
                other => panic!("unexpected {other}"),
            }
        }
        assert!(lefts > 100 && rights > 100, "lefts={lefts} rights={rights}");
    }

    #[test]
    fn mostly_goes_straight_in_open_space() {
        let grid = open_box();
        let s = Surroundings::snapshot(&grid, Location::new(3, 3), Heading::North).unwrap();
        let mut rat = RandomRat::with_seed(5);
        let straight = (0..1000)
            .filter(|_| rat.decide(&s) == Turn::Straight)
            .count();
        assert!(straight > 800, "straight={straight}");
    }
}
