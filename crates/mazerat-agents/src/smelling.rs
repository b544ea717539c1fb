//! Rats that can smell the destination.
//!
//! Both variants compare squared distances from candidate cells to the
//! destination. Neither ever computes a square root; only the ordering of
//! distances matters.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use mazerat_core::geometry::Surroundings;
use mazerat_core::policy::{Policy, Turn};

const SNIFF_CHANCE: f64 = 0.2;

/// Mostly wanders like a wall-bumping coin flipper, but one tick in five it
/// turns toward whichever open side is closer to the destination.
#[derive(Debug, Clone)]
pub struct SmellingV1 {
    rng: StdRng,
}

impl SmellingV1 {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sniff(&self, s: &Surroundings) -> Option<Turn> {
        let dl = s.distance_to_destination(&s.left.location)?;
        let dr = s.distance_to_destination(&s.right.location)?;
        if s.left.is_open() && (s.right.is_wall || dl <= dr) {
            Some(Turn::Left)
        } else if s.right.is_open() {
            Some(Turn::Right)
        } else {
            Some(Turn::Straight)
        }
    }
}

impl Default for SmellingV1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for SmellingV1 {
    fn name(&self) -> &str {
        "smelling-v1"
    }

    fn decide(&mut self, s: &Surroundings) -> Turn {
        if self.rng.gen_bool(SNIFF_CHANCE) {
            match self.sniff(s) {
                Some(turn) => return turn,
                None => trace!("smelling-v1: no destination to smell"),
            }
        }

        if !s.front.is_wall {
            return Turn::Straight;
        }
        match (s.left.is_open(), s.right.is_open()) {
            (true, true) => {
                if self.rng.gen_bool(0.5) {
                    Turn::Left
                } else {
                    Turn::Right
                }
            }
            (true, false) => Turn::Left,
            (false, true) => Turn::Right,
            (false, false) => Turn::Straight,
        }
    }
}

/// Compares the cell it stands on with the cells to its left and right.
///
/// At a wall it tries left, then right, then gives up and turns around. A
/// side is taken when it is open and either gets strictly closer or a coin
/// flip allows it. In open corridors it only ever nudges left, and only when
/// left is strictly closer.
#[derive(Debug, Clone)]
pub struct SmellingV2 {
    rng: StdRng,
}

impl SmellingV2 {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SmellingV2 {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for SmellingV2 {
    fn name(&self) -> &str {
        "smelling-v2"
    }

    fn decide(&mut self, s: &Surroundings) -> Turn {
        let here = s.distance_to_destination(&s.here);
        let closer = |d: Option<i64>| matches!((d, here), (Some(d), Some(h)) if d < h);
        let left_closer = closer(s.distance_to_destination(&s.left.location));
        let right_closer = closer(s.distance_to_destination(&s.right.location));

        if s.front.is_wall {
            if s.left.is_open() && (left_closer || self.rng.gen_bool(0.5)) {
                Turn::Left
            } else if s.right.is_open() && (right_closer || self.rng.gen_bool(0.5)) {
                Turn::Right
            } else {
                Turn::Around
            }
        } else if s.left.is_open() && left_closer {
            // Only the left side is ever considered here.
            Turn::Left
        } else {
            Turn::Straight
        }
    }
}
