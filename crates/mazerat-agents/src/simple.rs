//! The three reflex rats: one that never turns, and two that only react to
//! a wall straight ahead.

use mazerat_core::geometry::Surroundings;
use mazerat_core::policy::{Policy, Turn};

/// A dumb rat. It never turns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dumb;

impl Policy for Dumb {
    fn name(&self) -> &str {
        "dumb"
    }

    fn decide(&mut self, _surroundings: &Surroundings) -> Turn {
        Turn::Straight
    }
}

/// Turns left whenever it faces a wall.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnLeft;

impl Policy for TurnLeft {
    fn name(&self) -> &str {
        "turn-left"
    }

    fn decide(&mut self, surroundings: &Surroundings) -> Turn {
        if surroundings.front.is_wall {
            Turn::Left
        } else {
            Turn::Straight
        }
    }
}

/// Turns around whenever it faces a wall.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnAround;

impl Policy for TurnAround {
    fn name(&self) -> &str {
        "turn-around"
    }

    fn decide(&mut self, surroundings: &Surroundings) -> Turn {
        if surroundings.front.is_wall {
            Turn::Around
        } else {
            Turn::Straight
        }
    }
}

/// Right-hand rule: keep a wall on the right.
///
/// Turns right into any opening on the right. With a wall on the right and
/// in front it turns left if it can, and around if it is boxed in. With a
/// wall on the right and open space ahead it keeps going.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallFollower;

impl Policy for WallFollower {
    fn name(&self) -> &str {
        "wall-follower"
    }

    fn decide(&mut self, s: &Surroundings) -> Turn {
        if !s.right.is_wall {
            Turn::Right
        } else if !s.left.is_wall && s.front.is_wall {
            Turn::Left
        } else if s.right.is_wall && s.left.is_wall && s.front.is_wall {
            Turn::Around
        } else {
            Turn::Straight
        }
    }
}
