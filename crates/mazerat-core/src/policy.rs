//! Policy: how a rat chooses to turn.
//!
//! Each tick, before anything moves, every rat is shown its
//! [`Surroundings`] and may turn in place. The policy only returns the turn;
//! the engine applies it to the rat's state and then moves the rat one cell
//! forward if the way is open.

use crate::geometry::Surroundings;
use crate::types::Heading;
use std::fmt;

/// A turn chosen by a policy. Turning costs no movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Keep the current heading.
    Straight,
    Left,
    Right,
    Around,
}

impl Turn {
    /// The heading that results from taking this turn.
    pub fn apply(self, heading: Heading) -> Heading {
        match self {
            Turn::Straight => heading,
            Turn::Left => heading.left(),
            Turn::Right => heading.right(),
            Turn::Around => heading.reversed(),
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Straight => write!(f, "straight"),
            Turn::Left => write!(f, "left"),
            Turn::Right => write!(f, "right"),
            Turn::Around => write!(f, "around"),
        }
    }
}

/// A rat's decision rule.
///
/// Implementations hold only their own state (a random source, for
/// instance). Everything common to all rats lives in
/// [`RatState`](crate::rat::RatState).
pub trait Policy {
    /// Registry name of this policy (for display and logging).
    fn name(&self) -> &str;

    /// Look at the surroundings and decide whether to turn.
    ///
    /// Called once per tick, before the rat is moved.
    fn decide(&mut self, surroundings: &Surroundings) -> Turn;
}
