//! Rat: one agent in the maze.
//!
//! [`RatState`] carries the fields every rat has: heading, location, the
//! location before that, and how many times in a row the rat has landed
//! back where it was two moves ago. [`Rat`] pairs that state with a
//! [`Policy`].

use crate::geometry::Surroundings;
use crate::policy::{Policy, Turn};
use crate::types::{Heading, Location};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position and heading of one rat, plus the stuck counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatState {
    heading: Heading,
    location: Option<Location>,
    last_location: Option<Location>,
    same_location_count: u32,
}

impl RatState {
    /// A rat facing east that has not been placed yet.
    pub fn new() -> Self {
        Self {
            heading: Heading::East,
            location: None,
            last_location: None,
            same_location_count: 0,
        }
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    pub fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    pub fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    pub fn turn_around(&mut self) {
        self.heading = self.heading.reversed();
    }

    pub fn apply(&mut self, turn: Turn) {
        self.heading = turn.apply(self.heading);
    }

    /// Move the rat to `location`.
    ///
    /// The counter goes up when `location` equals the *last* location (the
    /// one before the current), otherwise it resets to zero. The history
    /// then shifts by one.
    pub fn set_location(&mut self, location: Location) {
        if self.last_location == Some(location) {
            self.same_location_count += 1;
        } else {
            self.same_location_count = 0;
        }
        self.last_location = self.location;
        self.location = Some(location);
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn last_location(&self) -> Option<Location> {
        self.last_location
    }

    pub fn same_location_count(&self) -> u32 {
        self.same_location_count
    }
}

impl Default for RatState {
    fn default() -> Self {
        Self::new()
    }
}

/// A rat: shared state plus its own decision policy.
pub struct Rat {
    state: RatState,
    policy: Box<dyn Policy>,
}

impl Rat {
    pub fn new(policy: Box<dyn Policy>) -> Self {
        Self {
            state: RatState::new(),
            policy,
        }
    }

    pub fn state(&self) -> &RatState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RatState {
        &mut self.state
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    /// Ask the policy for a turn and apply it. Returns the turn taken.
    pub fn decide(&mut self, surroundings: &Surroundings) -> Turn {
        let turn = self.policy.decide(surroundings);
        self.state.apply(turn);
        turn
    }
}

impl fmt::Debug for Rat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rat")
            .field("policy", &self.policy.name())
            .field("state", &self.state)
            .finish()
    }
}
