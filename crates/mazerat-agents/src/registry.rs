//! Static registry of every policy the crate ships.
//!
//! Collaborators list, parse and build policies through [`PolicyKind`]; the
//! core never enumerates policy types itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use mazerat_core::error::MazeError;
use mazerat_core::policy::Policy;

use crate::random::RandomRat;
use crate::simple::{Dumb, TurnAround, TurnLeft, WallFollower};
use crate::smelling::{SmellingV1, SmellingV2};

/// Every available policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    Dumb,
    TurnLeft,
    TurnAround,
    WallFollower,
    Random,
    SmellingV1,
    SmellingV2,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 7] = [
        PolicyKind::Dumb,
        PolicyKind::TurnLeft,
        PolicyKind::TurnAround,
        PolicyKind::WallFollower,
        PolicyKind::Random,
        PolicyKind::SmellingV1,
        PolicyKind::SmellingV2,
    ];

    /// Stable kebab-case name, identical to the built policy's `name()`.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Dumb => "dumb",
            PolicyKind::TurnLeft => "turn-left",
            PolicyKind::TurnAround => "turn-around",
            PolicyKind::WallFollower => "wall-follower",
            PolicyKind::Random => "random",
            PolicyKind::SmellingV1 => "smelling-v1",
            PolicyKind::SmellingV2 => "smelling-v2",
        }
    }

    /// One-line description for listings.
    pub fn summary(self) -> &'static str {
        match self {
            PolicyKind::Dumb => "never turns",
            PolicyKind::TurnLeft => "turns left at a wall",
            PolicyKind::TurnAround => "turns around at a wall",
            PolicyKind::WallFollower => "keeps a wall on its right",
            PolicyKind::Random => "wanders, flipping a coin at walls",
            PolicyKind::SmellingV1 => "sometimes turns toward the destination",
            PolicyKind::SmellingV2 => "turns toward cells closer to the destination",
        }
    }

    pub fn is_random(self) -> bool {
        matches!(
            self,
            PolicyKind::Random | PolicyKind::SmellingV1 | PolicyKind::SmellingV2
        )
    }

    /// Build a policy. Stochastic policies seed themselves from entropy.
    pub fn build(self) -> Box<dyn Policy> {
        match self {
            PolicyKind::Dumb => Box::new(Dumb),
            PolicyKind::TurnLeft => Box::new(TurnLeft),
            PolicyKind::TurnAround => Box::new(TurnAround),
            PolicyKind::WallFollower => Box::new(WallFollower),
            PolicyKind::Random => Box::new(RandomRat::new()),
            PolicyKind::SmellingV1 => Box::new(SmellingV1::new()),
            PolicyKind::SmellingV2 => Box::new(SmellingV2::new()),
        }
    }

    /// Build a policy with a fixed seed. Deterministic policies ignore it.
    pub fn build_seeded(self, seed: u64) -> Box<dyn Policy> {
        match self {
            PolicyKind::Random => Box::new(RandomRat::with_seed(seed)),
            PolicyKind::SmellingV1 => Box::new(SmellingV1::with_seed(seed)),
            PolicyKind::SmellingV2 => Box::new(SmellingV2::with_seed(seed)),
            other => other.build(),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = MazeError;

    /// Accepts the kebab-case name, or the class-style name such as
    /// `TurnLeftRat` or `SmellingRatV2`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let kind = match key.as_str() {
            "dumb" | "dumbrat" => PolicyKind::Dumb,
            "turnleft" | "turnleftrat" => PolicyKind::TurnLeft,
            "turnaround" | "turnaroundrat" => PolicyKind::TurnAround,
            "wallfollower" | "wallfollowerrat" => PolicyKind::WallFollower,
            "random" | "randomrat" => PolicyKind::Random,
            "smellingv1" | "smellingrat" | "smellingratv1" => PolicyKind::SmellingV1,
            "smellingv2" | "smellingratv2" => PolicyKind::SmellingV2,
            _ => {
                let known: Vec<&str> = PolicyKind::ALL.iter().map(|k| k.name()).collect();
                return Err(MazeError::config(format!(
                    "unknown policy '{}', expected one of: {}",
                    s,
                    known.join(", ")
                )));
            }
        };
        Ok(kind)
    }
}
