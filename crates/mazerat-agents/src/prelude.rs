//! Mazerat Agents Prelude.
//!
//! ```rust
//! use mazerat_agents::prelude::*;
//! ```

pub use crate::random::RandomRat;
pub use crate::registry::PolicyKind;
pub use crate::simple::{Dumb, TurnAround, TurnLeft, WallFollower};
pub use crate::smelling::{SmellingV1, SmellingV2};
