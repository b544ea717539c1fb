//! # Mazerat
//!
//! Rats running a maze, tick by tick.
//!
//! Each rat stands on a bordered grid, looks at the four cells around it,
//! lets its policy turn it, and then steps forward unless a wall is in the
//! way. The run ends when any rat reaches the destination, when a rat sits
//! still for too long and the cat catches it, or when the tick budget of
//! three ticks per cell runs out and the rats starve.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use mazerat::prelude::*;
//!
//! let mut grid = CellGrid::new(10, 15).unwrap();
//! grid.set(1, 1, CellType::Start).unwrap();
//! grid.set(8, 13, CellType::Destination).unwrap();
//!
//! let mut sim = Simulation::new(grid);
//! sim.add_rat(PolicyKind::SmellingV2.build_seeded(7)).unwrap();
//!
//! match sim.run(Duration::ZERO) {
//!     Ok(ticks) => println!("found the cheese in {} ticks", ticks),
//!     Err(e) if e.is_terminal_outcome() => println!("{}", e),
//!     Err(e) => panic!("bad maze: {}", e),
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`mazerat_core`] - grid, geometry, rat state, the `Policy` and `MazeView` traits
//! - [`mazerat_agents`] - the built-in policies and the `PolicyKind` registry
//! - [`mazerat_runtime`] - the engine, step recording, playback and file storage
//!
//! ## Policies
//!
//! | Name | Behaviour |
//! |------|-----------|
//! | `dumb` | never turns |
//! | `turn-left` | turns left at a wall |
//! | `turn-around` | turns around at a wall |
//! | `wall-follower` | keeps a wall on its right |
//! | `random` | rare side turns, coin flips at walls |
//! | `smelling-v1` | one tick in five turns toward the closer side |
//! | `smelling-v2` | prefers cells strictly closer to the destination |

pub use mazerat_agents as agents;
pub use mazerat_core as core;
pub use mazerat_runtime as runtime;

/// Everything needed to build a maze, run rats through it and replay the run.
///
/// ```rust
/// use mazerat::prelude::*;
/// ```
pub mod prelude {
    pub use mazerat_runtime::prelude::*;
}
