//! # Mazerat Runtime
//!
//! The engine that runs rats through a maze, the recorder that captures each
//! tick, and the player that replays a recording.
//!
//! ```rust
//! use std::time::Duration;
//! use mazerat_runtime::prelude::*;
//!
//! let grid = CellGrid::from_ascii("
//!     ######
//!     #S.D#
//!     ######
//! ").unwrap();
//!
//! let mut sim = Simulation::new(grid);
//! sim.add_rat(PolicyKind::Dumb.build()).unwrap();
//! assert_eq!(sim.run(Duration::ZERO).unwrap(), 2);
//! ```

pub mod config;
pub mod event_log;
pub mod player;
pub mod record;
pub mod simulation;
pub mod store;
pub mod prelude;
