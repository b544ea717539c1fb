//! # Mazerat Core
//!
//! Core types for rats running a maze.
//!
//! - **CellGrid**: the bordered maze, with at most one start and one destination
//! - **Surroundings**: what a rat sees in front, left, right and behind
//! - **RatState / Rat**: heading, location history and the stuck counter
//! - **Policy**: the pluggable rule that decides how a rat turns
//! - **MazeView**: the notifications a display receives while a maze runs
//!
//! ## Quick Start
//!
//! ```rust
//! use mazerat_core::prelude::*;
//!
//! let mut grid = CellGrid::new(10, 15).unwrap();
//! grid.set(1, 1, CellType::Start).unwrap();
//! grid.set(8, 13, CellType::Destination).unwrap();
//!
//! let view = Surroundings::snapshot(&grid, Location::new(1, 1), Heading::North).unwrap();
//! assert!(view.left.is_wall);
//! assert!(!view.front.is_wall);
//! ```

pub mod error;
pub mod geometry;
pub mod grid;
pub mod policy;
pub mod rat;
pub mod types;
pub mod view;
pub mod prelude;
