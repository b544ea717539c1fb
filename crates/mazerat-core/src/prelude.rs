//! Mazerat Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use mazerat_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{CellType, Heading, Location, Tick};

pub use crate::grid::{CellGrid, GridFile};
pub use crate::geometry::{Neighbor, Surroundings};
pub use crate::rat::{Rat, RatState};

// Re-export the Policy trait
pub use crate::policy::{Policy, Turn};

// Re-export the view contract
pub use crate::view::{Frame, MazeView, UpdateKind};

// Re-export error types
pub use crate::error::{MazeError, Result};
