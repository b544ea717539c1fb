//! Error types for maze operations.
//!
//! Every fallible operation in the workspace returns [`MazeError`]. The
//! three run outcomes a caller has to tell apart (configuration fault,
//! stuck rat, starved rat) are separate variants.

use crate::types::Location;
use thiserror::Error;

/// Result type for maze operations.
pub type Result<T> = std::result::Result<T, MazeError>;

/// Errors that can occur while building, persisting or running a maze.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MazeError {
    /// No start, no destination, no rats, or an engine that must be reset first.
    #[error("Maze configuration error: {0}")]
    Config(String),

    /// A coordinate outside `[0, width) x [0, height)`.
    #[error("Location ({x}, {y}) is outside the {width}x{height} maze")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// A rat sat in the same cell for too many consecutive ticks.
    #[error("The rat {rat} was stuck at {location} on tick {tick} and caught by the cat")]
    Stuck {
        tick: u64,
        rat: usize,
        location: Location,
    },

    /// The tick budget ran out before any rat reached the destination.
    #[error("Max number of ticks {max_ticks} exceeded - rat starved")]
    Starved { max_ticks: u64 },

    /// The run was cancelled from outside.
    #[error("Run cancelled before tick {tick}")]
    Cancelled { tick: u64 },

    /// A persisted cell code outside `0..=3`.
    #[error("Invalid cell code: {0}")]
    InvalidCellCode(u8),

    /// A heading that is not one of 0, 90, 180, 270.
    #[error("Invalid heading: {0} (must be 0, 90, 180 or 270)")]
    InvalidHeading(i64),

    /// Persisted grid data with an inconsistent shape.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// A step record whose ticks disagree about the number of rats.
    #[error("Invalid step record: {0}")]
    InvalidRecord(String),

    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for MazeError {
    fn from(e: std::io::Error) -> Self {
        MazeError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for MazeError {
    fn from(e: serde_json::Error) -> Self {
        MazeError::Serialization(e.to_string())
    }
}

// Convenience constructors
impl MazeError {
    pub fn config(msg: impl Into<String>) -> Self {
        MazeError::Config(msg.into())
    }

    pub fn invalid_grid(msg: impl Into<String>) -> Self {
        MazeError::InvalidGrid(msg.into())
    }

    /// Whether this error is one of the terminal run outcomes rather than a fault.
    pub fn is_terminal_outcome(&self) -> bool {
        matches!(
            self,
            MazeError::Stuck { .. } | MazeError::Starved { .. } | MazeError::Cancelled { .. }
        )
    }
}
