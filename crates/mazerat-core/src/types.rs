//! Shared types used across the maze, the rats and the runtime.

use crate::error::MazeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What occupies a single maze cell.
///
/// The discriminants are the persisted cell codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    Space = 0,
    Wall = 1,
    Start = 2,
    Destination = 3,
}

impl CellType {
    /// The persisted code for this cell type.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Character used by the text picture of a maze.
    pub fn glyph(self) -> char {
        match self {
            CellType::Space => '.',
            CellType::Wall => '#',
            CellType::Start => 'S',
            CellType::Destination => 'D',
        }
    }

    /// Parse a text-picture character. A blank counts as space.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(CellType::Space),
            '#' => Some(CellType::Wall),
            'S' => Some(CellType::Start),
            'D' => Some(CellType::Destination),
            _ => None,
        }
    }
}

impl TryFrom<u8> for CellType {
    type Error = MazeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CellType::Space),
            1 => Ok(CellType::Wall),
            2 => Ok(CellType::Start),
            3 => Ok(CellType::Destination),
            other => Err(MazeError::InvalidCellCode(other)),
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellType::Space => write!(f, "space"),
            CellType::Wall => write!(f, "wall"),
            CellType::Start => write!(f, "start"),
            CellType::Destination => write!(f, "destination"),
        }
    }
}

impl std::str::FromStr for CellType {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "space" | "0" => Ok(CellType::Space),
            "wall" | "1" => Ok(CellType::Wall),
            "start" | "2" => Ok(CellType::Start),
            "destination" | "dest" | "3" => Ok(CellType::Destination),
            other => Err(MazeError::config(format!("unknown cell type '{}'", other))),
        }
    }
}

/// A cell index in grid coordinates.
///
/// Signed so that a neighbour of a border cell can be expressed and then
/// rejected by the grid's bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Location {
        Location::new(self.x + dx, self.y + dy)
    }

    /// Squared euclidean distance. Only the ordering matters to callers.
    pub fn distance_squared(&self, other: &Location) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The direction a rat faces, in degrees clockwise from north.
///
/// North is +y in grid coordinates, east is +x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order starting at north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub fn degrees(self) -> u16 {
        match self {
            Heading::North => 0,
            Heading::East => 90,
            Heading::South => 180,
            Heading::West => 270,
        }
    }

    pub fn from_degrees(degrees: i64) -> Result<Self, MazeError> {
        match degrees {
            0 => Ok(Heading::North),
            90 => Ok(Heading::East),
            180 => Ok(Heading::South),
            270 => Ok(Heading::West),
            other => Err(MazeError::InvalidHeading(other)),
        }
    }

    fn rotated(self, degrees: u16) -> Heading {
        match (self.degrees() + degrees) % 360 {
            0 => Heading::North,
            90 => Heading::East,
            180 => Heading::South,
            _ => Heading::West,
        }
    }

    pub fn left(self) -> Heading {
        self.rotated(270)
    }

    pub fn right(self) -> Heading {
        self.rotated(90)
    }

    pub fn reversed(self) -> Heading {
        self.rotated(180)
    }

    /// Unit step for this heading rotated clockwise by `quarter_turns * 90` degrees.
    ///
    /// Computed as `(round(sin θ), round(cos θ))`, which is exact at the
    /// four axis-aligned angles.
    pub fn unit_offset(self, quarter_turns: u16) -> (i32, i32) {
        let theta = f64::from(self.rotated(quarter_turns % 4 * 90).degrees()).to_radians();
        (theta.sin().round() as i32, theta.cos().round() as i32)
    }
}

impl Default for Heading {
    fn default() -> Self {
        Heading::East
    }
}

impl From<Heading> for i64 {
    fn from(heading: Heading) -> i64 {
        i64::from(heading.degrees())
    }
}

impl TryFrom<i64> for Heading {
    type Error = MazeError;

    fn try_from(degrees: i64) -> Result<Self, Self::Error> {
        Heading::from_degrees(degrees)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// The current tick of the simulation.
pub type Tick = u64;
