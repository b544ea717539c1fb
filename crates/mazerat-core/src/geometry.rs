//! Direction geometry: what a rat can see from where it stands.
//!
//! A [`Surroundings`] value is computed fresh for one rat at one moment and
//! dropped after the decision that consumes it.

use crate::error::Result;
use crate::grid::CellGrid;
use crate::types::{CellType, Heading, Location};

/// One of the four cells adjacent to a rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub location: Location,
    pub cell: CellType,
    pub is_wall: bool,
}

impl Neighbor {
    fn probe(grid: &CellGrid, here: &Location, heading: Heading, quarter_turns: u16) -> Result<Self> {
        let (dx, dy) = heading.unit_offset(quarter_turns);
        let location = here.offset(dx, dy);
        let cell = grid.get_at(&location)?;
        Ok(Self {
            location,
            cell,
            is_wall: cell == CellType::Wall,
        })
    }

    pub fn is_open(&self) -> bool {
        !self.is_wall
    }
}

/// The local view of a rat: front, left, right and behind relative to its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surroundings {
    pub here: Location,
    pub heading: Heading,
    pub front: Neighbor,
    pub right: Neighbor,
    pub behind: Neighbor,
    pub left: Neighbor,
    /// The maze destination, for policies that can smell the cheese.
    pub destination: Option<Location>,
}

impl Surroundings {
    /// Look around `here` while facing `heading`.
    ///
    /// Fails with `OutOfBounds` if any neighbour falls outside the grid; a
    /// rat on an interior cell of a bordered maze never triggers this.
    pub fn snapshot(grid: &CellGrid, here: Location, heading: Heading) -> Result<Self> {
        Ok(Self {
            here,
            heading,
            front: Neighbor::probe(grid, &here, heading, 0)?,
            right: Neighbor::probe(grid, &here, heading, 1)?,
            behind: Neighbor::probe(grid, &here, heading, 2)?,
            left: Neighbor::probe(grid, &here, heading, 3)?,
            destination: grid.destination().ok(),
        })
    }

    /// Squared distance from a location to the destination, if there is one.
    pub fn distance_to_destination(&self, location: &Location) -> Option<i64> {
        self.destination.map(|d| location.distance_squared(&d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    fn bordered() -> CellGrid {
        let mut grid = CellGrid::new(10, 15).unwrap();
        grid.set(8, 13, CellType::Destination).unwrap();
        grid.set(1, 1, CellType::Start).unwrap();
        grid
    }

    fn walls(s: &Surroundings) -> (bool, bool, bool, bool) {
        (s.front.is_wall, s.left.is_wall, s.right.is_wall, s.behind.is_wall)
    }

    #[test]
    fn corner_view_for_every_heading() {
        let grid = bordered();
        let start = Location::new(1, 1);

        let north = Surroundings::snapshot(&grid, start, Heading::North).unwrap();
        assert_eq!(walls(&north), (false, true, false, true));

        let east = Surroundings::snapshot(&grid, start, Heading::East).unwrap();
        assert_eq!(walls(&east), (false, false, true, true));

        let south = Surroundings::snapshot(&grid, start, Heading::South).unwrap();
        assert_eq!(walls(&south), (true, false, true, false));

        let west = Surroundings::snapshot(&grid, start, Heading::West).unwrap();
        assert_eq!(walls(&west), (true, true, false, false));
    }

    #[test]
    fn neighbour_locations_rotate_with_heading() {
        let grid = bordered();
        let s = Surroundings::snapshot(&grid, Location::new(4, 4), Heading::East).unwrap();
        assert_eq!(s.front.location, Location::new(5, 4));
        assert_eq!(s.right.location, Location::new(4, 3));
        assert_eq!(s.behind.location, Location::new(3, 4));
        assert_eq!(s.left.location, Location::new(4, 5));
        assert_eq!(s.destination, Some(Location::new(8, 13)));
    }

    #[test]
    fn border_cell_neighbours_are_rejected_not_wrapped() {
        let grid = bordered();
        let err = Surroundings::snapshot(&grid, Location::new(0, 0), Heading::North).unwrap_err();
        assert!(matches!(err, MazeError::OutOfBounds { x: 0, y: -1, .. }));
    }

    #[test]
    fn destination_cell_is_not_a_wall() {
        let grid = bordered();
        let s = Surroundings::snapshot(&grid, Location::new(8, 12), Heading::North).unwrap();
        assert_eq!(s.front.cell, CellType::Destination);
        assert!(s.front.is_open());
    }
}
