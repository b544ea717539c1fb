//! CellGrid: the maze itself.
//!
//! A dense `width x height` array of [`CellType`] with a wall border. At
//! most one cell is the start and at most one is the destination; both are
//! cached once known and the cache only changes through [`CellGrid::set`]
//! with a `Start` or `Destination` cell.

use crate::error::{MazeError, Result};
use crate::types::{CellType, Location};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted form of a grid: `cells[x][y]` holds the cell code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridFile {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Vec<u8>>,
}

/// A bordered 2-D maze.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    /// Column-major: index `x * height + y`.
    cells: Vec<CellType>,
    start: Option<Location>,
    destination: Option<Location>,
}

impl CellGrid {
    /// Create an empty maze with walls all around the edge.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::config(format!(
                "maze must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        let mut grid = Self {
            width,
            height,
            cells: vec![CellType::Space; width * height],
            start: None,
            destination: None,
        };
        grid.set_borders();
        Ok(grid)
    }

    fn set_borders(&mut self) {
        for x in 0..self.width {
            self.cells[x * self.height] = CellType::Wall;
            self.cells[x * self.height + self.height - 1] = CellType::Wall;
        }
        for y in 0..self.height {
            self.cells[y] = CellType::Wall;
            self.cells[(self.width - 1) * self.height + y] = CellType::Wall;
        }
    }

    /// Build a grid from raw cells without touching the border, then
    /// discover start and destination by scanning.
    fn from_cells(width: usize, height: usize, cells: Vec<CellType>) -> Result<Self> {
        let mut grid = Self {
            width,
            height,
            cells,
            start: None,
            destination: None,
        };
        grid.start = grid.scan_unique(CellType::Start)?;
        grid.destination = grid.scan_unique(CellType::Destination)?;
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether a location lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, location: &Location) -> bool {
        location.x >= 0
            && location.y >= 0
            && (location.x as usize) < self.width
            && (location.y as usize) < self.height
    }

    fn index(&self, location: &Location) -> Result<usize> {
        if !self.contains(location) {
            return Err(MazeError::OutOfBounds {
                x: location.x,
                y: location.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(location.x as usize * self.height + location.y as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Result<CellType> {
        self.get_at(&Location::new(x, y))
    }

    pub fn get_at(&self, location: &Location) -> Result<CellType> {
        let idx = self.index(location)?;
        Ok(self.cells[idx])
    }

    pub fn is_wall(&self, location: &Location) -> Result<bool> {
        Ok(self.get_at(location)? == CellType::Wall)
    }

    /// Set a single cell.
    ///
    /// Setting `Start` or `Destination` first reverts the previously cached
    /// cell of that kind to `Space`, even if it has since been overwritten.
    /// Other writes never touch the cache, and border cells are not
    /// protected.
    pub fn set(&mut self, x: i32, y: i32, cell: CellType) -> Result<()> {
        let location = Location::new(x, y);
        let idx = self.index(&location)?;

        match cell {
            CellType::Start => {
                if let Some(previous) = self.start.take() {
                    let prev_idx = self.index(&previous)?;
                    self.cells[prev_idx] = CellType::Space;
                }
                self.start = Some(location);
            }
            CellType::Destination => {
                if let Some(previous) = self.destination.take() {
                    let prev_idx = self.index(&previous)?;
                    self.cells[prev_idx] = CellType::Space;
                }
                self.destination = Some(location);
            }
            CellType::Space | CellType::Wall => {}
        }

        self.cells[idx] = cell;
        Ok(())
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn has_destination(&self) -> bool {
        self.destination.is_some()
    }

    /// The start cell: cached if known, otherwise found by a full scan.
    pub fn start(&self) -> Result<Location> {
        self.start
            .or_else(|| self.scan(CellType::Start))
            .ok_or_else(|| MazeError::config("Start was not set for maze"))
    }

    /// The destination cell: cached if known, otherwise found by a full scan.
    pub fn destination(&self) -> Result<Location> {
        self.destination
            .or_else(|| self.scan(CellType::Destination))
            .ok_or_else(|| MazeError::config("Destination was not set for maze"))
    }

    /// First cell of the given type in column-major order.
    fn scan(&self, wanted: CellType) -> Option<Location> {
        self.cells
            .iter()
            .position(|&c| c == wanted)
            .map(|idx| self.location_of(idx))
    }

    fn scan_unique(&self, wanted: CellType) -> Result<Option<Location>> {
        let count = self.cells.iter().filter(|&&c| c == wanted).count();
        if count > 1 {
            return Err(MazeError::invalid_grid(format!(
                "found {} {} cells, at most one is allowed",
                count, wanted
            )));
        }
        Ok(self.scan(wanted))
    }

    fn location_of(&self, idx: usize) -> Location {
        Location::new((idx / self.height) as i32, (idx % self.height) as i32)
    }

    /// Check the maze can be handed to a runner: it needs a start and a destination.
    pub fn validate_for_save(&self) -> Result<()> {
        if !self.has_destination() {
            return Err(MazeError::config(
                "There is no destination for this maze; set a destination cell and try again",
            ));
        }
        if !self.has_start() {
            return Err(MazeError::config(
                "There is no start point for this maze; set a start cell and try again",
            ));
        }
        Ok(())
    }

    // --- Persistence ---

    pub fn to_file(&self) -> GridFile {
        let cells = self
            .cells
            .chunks(self.height)
            .map(|column| column.iter().map(|c| c.code()).collect())
            .collect();
        GridFile {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    pub fn from_file(file: GridFile) -> Result<Self> {
        if file.width == 0 || file.height == 0 {
            return Err(MazeError::invalid_grid(format!(
                "shape {}x{} is empty",
                file.width, file.height
            )));
        }
        if file.cells.len() != file.width {
            return Err(MazeError::invalid_grid(format!(
                "expected {} columns, found {}",
                file.width,
                file.cells.len()
            )));
        }

        let mut cells = Vec::with_capacity(file.width * file.height);
        for (x, column) in file.cells.iter().enumerate() {
            if column.len() != file.height {
                return Err(MazeError::invalid_grid(format!(
                    "column {} has {} cells, expected {}",
                    x,
                    column.len(),
                    file.height
                )));
            }
            for &code in column {
                cells.push(CellType::try_from(code)?);
            }
        }

        Self::from_cells(file.width, file.height, cells)
    }

    /// Serialize to the persisted byte form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.to_file())?)
    }

    /// Deserialize from the persisted byte form. Cell codes are kept exactly.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let file: GridFile = serde_json::from_slice(bytes)?;
        Self::from_file(file)
    }

    /// Parse a text picture of a maze. The first line is the top row.
    ///
    /// `#` wall, `.` or ` ` space, `S` start, `D` destination. Blank lines
    /// are skipped and the indentation shared by every other line is
    /// removed, so a blank cell at either edge of a row is kept. Cells are
    /// taken as written, border included.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.trim().is_empty())
            .collect();
        let indent = rows
            .iter()
            .map(|l| l.len() - l.trim_start_matches([' ', '\t']).len())
            .min()
            .unwrap_or(0);
        let lines: Vec<&str> = rows.iter().map(|l| &l[indent..]).collect();

        if lines.is_empty() {
            return Err(MazeError::invalid_grid("empty maze picture"));
        }

        let height = lines.len();
        let width = lines[0].chars().count();
        for (i, line) in lines.iter().enumerate() {
            let line_width = line.chars().count();
            if line_width != width {
                return Err(MazeError::invalid_grid(format!(
                    "line {} has width {} but expected {}",
                    i, line_width, width
                )));
            }
        }

        let mut cells = vec![CellType::Space; width * height];
        for (row, line) in lines.iter().enumerate() {
            let y = height - 1 - row;
            for (x, ch) in line.chars().enumerate() {
                cells[x * height + y] = CellType::from_glyph(ch).ok_or_else(|| {
                    MazeError::invalid_grid(format!("unknown cell '{}' at line {}", ch, row))
                })?;
            }
        }

        Self::from_cells(width, height, cells)
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                write!(f, "{}", self.cells[x * self.height + y].glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: usize = 10;
    const HEIGHT: usize = 15;

    #[test]
    fn new_grid_has_wall_border() {
        for (w, h) in [(3, 3), (4, 7), (WIDTH, HEIGHT)] {
            let grid = CellGrid::new(w, h).unwrap();
            for x in 0..w as i32 {
                for y in 0..h as i32 {
                    let on_border =
                        x == 0 || y == 0 || x == w as i32 - 1 || y == h as i32 - 1;
                    let cell = grid.get(x, y).unwrap();
                    if on_border {
                        assert_eq!(cell, CellType::Wall, "border cell ({}, {})", x, y);
                    } else {
                        assert_eq!(cell, CellType::Space, "interior cell ({}, {})", x, y);
                    }
                }
            }
        }
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        assert!(matches!(CellGrid::new(0, 5), Err(MazeError::Config(_))));
        assert!(CellGrid::new(1, 1).is_ok());
    }

    #[test]
    fn fresh_grid_has_no_start_or_destination() {
        let grid = CellGrid::new(WIDTH, HEIGHT).unwrap();
        assert!(!grid.has_start());
        assert!(!grid.has_destination());
        assert!(matches!(grid.start(), Err(MazeError::Config(_))));
        assert!(matches!(grid.destination(), Err(MazeError::Config(_))));
    }

    #[test]
    fn only_one_destination_at_a_time() {
        let mut grid = CellGrid::new(WIDTH, HEIGHT).unwrap();
        let (dx, dy) = (WIDTH as i32 - 2, HEIGHT as i32 - 2);

        grid.set(dx, dy, CellType::Destination).unwrap();
        assert_eq!(grid.destination().unwrap(), Location::new(dx, dy));

        grid.set(dx - 1, dy - 1, CellType::Destination).unwrap();
        assert_eq!(grid.get(dx - 1, dy - 1).unwrap(), CellType::Destination);
        assert_eq!(grid.get(dx, dy).unwrap(), CellType::Space);
        assert_eq!(grid.destination().unwrap(), Location::new(dx - 1, dy - 1));

        let count = grid.cells.iter().filter(|&&c| c == CellType::Destination).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn new_start_reverts_stale_reference() {
        let mut grid = CellGrid::new(6, 6).unwrap();
        grid.set(1, 1, CellType::Start).unwrap();
        // Overwrite the start with a wall: the cache still points at it.
        grid.set(1, 1, CellType::Wall).unwrap();
        assert!(grid.has_start());
        assert_eq!(grid.start().unwrap(), Location::new(1, 1));

        grid.set(2, 2, CellType::Start).unwrap();
        assert_eq!(grid.get(1, 1).unwrap(), CellType::Space);
        assert_eq!(grid.start().unwrap(), Location::new(2, 2));
    }

    #[test]
    fn border_is_not_reenforced_after_edit() {
        let mut grid = CellGrid::new(5, 5).unwrap();
        grid.set(0, 2, CellType::Space).unwrap();
        assert_eq!(grid.get(0, 2).unwrap(), CellType::Space);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut grid = CellGrid::new(5, 4).unwrap();
        assert!(matches!(
            grid.get(-1, 0),
            Err(MazeError::OutOfBounds { x: -1, y: 0, width: 5, height: 4 })
        ));
        assert!(matches!(grid.get(5, 0), Err(MazeError::OutOfBounds { .. })));
        assert!(matches!(grid.get(0, 4), Err(MazeError::OutOfBounds { .. })));
        assert!(grid.set(2, 9, CellType::Wall).is_err());
    }

    #[test]
    fn bytes_round_trip_preserves_every_cell() {
        let mut grid = CellGrid::new(WIDTH, HEIGHT).unwrap();
        grid.set(1, 1, CellType::Start).unwrap();
        grid.set(8, 13, CellType::Destination).unwrap();
        grid.set(4, 4, CellType::Wall).unwrap();
        grid.set(0, 7, CellType::Space).unwrap();

        let restored = CellGrid::from_bytes(&grid.to_bytes().unwrap()).unwrap();
        assert_eq!(restored.width(), WIDTH);
        assert_eq!(restored.height(), HEIGHT);
        for x in 0..WIDTH as i32 {
            for y in 0..HEIGHT as i32 {
                assert_eq!(restored.get(x, y).unwrap(), grid.get(x, y).unwrap());
            }
        }
        assert_eq!(restored.start().unwrap(), Location::new(1, 1));
        assert_eq!(restored.destination().unwrap(), Location::new(8, 13));
    }

    #[test]
    fn persisted_shape_is_width_by_height() {
        let grid = CellGrid::new(3, 5).unwrap();
        let file = grid.to_file();
        assert_eq!(file.cells.len(), 3);
        assert!(file.cells.iter().all(|column| column.len() == 5));
    }

    #[test]
    fn malformed_bytes_are_rejected() {
        let ragged = br#"{"width":2,"height":2,"cells":[[1,1],[1]]}"#;
        assert!(matches!(CellGrid::from_bytes(ragged), Err(MazeError::InvalidGrid(_))));

        let bad_code = br#"{"width":1,"height":2,"cells":[[1,9]]}"#;
        assert_eq!(CellGrid::from_bytes(bad_code), Err(MazeError::InvalidCellCode(9)));

        let two_starts = br#"{"width":1,"height":3,"cells":[[2,0,2]]}"#;
        assert!(matches!(CellGrid::from_bytes(two_starts), Err(MazeError::InvalidGrid(_))));
    }

    #[test]
    fn ascii_picture_puts_first_line_on_top() {
        let grid = CellGrid::from_ascii(
            "
            #####
            #..D#
            #S..#
            #####
            ",
        )
        .unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.start().unwrap(), Location::new(1, 1));
        assert_eq!(grid.destination().unwrap(), Location::new(3, 2));
        assert_eq!(grid.to_string(), "#####\n#..D#\n#S..#\n#####\n");
    }

    #[test]
    fn ascii_keeps_blank_cells_at_row_edges() {
        let grid = CellGrid::from_ascii("  #####\n   S.D \n  #####\n").unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.get(0, 1).unwrap(), CellType::Space);
        assert_eq!(grid.get(4, 1).unwrap(), CellType::Space);
        assert_eq!(grid.start().unwrap(), Location::new(1, 1));
        assert_eq!(grid.destination().unwrap(), Location::new(3, 1));
    }

    #[test]
    fn validate_for_save_requires_both_endpoints() {
        let mut grid = CellGrid::new(5, 5).unwrap();
        assert!(grid.validate_for_save().is_err());
        grid.set(3, 3, CellType::Destination).unwrap();
        assert!(grid.validate_for_save().is_err());
        grid.set(1, 1, CellType::Start).unwrap();
        assert!(grid.validate_for_save().is_ok());
    }
}
