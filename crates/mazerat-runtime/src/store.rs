//! File persistence for mazes and step records.
//!
//! Both are stored as JSON. A maze's step record lives next to it as
//! `<stem>.steps.json`.

use std::path::{Path, PathBuf};

use mazerat_core::error::Result;
use mazerat_core::grid::CellGrid;
use tracing::debug;

use crate::record::StepRecord;

/// Save a maze to a JSON file, creating parent directories as needed.
pub fn save_grid(grid: &CellGrid, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&grid.to_file())?;
    write(path, json)?;
    debug!(path = %path.display(), width = grid.width(), height = grid.height(), "Saved maze");
    Ok(())
}

/// Load a maze saved by [`save_grid`].
pub fn load_grid(path: &Path) -> Result<CellGrid> {
    let bytes = std::fs::read(path)?;
    CellGrid::from_bytes(&bytes)
}

/// Save a step record to a JSON file.
pub fn save_steps(record: &StepRecord, path: &Path) -> Result<()> {
    let json = serde_json::to_string(record)?;
    write(path, json)?;
    debug!(path = %path.display(), ticks = record.len(), "Saved steps");
    Ok(())
}

/// Load and validate a step record.
pub fn load_steps(path: &Path) -> Result<StepRecord> {
    let bytes = std::fs::read(path)?;
    StepRecord::from_bytes(&bytes)
}

/// Where the step record for a maze file is kept.
pub fn steps_path_for(maze_path: &Path) -> PathBuf {
    let stem = maze_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "maze".to_string());
    maze_path.with_file_name(format!("{}.steps.json", stem))
}

fn write(path: &Path, contents: String) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TickRecord;
    use mazerat_core::error::MazeError;
    use mazerat_core::types::{CellType, Heading, Location};

    #[test]
    fn steps_live_next_to_the_maze() {
        assert_eq!(
            steps_path_for(Path::new("mazes/level1.json")),
            PathBuf::from("mazes/level1.steps.json")
        );
        assert_eq!(steps_path_for(Path::new("plain")), PathBuf::from("plain.steps.json"));
    }

    #[test]
    fn grid_file_round_trip_keeps_every_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("maze.json");

        let mut grid = CellGrid::new(6, 4).unwrap();
        grid.set(1, 1, CellType::Start).unwrap();
        grid.set(4, 2, CellType::Destination).unwrap();
        grid.set(2, 2, CellType::Wall).unwrap();
        // an opening in the border survives the trip too
        grid.set(0, 2, CellType::Space).unwrap();

        save_grid(&grid, &path).unwrap();
        let loaded = load_grid(&path).unwrap();
        assert_eq!(loaded, grid);
        assert_eq!(loaded.get(0, 2).unwrap(), CellType::Space);
        assert_eq!(loaded.start().unwrap(), Location::new(1, 1));
    }

    #[test]
    fn steps_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.steps.json");
        let mut record = StepRecord::new();
        record.policies.push("turn-left".into());
        record.push(TickRecord {
            directions: vec![Heading::West],
            positions: vec![Location::new(3, 1)],
        });

        save_steps(&record, &path).unwrap();
        assert_eq!(load_steps(&path).unwrap(), record);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_grid(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, MazeError::Io(_)));
    }
}
