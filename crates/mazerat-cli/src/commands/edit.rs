//! Maze editing: create, change a cell, import a text picture.
//!
//! Every command loads the file, applies one change and saves it again.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use mazerat::prelude::*;
use std::path::Path;

pub fn new(maze: &str, width: usize, height: usize, force: bool) -> Result<()> {
    let path = Path::new(maze);
    if path.exists() && !force {
        bail!(
            "{} already exists. Use {} to overwrite it.",
            path.display(),
            "--force".cyan()
        );
    }

    let grid = CellGrid::new(width, height)?;
    save_grid(&grid, path).with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "{} Created {}x{} maze {}",
        "✓".green(),
        width,
        height,
        path.display().to_string().cyan()
    );
    Ok(())
}

pub fn set(maze: &str, x: i32, y: i32, cell: &str) -> Result<()> {
    let path = Path::new(maze);
    let cell: CellType = cell.parse()?;
    let mut grid = load_grid(path).with_context(|| format!("Failed to load {}", path.display()))?;

    grid.set(x, y, cell)?;
    save_grid(&grid, path).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{} ({}, {}) is now {}", "✓".green(), x, y, cell.to_string().cyan());

    if let Err(e) = grid.validate_for_save() {
        println!("  {} {}", "•".yellow(), e);
    }
    Ok(())
}

pub fn import(ascii: &str, maze: &str) -> Result<()> {
    let text = std::fs::read_to_string(ascii).with_context(|| format!("Failed to read {}", ascii))?;
    let grid = CellGrid::from_ascii(&text).with_context(|| format!("Failed to parse {}", ascii))?;

    let path = Path::new(maze);
    save_grid(&grid, path).with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "{} Imported {}x{} maze into {}",
        "✓".green(),
        grid.width(),
        grid.height(),
        path.display().to_string().cyan()
    );

    if let Err(e) = grid.validate_for_save() {
        println!("  {} {}", "•".yellow(), e);
    }
    Ok(())
}
