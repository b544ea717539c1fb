//! Print a maze.

use anyhow::{Context, Result};
use colored::Colorize;
use mazerat::prelude::*;
use std::path::Path;

use crate::progress::render;

pub fn run(maze: &str) -> Result<()> {
    let path = Path::new(maze);
    let grid = load_grid(path).with_context(|| format!("Failed to load {}", path.display()))?;

    println!(
        "{} {}x{}",
        path.display().to_string().cyan(),
        grid.width(),
        grid.height()
    );
    print!("{}", render(&grid, &[]));

    match (grid.start(), grid.destination()) {
        (Ok(start), Ok(dest)) => {
            println!("  Start: {}   Destination: {}", start.to_string().green(), dest.to_string().yellow());
        }
        _ => {
            if let Err(e) = grid.validate_for_save() {
                println!("  {} {}", "•".yellow(), e);
            }
        }
    }

    let steps = steps_path_for(path);
    if steps.exists() {
        println!("  Recorded steps: {}", steps.display());
    }
    Ok(())
}
