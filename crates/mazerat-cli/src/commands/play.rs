//! Replay the recorded steps of a maze.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use mazerat::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::Config;
use crate::progress::{render, ProgressView};

pub fn run(maze: &str, steps: Option<&str>, delay_ms: Option<u64>, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Path::new(maze);
    let steps_path = steps
        .map(PathBuf::from)
        .unwrap_or_else(|| steps_path_for(path));

    if !steps_path.exists() {
        bail!(
            "No recorded steps at {}. Run {} first.",
            steps_path.display(),
            format!("mazerat run {}", maze).cyan()
        );
    }

    let grid = load_grid(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let record = load_steps(&steps_path)
        .with_context(|| format!("Failed to load {}", steps_path.display()))?;
    let delay = Duration::from_millis(delay_ms.unwrap_or(config.simulation.step_delay_ms));

    println!(
        "{} Playing {} ticks for {} rat(s)...",
        "→".blue(),
        record.len().to_string().cyan(),
        record.rat_count().to_string().cyan()
    );
    if !record.policies.is_empty() {
        println!("  Policies: {}", record.policies.join(", "));
    }

    let mut player = Player::new(grid);
    let (view, bar) = ProgressView::new(record.len() as u64, "ticks", verbose);
    player.add_view(Box::new(view));

    let rats = player.play(&record, delay)?;
    bar.finish_and_clear();

    print!("{}", render(player.grid(), &rats));
    println!();
    println!("{} Playback complete", "✓".green().bold());
    Ok(())
}
