//! Run rats through a maze.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use mazerat::prelude::*;
use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::progress::{render, ProgressView};

/// Command-line overrides for the `[rats]` and `[simulation]` config.
pub struct RunOptions {
    pub policy: Option<String>,
    pub rats: Option<usize>,
    pub seed: Option<u64>,
    pub delay_ms: Option<u64>,
}

pub fn run(maze: &str, opts: RunOptions, verbose: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Path::new(maze);

    let policy_name = opts.policy.unwrap_or(config.rats.policy);
    let kind: PolicyKind = policy_name.parse()?;
    let count = opts.rats.unwrap_or(config.rats.count);
    if count == 0 {
        bail!("At least one rat is needed");
    }
    let seed = opts.seed.or(config.rats.seed);
    let delay = Duration::from_millis(opts.delay_ms.unwrap_or(config.simulation.step_delay_ms));

    let grid = load_grid(path).with_context(|| format!("Failed to load {}", path.display()))?;
    grid.validate_for_save()?;

    let mut sim = Simulation::from_config(grid, config.simulation.clone())?;
    let max_ticks = sim.config().max_ticks(sim.grid());
    for i in 0..count {
        let policy = match seed {
            Some(s) => kind.build_seeded(s.wrapping_add(i as u64)),
            None => kind.build(),
        };
        sim.add_rat(policy)?;
    }

    println!(
        "{} Running {} {} rat(s) through {} (at most {} ticks)...",
        "→".blue(),
        count.to_string().cyan(),
        kind.name().cyan(),
        path.display(),
        max_ticks
    );

    let (view, bar) = ProgressView::new(max_ticks, "ticks", verbose);
    sim.add_view(Box::new(view));

    let outcome = sim.run(delay);
    bar.finish_and_clear();
    print!("{}", render(sim.grid(), &sim.states()));
    println!();

    match outcome {
        Ok(ticks) => {
            let steps_path = steps_path_for(path);
            save_steps(&sim.take_record(), &steps_path)
                .with_context(|| format!("Failed to write {}", steps_path.display()))?;
            println!(
                "{} A rat found the destination in {} ticks",
                "✓".green().bold(),
                ticks.to_string().green()
            );
            println!("  Steps saved to {}", steps_path.display());
            Ok(())
        }
        Err(e) if e.is_terminal_outcome() => {
            println!("{} {}", "✗".red().bold(), e.to_string().red());
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
