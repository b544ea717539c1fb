//! List the available policies.

use anyhow::Result;
use colored::Colorize;
use mazerat::prelude::*;

pub fn run() -> Result<()> {
    println!("{}", "Policies".bold());
    for kind in PolicyKind::ALL {
        let tag = if kind.is_random() { " (seedable)" } else { "" };
        println!(
            "  {:<14} {}{}",
            kind.name().cyan(),
            kind.summary(),
            tag.bright_black()
        );
    }
    Ok(())
}
