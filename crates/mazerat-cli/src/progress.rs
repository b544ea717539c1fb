//! Terminal views: a progress bar fed by maze notifications, and a coloured
//! picture of the maze with its rats.

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use mazerat::prelude::*;

/// Advances a progress bar on every location update.
pub struct ProgressView {
    bar: ProgressBar,
    verbose: bool,
}

impl ProgressView {
    /// Returns the view and a handle to the same bar for finishing it.
    pub fn new(len: u64, unit: &str, verbose: bool) -> (Self, ProgressBar) {
        let bar = ProgressBar::new(len);
        let template = format!("{{spinner:.green}} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {}", unit);
        if let Ok(style) = ProgressStyle::default_bar().template(&template) {
            bar.set_style(style.progress_chars("#>-"));
        }
        (
            Self {
                bar: bar.clone(),
                verbose,
            },
            bar,
        )
    }
}

impl MazeView for ProgressView {
    fn on_location_changed(&mut self, frame: &Frame<'_>) {
        self.bar.set_position(frame.tick);
        if self.verbose {
            let positions: Vec<String> = frame
                .rats
                .iter()
                .filter_map(|r| r.location().map(|l| format!("{} {}", l, r.heading())))
                .collect();
            self.bar
                .println(format!("  tick {}: {}", frame.tick, positions.join(", ")));
        }
    }
}

fn rat_glyph(heading: Heading) -> char {
    match heading {
        Heading::North => '^',
        Heading::East => '>',
        Heading::South => 'v',
        Heading::West => '<',
    }
}

fn cell_glyph(cell: CellType) -> ColoredString {
    let glyph = cell.glyph().to_string();
    match cell {
        CellType::Wall => glyph.bright_black(),
        CellType::Space => glyph.normal(),
        CellType::Start => glyph.green().bold(),
        CellType::Destination => glyph.yellow().bold(),
    }
}

/// Render the maze top row first, with rats drawn over their cells.
pub fn render(grid: &CellGrid, rats: &[RatState]) -> String {
    let mut out = String::new();
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let here = Location::new(x, y);
            let rat = rats.iter().find(|r| r.location() == Some(here));
            let glyph = match (rat, grid.get(x, y)) {
                (Some(rat), _) => rat_glyph(rat.heading()).to_string().cyan().bold(),
                (None, Ok(cell)) => cell_glyph(cell),
                (None, Err(_)) => "?".red(),
            };
            out.push_str(&glyph.to_string());
        }
        out.push('\n');
    }
    out
}
