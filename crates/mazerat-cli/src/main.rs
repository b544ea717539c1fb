//! Mazerat CLI - build mazes, run rats through them, replay the runs.

mod commands;
mod config;
mod progress;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "mazerat")]
#[command(author, version, about = "Mazerat - rats running a maze", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default mazerat.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Create an empty bordered maze
    New {
        /// Maze file to create
        maze: String,

        #[arg(long, default_value = "10")]
        width: usize,

        #[arg(long, default_value = "15")]
        height: usize,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Set one cell of a maze
    Set {
        maze: String,
        x: i32,
        y: i32,
        /// space, wall, start or destination
        cell: String,
    },

    /// Print a maze
    Show { maze: String },

    /// Convert a text picture of a maze into a maze file
    Import {
        /// Text file using '#', '.', 'S' and 'D'
        ascii: String,
        /// Maze file to write
        maze: String,
    },

    /// Run rats through a maze and record the steps
    Run {
        maze: String,

        /// Policy name (see `mazerat policies`)
        #[arg(short, long)]
        policy: Option<String>,

        /// Number of rats
        #[arg(short, long)]
        rats: Option<usize>,

        /// Seed for random policies
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pause after each phase, in milliseconds
        #[arg(short, long)]
        delay_ms: Option<u64>,
    },

    /// Replay the recorded steps of a maze
    Play {
        maze: String,

        /// Step file (default: next to the maze)
        #[arg(long)]
        steps: Option<String>,

        /// Pause after each phase, in milliseconds
        #[arg(short, long)]
        delay_ms: Option<u64>,
    },

    /// List the available policies
    Policies,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::New { maze, width, height, force } => {
            commands::edit::new(&maze, width, height, force)
        }
        Commands::Set { maze, x, y, cell } => commands::edit::set(&maze, x, y, &cell),
        Commands::Show { maze } => commands::show::run(&maze),
        Commands::Import { ascii, maze } => commands::edit::import(&ascii, &maze),
        Commands::Run { maze, policy, rats, seed, delay_ms } => commands::run::run(
            &maze,
            commands::run::RunOptions { policy, rats, seed, delay_ms },
            cli.verbose,
        ),
        Commands::Play { maze, steps, delay_ms } => {
            commands::play::run(&maze, steps.as_deref(), delay_ms, cli.verbose)
        }
        Commands::Policies => commands::policies::run(),
    }
}
