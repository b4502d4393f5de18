//! Command-line interface for the console game.

use clap::Parser;

/// Console tic-tac-toe against a heuristic opponent.
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Console tic-tac-toe, first to five wins", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the computer's random fallback moves, for reproducible play.
    #[arg(long)]
    pub seed: Option<u64>,
}
