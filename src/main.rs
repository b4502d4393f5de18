//! Console tic-tac-toe, first to five wins.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt_console::cli::Cli;
use ttt_console::{COMPUTER_NAMES, Console, InputSource, OutputSink, Session, Turn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut console = Console::new();
    console.show_message("Welcome to Tic Tac Toe! First to 5 wins.")?;
    console.show_message("")?;

    let name = console.request_name()?;
    let marker = console.request_marker()?;
    let first_move = if console.request_yes_no("Would you like to go first these games?")? {
        Turn::Human
    } else {
        Turn::Computer
    };
    let computer_name = COMPUTER_NAMES.choose(&mut rng).copied().unwrap_or("Hal");
    info!(human = %name, computer = computer_name, "starting match");

    let mut session = Session::new(name, computer_name, marker, first_move, rng);
    loop {
        session.play_match(&mut console)?;
        if let Some(winner) = session.match_winner() {
            console.show_message(&format!("{} won the match!", winner.name()))?;
        }
        if !console.request_yes_no("Would you like to play again?")? {
            break;
        }
        console.show_message("Let's play again!")?;
        console.show_message("")?;
        session.reset_match();
    }
    console.show_message("Thanks for playing! Goodbye.")?;

    Ok(())
}
