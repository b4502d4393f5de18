//! Terminal implementation of the input/output collaborators.
//!
//! All re-prompting lives here: every request loops until the player
//! types something acceptable, with the board as the source of truth
//! for which squares are still open.

use crate::interface::{InputSource, OutputSink};
use crate::player::Player;
use crate::position::Position;
use crate::types::{Board, InvalidMove, Marker};
use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use tracing::debug;

/// Prompt-and-print collaborator over stdin/stdout.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    /// Creates a console collaborator.
    pub fn new() -> Self {
        Self
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line)
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{text}")?;
        stdout.flush()?;
        self.read_line()
    }
}

impl InputSource for Console {
    fn request_square(&mut self, valid: &[Position]) -> Result<Position> {
        loop {
            let line = self.prompt(&format!("Choose a square ({}): ", join_or(valid)))?;
            match parse_square(line.trim(), valid) {
                Ok(pos) => return Ok(pos),
                Err(reason) => {
                    debug!(input = line.trim(), "rejected square input");
                    self.show_message(&format!("Sorry, {reason}."))?;
                }
            }
        }
    }

    fn request_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let line = self.prompt(&format!("{prompt} (y/n): "))?;
            match parse_yes_no(line.trim()) {
                Some(answer) => return Ok(answer),
                None => self.show_message("Sorry, must be y or n.")?,
            }
        }
    }

    fn request_name(&mut self) -> Result<String> {
        loop {
            let line = self.prompt("What's your name? ")?;
            let name = line.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
            self.show_message("Sorry, must enter a name.")?;
        }
    }

    fn request_marker(&mut self) -> Result<Marker> {
        loop {
            let line = self.prompt("Would you like to be X or O? ")?;
            match parse_marker(line.trim()) {
                Some(marker) => return Ok(marker),
                None => self.show_message("Invalid marker - X or O only.")?,
            }
        }
    }
}

impl OutputSink for Console {
    fn render_board(&mut self, board: &Board) -> Result<()> {
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(stdout, "{}", board.display())?;
        Ok(())
    }

    fn show_message(&mut self, text: &str) -> Result<()> {
        println!("{text}");
        Ok(())
    }

    fn show_score(&mut self, human: &Player, computer: &Player) -> Result<()> {
        println!(
            "{} ({}): {}, {} ({}): {}",
            human.name(),
            human.marker(),
            human.score(),
            computer.name(),
            computer.marker(),
            computer.score()
        );
        println!();
        Ok(())
    }
}

/// Joins square numbers as "1, 2, or 3" for the move prompt.
fn join_or(positions: &[Position]) -> String {
    match positions {
        [] => String::new(),
        [only] => only.to_string(),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(Position::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{head}, or {last}")
        }
    }
}

/// Parses a square choice against the currently open squares.
///
/// The error is the message shown before re-prompting.
fn parse_square(input: &str, valid: &[Position]) -> Result<Position, String> {
    let number: u8 = input
        .parse()
        .map_err(|_| format!("'{input}' is not a square number"))?;
    let pos = Position::from_number(number).ok_or_else(|| InvalidMove::OutOfRange(number).to_string())?;
    if valid.contains(&pos) {
        Ok(pos)
    } else {
        Err(InvalidMove::Occupied(pos).to_string())
    }
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn parse_marker(input: &str) -> Option<Marker> {
    match input.to_lowercase().as_str() {
        "x" => Some(Marker::X),
        "o" => Some(Marker::O),
        _ => None,
    }
}
