//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Marker owned by one of the two players.
///
/// Exactly two distinct markers exist per match; every operation that
/// needs to reason about "mine" versus "theirs" takes both explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Marker {
    /// The X marker.
    #[display("X")]
    X,
    /// The O marker.
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell claimed by a marker.
    Marked(Marker),
}

/// Error placing a marker on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// The requested square number is not on the board.
    #[display("square {_0} is outside the board (valid squares are 1-9)")]
    OutOfRange(#[error(not(source))] u8),
    /// The requested square already holds a marker.
    #[display("square {_0} is already occupied")]
    Occupied(#[error(not(source))] Position),
}

/// 3x3 tic-tac-toe board.
///
/// Created empty once per match and reset in place at the start of
/// every round; the same instance is reused across rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (positions 1-9).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if the square at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a marker at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::Occupied`] if the square already holds a
    /// marker. No other cell is touched on failure.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, marker: Marker) -> Result<(), InvalidMove> {
        if !self.is_empty(pos) {
            return Err(InvalidMove::Occupied(pos));
        }
        self.squares[pos.to_index()] = Square::Marked(marker);
        Ok(())
    }

    /// Returns all empty positions in ascending square order.
    ///
    /// This is both the validation pool for human moves and the
    /// sampling pool for the opponent's random fallback.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Returns all positions currently holding the given marker.
    pub fn positions_with(&self, marker: Marker) -> Vec<Position> {
        Position::iter()
            .filter(|pos| self.get(*pos) == Square::Marked(marker))
            .collect()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Clears every square, keeping the same instance.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their square number so players know what to
    /// type at the prompt.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            result.push_str("     |     |\n");
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => (row * 3 + col + 1).to_string(),
                    Square::Marked(marker) => marker.to_string(),
                };
                result.push_str(&format!("  {symbol}  "));
                if col < 2 {
                    result.push('|');
                }
            }
            result.push_str("\n     |     |\n");
            if row < 2 {
                result.push_str("-----+-----+-----\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
