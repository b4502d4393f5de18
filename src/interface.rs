//! Collaborator traits for input and output.
//!
//! The session loop never touches stdin or stdout directly; it talks
//! to these traits. The console implements them with prompt loops,
//! and tests implement them with scripted responses.

use crate::player::Player;
use crate::position::Position;
use crate::types::{Board, Marker};
use anyhow::Result;

/// Source of human decisions.
///
/// Implementations own all re-prompting: each method blocks until it
/// can return a valid value. The session calls them only with
/// already-filtered choices and never retries.
pub trait InputSource {
    /// Asks for a square out of the given empty positions.
    ///
    /// Must eventually return a member of `valid`, which is never
    /// empty when called.
    fn request_square(&mut self, valid: &[Position]) -> Result<Position>;

    /// Asks a yes/no question.
    fn request_yes_no(&mut self, prompt: &str) -> Result<bool>;

    /// Asks for the human player's name (non-empty).
    fn request_name(&mut self) -> Result<String>;

    /// Asks which marker the human wants to play.
    fn request_marker(&mut self) -> Result<Marker>;
}

/// Sink for everything shown to the human.
pub trait OutputSink {
    /// Draws the current board.
    fn render_board(&mut self, board: &Board) -> Result<()>;

    /// Shows a plain message.
    fn show_message(&mut self, text: &str) -> Result<()>;

    /// Shows the running match score.
    fn show_score(&mut self, human: &Player, computer: &Player) -> Result<()>;
}
