//! Draw detection logic for tic-tac-toe.

use super::win::winning_marker;
use crate::types::Board;
use tracing::instrument;

/// Checks if the round ended in a draw.
///
/// A draw is a full board with no winner; a round that produced a
/// winner is never also a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_marker(board).is_none()
}
