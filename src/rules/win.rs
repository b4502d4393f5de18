//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Marker, Square};
use tracing::instrument;

/// The 8 lines that constitute a win: rows, then columns, then
/// diagonals.
///
/// The order is load-bearing: [`winning_marker`] and the opponent
/// heuristic both report the first qualifying line in this order.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` for the first fully-marked line in
/// [`WINNING_LINES`] order, `None` otherwise. A board holding two
/// completed lines for different markers is unreachable under
/// validated play; if handed one anyway, the first line in the fixed
/// order wins.
#[instrument]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Marked(marker) => Some(marker),
                Square::Empty => None,
            };
        }
    }

    None
}
