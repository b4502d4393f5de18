//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board against the rules. Kept
//! separate from board storage so the session loop and the opponent
//! heuristic can share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WINNING_LINES, winning_marker};
