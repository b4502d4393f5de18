//! Console tic-tac-toe against a heuristic opponent.
//!
//! The engine is split into small pieces with the I/O kept behind
//! traits:
//!
//! - **Board**: the 9-cell grid, occupancy queries, and mutation.
//! - **Rules**: win and draw detection over the 8 fixed lines.
//! - **Heuristic**: the opponent's move selection
//!   (win > block > center > random).
//! - **Session**: the turn state machine, per-round scoring, and the
//!   match loop to [`TARGET_SCORE`] wins.
//! - **Console**: the terminal implementation of the [`InputSource`]
//!   and [`OutputSink`] collaborators.
//!
//! Everything is single-threaded and synchronous; the only
//! nondeterminism is the opponent's random fallback move, drawn from
//! an injected [`rand::Rng`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod console;
mod heuristic;
mod interface;
mod player;
mod position;
mod rules;
mod session;
mod types;

pub use console::Console;
pub use heuristic::select_move;
pub use interface::{InputSource, OutputSink};
pub use player::{COMPUTER_NAMES, Player};
pub use position::Position;
pub use rules::{WINNING_LINES, is_draw, winning_marker};
pub use session::{RoundOutcome, Session, TARGET_SCORE, Turn};
pub use types::{Board, InvalidMove, Marker, Square};
