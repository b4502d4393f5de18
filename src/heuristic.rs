//! Move selection for the automated opponent.
//!
//! Fixed-priority heuristic: complete an own line, block the
//! opponent's line, take the center, otherwise pick a random empty
//! square. The random draw is the only nondeterministic step and
//! comes from an injected [`Rng`] so tests can seed it.

use crate::position::Position;
use crate::rules::WINNING_LINES;
use crate::types::{Board, Marker, Square};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks the automated opponent's next move.
///
/// Returns `None` only when the board is full; otherwise the returned
/// position is guaranteed empty. Rules 1-3 are deterministic; rule 4
/// draws uniformly over the empty positions.
#[instrument(skip(rng))]
pub fn select_move<R: Rng>(
    board: &Board,
    own: Marker,
    opponent: Marker,
    rng: &mut R,
) -> Option<Position> {
    if let Some(pos) = completing_move(board, own) {
        debug!(position = %pos, "completing own line");
        return Some(pos);
    }
    if let Some(pos) = completing_move(board, opponent) {
        debug!(position = %pos, "blocking opponent line");
        return Some(pos);
    }
    if board.is_empty(Position::Center) {
        debug!("taking center");
        return Some(Position::Center);
    }
    let pos = board.empty_positions().choose(rng).copied();
    if let Some(pos) = &pos {
        debug!(position = %pos, "random fallback");
    }
    pos
}

/// Finds the empty square of the first line holding exactly two of
/// `marker` and nothing else, scanning [`WINNING_LINES`] in their
/// declared order.
fn completing_move(board: &Board, marker: Marker) -> Option<Position> {
    for line in WINNING_LINES {
        let mut open = None;
        let mut held = 0;
        for pos in line {
            match board.get(pos) {
                Square::Marked(m) if m == marker => held += 1,
                Square::Empty => open = Some(pos),
                Square::Marked(_) => {}
            }
        }
        if held == 2 {
            if let Some(pos) = open {
                return Some(pos);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn board_with(marks: &[(Position, Marker)]) -> Board {
        let mut board = Board::new();
        for (pos, marker) in marks {
            board.place(*pos, *marker).unwrap();
        }
        board
    }

    #[test]
    fn test_completes_own_line() {
        let board = board_with(&[
            (Position::TopLeft, Marker::X),
            (Position::TopCenter, Marker::X),
        ]);
        let pos = select_move(&board, Marker::X, Marker::O, &mut rng());
        assert_eq!(pos, Some(Position::TopRight));
    }

    #[test]
    fn test_blocks_opponent_line() {
        let board = board_with(&[
            (Position::TopLeft, Marker::O),
            (Position::TopCenter, Marker::O),
        ]);
        let pos = select_move(&board, Marker::X, Marker::O, &mut rng());
        assert_eq!(pos, Some(Position::TopRight));
    }

    #[test]
    fn test_winning_beats_blocking() {
        // X can win on the bottom row even though O threatens the top.
        let board = board_with(&[
            (Position::TopLeft, Marker::O),
            (Position::TopCenter, Marker::O),
            (Position::BottomLeft, Marker::X),
            (Position::BottomCenter, Marker::X),
        ]);
        let pos = select_move(&board, Marker::X, Marker::O, &mut rng());
        assert_eq!(pos, Some(Position::BottomRight));
    }

    #[test]
    fn test_winning_beats_center() {
        let board = board_with(&[
            (Position::TopLeft, Marker::X),
            (Position::TopCenter, Marker::X),
        ]);
        assert!(board.is_empty(Position::Center));
        let pos = select_move(&board, Marker::X, Marker::O, &mut rng());
        assert_eq!(pos, Some(Position::TopRight));
    }

    #[test]
    fn test_blocking_beats_center() {
        let board = board_with(&[
            (Position::TopLeft, Marker::O),
            (Position::TopCenter, Marker::O),
        ]);
        assert!(board.is_empty(Position::Center));
        let pos = select_move(&board, Marker::X, Marker::O, &mut rng());
        assert_eq!(pos, Some(Position::TopRight));
    }

    #[test]
    fn test_takes_center_on_empty_board() {
        let board = Board::new();
        let pos = select_move(&board, Marker::X, Marker::O, &mut rng());
        assert_eq!(pos, Some(Position::Center));
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        // Top row holds two O but the third square is X: nothing to
        // block there, so the selector falls through to the center.
        let board = board_with(&[
            (Position::TopLeft, Marker::O),
            (Position::TopCenter, Marker::O),
            (Position::TopRight, Marker::X),
            (Position::MiddleLeft, Marker::X),
        ]);
        let pos = select_move(&board, Marker::X, Marker::O, &mut rng());
        assert_eq!(pos, Some(Position::Center));
    }

    #[test]
    fn test_first_qualifying_line_wins_tie_break() {
        // Two winning completions for X: top row (square 3) and left
        // column (square 7). Rows are declared first.
        let board = board_with(&[
            (Position::TopLeft, Marker::X),
            (Position::TopCenter, Marker::X),
            (Position::MiddleLeft, Marker::X),
        ]);
        let pos = select_move(&board, Marker::X, Marker::O, &mut rng());
        assert_eq!(pos, Some(Position::TopRight));
    }

    #[test]
    fn test_random_fallback_stays_in_empty_pool() {
        // No two-in-a-line for either marker, center taken. X's squares
        // (1 and 6) share no line, so only the fallback applies.
        let board = board_with(&[
            (Position::TopLeft, Marker::X),
            (Position::Center, Marker::O),
            (Position::MiddleRight, Marker::X),
        ]);
        let empty = board.empty_positions();
        let mut seen = std::collections::HashSet::new();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pos = select_move(&board, Marker::X, Marker::O, &mut rng).unwrap();
            assert!(empty.contains(&pos));
            seen.insert(pos);
        }
        // The draw is over the whole pool, not a single fixed square.
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_none_iff_full() {
        let mut board = Board::new();
        let mut rng = rng();
        // X O X / O X X / O X O, placed one at a time: until the last
        // square is taken, the selector must produce an empty square.
        for (pos, marker) in [
            (Position::TopLeft, Marker::X),
            (Position::TopCenter, Marker::O),
            (Position::TopRight, Marker::X),
            (Position::MiddleLeft, Marker::O),
            (Position::Center, Marker::X),
            (Position::MiddleRight, Marker::X),
            (Position::BottomLeft, Marker::O),
            (Position::BottomCenter, Marker::X),
            (Position::BottomRight, Marker::O),
        ] {
            let chosen = select_move(&board, Marker::X, Marker::O, &mut rng).unwrap();
            assert_eq!(board.get(chosen), Square::Empty);
            board.place(pos, marker).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(select_move(&board, Marker::X, Marker::O, &mut rng), None);
    }

    #[test]
    fn test_self_play_never_picks_occupied() {
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new();
            let mut marker = Marker::X;
            while let Some(pos) = select_move(&board, marker, marker.opponent(), &mut rng) {
                assert!(board.is_empty(pos));
                board.place(pos, marker).unwrap();
                if crate::rules::winning_marker(&board).is_some() {
                    break;
                }
                marker = marker.opponent();
            }
        }
    }
}
