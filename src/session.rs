//! Match session: turn coordination, scoring, and the round loop.

use crate::heuristic::select_move;
use crate::interface::{InputSource, OutputSink};
use crate::player::Player;
use crate::rules::winning_marker;
use crate::types::{Board, Marker};
use anyhow::{Result, anyhow};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Round wins needed to take the match.
pub const TARGET_SCORE: u32 = 5;

/// Whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// The human moves next.
    Human,
    /// The automated opponent moves next.
    Computer,
}

impl Turn {
    /// Returns the other side.
    pub fn toggle(self) -> Self {
        match self {
            Turn::Human => Turn::Computer,
            Turn::Computer => Turn::Human,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A line was completed by this marker.
    Won(Marker),
    /// The board filled with no winner.
    Draw,
}

/// One match between the human and the automated opponent.
///
/// Owns the board, both players, and the randomness source for the
/// opponent's fallback move. The board instance is reused across
/// rounds; only [`Board::reset`] touches it between them.
#[derive(Debug)]
pub struct Session<R> {
    board: Board,
    human: Player,
    computer: Player,
    first_move: Turn,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Creates a session.
    ///
    /// The computer always plays the marker the human did not pick,
    /// so the two markers are distinct by construction.
    pub fn new(
        human_name: impl Into<String>,
        computer_name: impl Into<String>,
        human_marker: Marker,
        first_move: Turn,
        rng: R,
    ) -> Self {
        Self {
            board: Board::new(),
            human: Player::new(human_name, human_marker),
            computer: Player::new(computer_name, human_marker.opponent()),
            first_move,
            rng,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the human player.
    pub fn human(&self) -> &Player {
        &self.human
    }

    /// Returns the automated opponent.
    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// Plays one round to completion.
    ///
    /// Resets the board, re-applies the match's first-mover setting,
    /// then alternates moves until a line is completed or the board
    /// fills. Scores are not touched; see [`Session::record_outcome`].
    #[instrument(skip(self, ui), fields(human = %self.human.name()))]
    pub fn play_round<U: InputSource + OutputSink>(&mut self, ui: &mut U) -> Result<RoundOutcome> {
        self.board.reset();
        let mut turn = self.first_move;
        loop {
            match turn {
                Turn::Human => {
                    ui.render_board(&self.board)?;
                    ui.show_score(&self.human, &self.computer)?;
                    let valid = self.board.empty_positions();
                    let pos = ui.request_square(&valid)?;
                    self.board.place(pos, self.human.marker())?;
                    debug!(position = %pos, "human moved");
                }
                Turn::Computer => {
                    let own = self.computer.marker();
                    let pos = select_move(&self.board, own, self.human.marker(), &mut self.rng)
                        .ok_or_else(|| anyhow!("no move available on a non-full board"))?;
                    self.board.place(pos, own)?;
                    debug!(position = %pos, "computer moved");
                }
            }
            if let Some(winner) = winning_marker(&self.board) {
                info!(winner = %winner, "round won");
                return Ok(RoundOutcome::Won(winner));
            }
            if self.board.is_full() {
                info!("round drawn");
                return Ok(RoundOutcome::Draw);
            }
            turn = turn.toggle();
        }
    }

    /// Credits the round to its winner; a draw credits nobody.
    pub fn record_outcome(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won(marker) if marker == self.human.marker() => self.human.add_win(),
            RoundOutcome::Won(_) => self.computer.add_win(),
            RoundOutcome::Draw => {}
        }
    }

    /// Returns the match winner once a score reaches [`TARGET_SCORE`].
    pub fn match_winner(&self) -> Option<&Player> {
        if self.human.score() >= TARGET_SCORE {
            Some(&self.human)
        } else if self.computer.score() >= TARGET_SCORE {
            Some(&self.computer)
        } else {
            None
        }
    }

    /// Plays rounds until one side reaches [`TARGET_SCORE`].
    #[instrument(skip(self, ui))]
    pub fn play_match<U: InputSource + OutputSink>(&mut self, ui: &mut U) -> Result<()> {
        while self.match_winner().is_none() {
            let outcome = self.play_round(ui)?;
            self.record_outcome(outcome);
            ui.render_board(&self.board)?;
            ui.show_score(&self.human, &self.computer)?;
            match outcome {
                RoundOutcome::Won(marker) if marker == self.human.marker() => {
                    ui.show_message(&format!("{} wins the round!", self.human.name()))?;
                }
                RoundOutcome::Won(_) => {
                    ui.show_message(&format!("{} wins the round!", self.computer.name()))?;
                }
                RoundOutcome::Draw => {
                    ui.show_message("The round is a draw.")?;
                }
            }
        }
        Ok(())
    }

    /// Clears the board and both scores for a fresh match.
    pub fn reset_match(&mut self) {
        self.board.reset();
        self.human.reset_score();
        self.computer.reset_score();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session<StdRng> {
        Session::new(
            "Ada",
            "Hal",
            Marker::X,
            Turn::Human,
            StdRng::seed_from_u64(7),
        )
    }

    #[test]
    fn test_turn_toggle() {
        assert_eq!(Turn::Human.toggle(), Turn::Computer);
        assert_eq!(Turn::Computer.toggle(), Turn::Human);
    }

    #[test]
    fn test_markers_distinct_by_construction() {
        let session = session();
        assert_eq!(session.human().marker(), Marker::X);
        assert_eq!(session.computer().marker(), Marker::O);
    }

    #[test]
    fn test_record_outcome_credits_winner_only() {
        let mut session = session();
        session.record_outcome(RoundOutcome::Won(Marker::X));
        assert_eq!(session.human().score(), 1);
        assert_eq!(session.computer().score(), 0);

        session.record_outcome(RoundOutcome::Won(Marker::O));
        assert_eq!(session.human().score(), 1);
        assert_eq!(session.computer().score(), 1);

        session.record_outcome(RoundOutcome::Draw);
        assert_eq!(session.human().score(), 1);
        assert_eq!(session.computer().score(), 1);
    }

    #[test]
    fn test_match_winner_at_target() {
        let mut session = session();
        for _ in 0..TARGET_SCORE - 1 {
            session.record_outcome(RoundOutcome::Won(Marker::O));
            assert!(session.match_winner().is_none());
        }
        session.record_outcome(RoundOutcome::Won(Marker::O));
        let winner = session.match_winner().expect("match should be over");
        assert_eq!(winner.name(), "Hal");
    }

    #[test]
    fn test_reset_match_clears_scores() {
        let mut session = session();
        session.record_outcome(RoundOutcome::Won(Marker::X));
        session.reset_match();
        assert_eq!(session.human().score(), 0);
        assert_eq!(session.computer().score(), 0);
        assert_eq!(session.board(), &Board::new());
    }
}
