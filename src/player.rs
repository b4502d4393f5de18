//! Player identity and score.

use crate::types::Marker;
use serde::{Deserialize, Serialize};

/// Names the automated opponent introduces itself with.
pub const COMPUTER_NAMES: [&str; 3] = ["R2D2", "Watson", "Hal"];

/// A participant in the match.
///
/// Players persist for the whole match; only the score changes across
/// rounds. Whether a player is driven by the prompt loop or by the
/// opponent heuristic is the session's business, not the player's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    marker: Marker,
    score: u32,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
            score: 0,
        }
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the accumulated round wins.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Credits one round win.
    pub fn add_win(&mut self) {
        self.score += 1;
    }

    /// Zeroes the score for a fresh match.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
