//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    /// A hand satisfied the win condition on draw.
    Winner(PlayerId),
    /// The draw pile ran out.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}
