//! Errors for caller contract violations.
//!
//! Game conditions are never errors: an empty draw pile or a winning hand
//! finishes the game, and discarding a tile that isn't in hand is a no-op.
//! `EngineError` only covers calls that can't mean anything, such as a seat
//! index past the end of the table.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Draw, discard or select before the first deal.
    NotStarted,
    /// Seat index outside the table.
    PlayerOutOfRange { index: usize, player_count: usize },
    /// Difficulty name that isn't easy, medium or hard.
    UnknownDifficulty(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NotStarted => write!(f, "No game has been dealt yet"),
            EngineError::PlayerOutOfRange { index, player_count } => {
                write!(f, "Player index {} out of range for {} players", index, player_count)
            }
            EngineError::UnknownDifficulty(name) => {
                write!(f, "Unknown difficulty '{}'", name)
            }
        }
    }
}

impl std::error::Error for EngineError {}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(EngineError::NotStarted.to_string(), "No game has been dealt yet");
        assert_eq!(
            EngineError::PlayerOutOfRange { index: 5, player_count: 4 }.to_string(),
            "Player index 5 out of range for 4 players"
        );
        assert_eq!(
            EngineError::UnknownDifficulty("expert".to_string()).to_string(),
            "Unknown difficulty 'expert'"
        );
    }
}
