//! Turn actions and the history records they leave behind.
//!
//! Only two things ever move a tile once the deal is done: a draw from the
//! pile into a hand, and a discard from a hand onto that seat's discards.
//! Each one is appended to the game history as an `ActionRecord`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::tiles::Tile;

/// A tile movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Front of the draw pile into the player's hand.
    Draw { tile: Tile },
    /// From the player's hand onto their discards.
    Discard { tile: Tile },
}

impl Action {
    /// The tile that moved.
    #[must_use]
    pub const fn tile(&self) -> Tile {
        match self {
            Action::Draw { tile } | Action::Discard { tile } => *tile,
        }
    }

    #[must_use]
    pub const fn is_draw(&self) -> bool {
        matches!(self, Action::Draw { .. })
    }

    #[must_use]
    pub const fn is_discard(&self) -> bool {
        matches!(self, Action::Discard { .. })
    }
}

/// A recorded action with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub player: PlayerId,

    /// What happened.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Position in the game-wide action sequence.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
