//! Read-only view of the table for the presentation layer.
//!
//! Snapshots are cheap to take: discards and history are persistent
//! vectors, and hands are at most 14 tiles.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, GamePhase, Player, PlayerId};
use crate::policy::Difficulty;
use crate::rules::GameResult;
use crate::tiles::{Tile, TileId};

/// One seat as the UI sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub is_human: bool,
    pub hand: Vec<Tile>,
    pub discards: Vector<Tile>,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            is_human: player.is_human,
            hand: player.hand().to_vec(),
            discards: player.discards().clone(),
        }
    }
}

/// The whole table at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub difficulty: Difficulty,
    pub players: Vec<PlayerSnapshot>,
    pub draw_pile_remaining: usize,
    pub current_player: PlayerId,
    pub turn_number: u32,
    pub winner: Option<PlayerId>,
    pub result: Option<GameResult>,
    pub last_drawn: Option<Tile>,
    pub selected_tile: Option<TileId>,
    pub history: Vector<ActionRecord>,
}

impl Snapshot {
    /// Seat view.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not a seat in this snapshot.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerSnapshot {
        &self.players[player.index()]
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    /// Tiles in hands, discards and the draw pile.
    #[must_use]
    pub fn tiles_accounted(&self) -> usize {
        self.players
            .iter()
            .map(|p| p.hand.len() + p.discards.len())
            .sum::<usize>()
            + self.draw_pile_remaining
    }
}
