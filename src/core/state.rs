//! Game phase and per-game turn state.
//!
//! ## GamePhase
//!
//! `Setup` until the first deal, `Playing` during the turn loop,
//! `Finished` once the pile runs out or a hand wins. Only a new deal
//! leaves `Finished`.
//!
//! ## TurnState
//!
//! Everything about the current game that isn't a tile collection: whose
//! turn it is, transient highlight state for the UI, the outcome, and the
//! action history.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::player::PlayerId;
use crate::rules::GameResult;
use crate::tiles::{Tile, TileId};

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    #[default]
    Setup,
    Playing,
    Finished,
}

impl GamePhase {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GamePhase::Setup => "setup",
            GamePhase::Playing => "playing",
            GamePhase::Finished => "finished",
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Turn bookkeeping for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub phase: GamePhase,

    /// Seat whose turn it is.
    pub current_player: PlayerId,

    /// Turn number (starts at 1, advances on every discard).
    pub turn_number: u32,

    /// Next history sequence number.
    action_sequence: u32,

    /// Most recent draw, for highlighting. Cleared on discard.
    pub last_drawn: Option<Tile>,

    /// Tile the human has tapped. Cleared on discard.
    pub selected: Option<TileId>,

    /// Set once a hand wins.
    pub winner: Option<PlayerId>,

    /// Set when the game finishes.
    pub result: Option<GameResult>,

    /// Every draw and discard, in order.
    pub history: Vector<ActionRecord>,
}

impl TurnState {
    /// Fresh state for a newly dealt game: playing, seat 0, turn 1.
    #[must_use]
    pub fn dealt() -> Self {
        Self {
            phase: GamePhase::Playing,
            turn_number: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Append an action to history.
    pub fn record_action(&mut self, player: PlayerId, action: Action) {
        let record = ActionRecord::new(player, action, self.turn_number, self.action_sequence);
        self.action_sequence += 1;
        self.history.push_back(record);
    }

    /// Drop per-turn highlight state.
    pub fn clear_transient(&mut self) {
        self.last_drawn = None;
        self.selected = None;
    }

    /// Hand the turn to `player`.
    pub fn advance_to(&mut self, player: PlayerId) {
        self.current_player = player;
        self.turn_number += 1;
    }

    /// Enter the terminal phase.
    pub fn finish(&mut self, result: GameResult) {
        self.phase = GamePhase::Finished;
        self.winner = match result {
            GameResult::Winner(player) => Some(player),
            GameResult::Draw => None,
        };
        self.result = Some(result);
    }
}
