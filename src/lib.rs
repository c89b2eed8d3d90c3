//! # mahjong-table
//!
//! A turn engine for a simplified four-player Mahjong table: one human seat
//! against scripted opponents.
//!
//! ## Design Principles
//!
//! 1. **Event-Driven**: The engine never blocks or spawns. A presentation
//!    layer calls `new_game`, `discard`, `select_tile` and `advance`, and
//!    renders the `Snapshot` each call returns.
//!
//! 2. **Logical Time**: Opponent thinking and draw pauses run on a
//!    cancellable scheduler driven by `advance`, so a reset drops them and
//!    tests step through them exactly.
//!
//! 3. **Deterministic**: All randomness flows from one seeded `GameRng`.
//!    The same seed and the same inputs replay the same game.
//!
//! ## Modules
//!
//! - `core`: Player IDs, seats, turn state, actions, RNG, configuration
//! - `tiles`: Tile kinds, the deck, dealing
//! - `rules`: The win predicate and game result
//! - `policy`: Difficulty tiers and opponent discard policies
//! - `schedule`: Deferred task queue on a logical clock
//! - `engine`: `TurnEngine` and `Snapshot`
//! - `error`: `EngineError`

pub mod core;
pub mod tiles;
pub mod rules;
pub mod policy;
pub mod schedule;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GamePhase, GameRng, GameRngState, Player, PlayerId, PlayerMap,
    TableConfig, TurnState,
};

pub use crate::tiles::{
    build_deck, deal, sort_hand, Deal, Dragon, Suit, Tile, TileId, TileKind, TileValue, Wind,
    HAND_SIZE, STANDARD_DECK_SIZE,
};

pub use crate::rules::{is_winning_hand, GameResult, HandShape};

pub use crate::policy::{is_isolated, isolated_tiles, select_opponent_discard, DiscardPolicy, Difficulty};

pub use crate::schedule::{Scheduler, TaskId};

pub use crate::engine::{PlayerSnapshot, Snapshot, TurnEngine, TurnTask};

pub use crate::error::{EngineError, EngineResult};
