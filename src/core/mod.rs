//! Core table types: players, state, actions, RNG, configuration.
//!
//! These are the building blocks the turn engine composes. Nothing here
//! schedules or decides anything on its own.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::TableConfig;
pub use action::{Action, ActionRecord};
pub use state::{GamePhase, TurnState};
