//! The turn engine and the snapshots it hands to the presentation layer.

pub mod snapshot;
pub mod turn;

pub use snapshot::{PlayerSnapshot, Snapshot};
pub use turn::{TurnEngine, TurnTask};
