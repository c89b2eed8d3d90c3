//! Scripted opponent behavior.
//!
//! - `difficulty`: the three tiers and their parsing
//! - `isolation`: which tiles have no useful neighbor
//! - `discard`: the `DiscardPolicy` trait and one policy per tier

pub mod difficulty;
pub mod isolation;
pub mod discard;

pub use difficulty::Difficulty;
pub use isolation::{is_isolated, isolated_tiles, Candidates, NEIGHBOR_DISTANCE};
pub use discard::{
    select_opponent_discard, DiscardPolicy, FirstIsolatedDiscard, IsolatedRandomDiscard,
    RandomDiscard,
};
