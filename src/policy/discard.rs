//! Discard policies for scripted opponents.
//!
//! Policies are pure functions of a hand plus an injected `GameRng`; they
//! never touch game state, so they can be tested without a table.

use crate::core::GameRng;
use crate::tiles::Tile;

use super::difficulty::Difficulty;
use super::isolation::isolated_tiles;

/// Chooses which tile a scripted opponent discards.
pub trait DiscardPolicy: Send + Sync {
    /// Pick a tile from `hand`. Returns `None` only for an empty hand.
    fn choose_discard(&self, hand: &[Tile], rng: &mut GameRng) -> Option<Tile>;
}

/// Uniform over the whole hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomDiscard;

impl DiscardPolicy for RandomDiscard {
    fn choose_discard(&self, hand: &[Tile], rng: &mut GameRng) -> Option<Tile> {
        rng.choose(hand).copied()
    }
}

/// Uniform over isolated tiles, falling back to uniform over the hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsolatedRandomDiscard;

impl DiscardPolicy for IsolatedRandomDiscard {
    fn choose_discard(&self, hand: &[Tile], rng: &mut GameRng) -> Option<Tile> {
        let isolated = isolated_tiles(hand);
        if isolated.is_empty() {
            return RandomDiscard.choose_discard(hand, rng);
        }
        rng.choose(&isolated).copied()
    }
}

/// First isolated tile in hand order, falling back to uniform over the hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstIsolatedDiscard;

impl DiscardPolicy for FirstIsolatedDiscard {
    fn choose_discard(&self, hand: &[Tile], rng: &mut GameRng) -> Option<Tile> {
        match isolated_tiles(hand).first() {
            Some(&tile) => Some(tile),
            None => RandomDiscard.choose_discard(hand, rng),
        }
    }
}

impl Difficulty {
    /// The policy that implements this tier.
    #[must_use]
    pub fn policy(self) -> &'static dyn DiscardPolicy {
        match self {
            Difficulty::Easy => &RandomDiscard,
            Difficulty::Medium => &IsolatedRandomDiscard,
            Difficulty::Hard => &FirstIsolatedDiscard,
        }
    }
}

/// Pick an opponent's discard for the given tier.
///
/// ```
/// use mahjong_table::core::GameRng;
/// use mahjong_table::policy::{select_opponent_discard, Difficulty};
///
/// let mut rng = GameRng::new(1);
/// assert_eq!(select_opponent_discard(&[], Difficulty::Hard, &mut rng), None);
/// ```
#[must_use]
pub fn select_opponent_discard(hand: &[Tile], difficulty: Difficulty, rng: &mut GameRng) -> Option<Tile> {
    difficulty.policy().choose_discard(hand, rng)
}
