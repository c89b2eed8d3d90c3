//! Simplified win condition.
//!
//! Tiles are grouped by kind (suit + value). A hand wins when it holds
//! at least three kinds with three or more copies, or at least five kinds
//! with two or more copies.
//!
//! Runs are never credited, and the five-pair route is not a real Mahjong
//! hand. Both are intentional and must stay as they are; changing either
//! changes which games end and when.

use rustc_hash::FxHashMap;

use crate::tiles::{Tile, TileKind};

/// Triplet-or-better kinds needed to win.
pub const TRIPLETS_TO_WIN: usize = 3;

/// Pair-or-better kinds needed to win.
pub const PAIRS_TO_WIN: usize = 5;

/// Group counts of a hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandShape {
    /// Kinds with count >= 2 (triplets count here too).
    pub pairs: usize,
    /// Kinds with count >= 3.
    pub triplets: usize,
}

impl HandShape {
    /// Count groups in a hand.
    #[must_use]
    pub fn of(hand: &[Tile]) -> Self {
        let mut counts: FxHashMap<TileKind, u8> = FxHashMap::default();
        for tile in hand {
            *counts.entry(tile.kind).or_default() += 1;
        }

        counts.values().fold(Self::default(), |mut shape, &count| {
            if count >= 2 {
                shape.pairs += 1;
            }
            if count >= 3 {
                shape.triplets += 1;
            }
            shape
        })
    }

    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.triplets >= TRIPLETS_TO_WIN || self.pairs >= PAIRS_TO_WIN
    }
}

/// Whether `hand` satisfies the win condition.
#[must_use]
pub fn is_winning_hand(hand: &[Tile]) -> bool {
    HandShape::of(hand).is_winning()
}
