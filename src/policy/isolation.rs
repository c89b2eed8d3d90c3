//! Isolation test for discard candidates.
//!
//! A numbered tile is isolated when no other tile of its suit sits within
//! two values of it, so it can't help form a run or a set. An honor tile is
//! isolated when no other tile shares its exact kind.
//!
//! "Other" means another physical tile: a second copy of the same kind is
//! a neighbor.

use smallvec::SmallVec;

use crate::tiles::Tile;

/// Largest value gap that still counts as a neighbor.
pub const NEIGHBOR_DISTANCE: u8 = 2;

/// Isolated tiles of a hand, in hand order. A 14-tile hand never spills.
pub type Candidates = SmallVec<[Tile; 14]>;

/// Whether `tile` has no useful neighbor in `hand`.
#[must_use]
pub fn is_isolated(tile: &Tile, hand: &[Tile]) -> bool {
    let mut others = hand
        .iter()
        .filter(|other| other.id != tile.id && other.suit() == tile.suit());

    match tile.kind.number() {
        Some(value) => !others.any(|other| {
            other
                .kind
                .number()
                .is_some_and(|n| n.abs_diff(value) <= NEIGHBOR_DISTANCE)
        }),
        None => !others.any(|other| other.value() == tile.value()),
    }
}

/// All isolated tiles of `hand`, preserving hand order.
#[must_use]
pub fn isolated_tiles(hand: &[Tile]) -> Candidates {
    hand.iter()
        .filter(|tile| is_isolated(tile, hand))
        .copied()
        .collect()
}
