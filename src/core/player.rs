//! Player identification and per-seat data.
//!
//! ## PlayerId
//!
//! Seat index, 0-based. Seat 0 is dealt first and draws first.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Identity plus the two tile collections a seat owns: the sorted hand and
//! the append-only discard history.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::tiles::{sort_hand, Tile, TileId};

/// Seat identifier. Defaults to seat 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a table of `player_count` players.
    ///
    /// ```
    /// use mahjong_table::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat storage with O(1) access.
///
/// ```
/// use mahjong_table::core::{PlayerId, PlayerMap};
///
/// let mut points: PlayerMap<u32> = PlayerMap::new(4, |_| 0);
/// points[PlayerId::new(2)] += 8;
/// assert_eq!(points[PlayerId::new(2)], 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one entry per seat from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Human-controlled seats discard via external input; the rest are scripted.
    pub is_human: bool,
    hand: Vec<Tile>,
    discards: Vector<Tile>,
}

impl Player {
    /// Create a seat with an empty hand.
    pub fn new(id: PlayerId, name: impl Into<String>, is_human: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_human,
            hand: Vec::new(),
            discards: Vector::new(),
        }
    }

    /// Replace the hand wholesale (used by dealing). Sorts it.
    pub fn set_hand(&mut self, mut hand: Vec<Tile>) {
        sort_hand(&mut hand);
        self.hand = hand;
    }

    /// Sorted hand.
    #[must_use]
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    /// Discards, oldest first.
    #[must_use]
    pub fn discards(&self) -> &Vector<Tile> {
        &self.discards
    }

    #[must_use]
    pub fn has_tile(&self, tile_id: TileId) -> bool {
        self.hand.iter().any(|t| t.id == tile_id)
    }

    /// Add a drawn tile and restore display order.
    pub fn receive(&mut self, tile: Tile) {
        self.hand.push(tile);
        sort_hand(&mut self.hand);
    }

    /// Move the first tile with `tile_id` from hand to discards.
    ///
    /// Returns `None` (and changes nothing) if the tile isn't in hand.
    pub fn discard(&mut self, tile_id: TileId) -> Option<Tile> {
        let pos = self.hand.iter().position(|t| t.id == tile_id)?;
        let tile = self.hand.remove(pos);
        self.discards.push_back(tile);
        Some(tile)
    }

    /// Tiles this seat holds across hand and discards.
    #[must_use]
    pub fn tiles_held(&self) -> usize {
        self.hand.len() + self.discards.len()
    }
}
