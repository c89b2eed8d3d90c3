//! Tiles, the deck, and dealing.
//!
//! - `tile`: suits, values, physical tiles, display ordering
//! - `deck`: deck enumeration, shuffling, dealing into hands + draw pile

pub mod tile;
pub mod deck;

pub use tile::{sort_hand, Dragon, Suit, Tile, TileId, TileKind, TileValue, Wind};
pub use deck::{
    build_deck, build_ordered_deck, deal, deck_size, standard_kinds, Deal, COPIES_PER_KIND,
    FLOWER_COUNT, HAND_SIZE, STANDARD_DECK_SIZE,
};
