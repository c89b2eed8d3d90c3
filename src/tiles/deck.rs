//! Deck construction and dealing.
//!
//! The deck is enumerated in a fixed order (numbered suits, then winds,
//! then dragons, optionally flowers), given sequential ids, and shuffled
//! with the table's `GameRng`. Dealing hands out consecutive runs of the
//! shuffled deck; the remainder becomes the draw pile.

use im::Vector;

use crate::core::GameRng;

use super::tile::{sort_hand, Dragon, Suit, Tile, TileId, TileKind, Wind};

/// Copies of each numbered, wind and dragon kind.
pub const COPIES_PER_KIND: usize = 4;

/// Flower tiles are single copies numbered 1-8.
pub const FLOWER_COUNT: u8 = 8;

/// 3 suits x 9 values x 4 + 4 winds x 4 + 3 dragons x 4.
pub const STANDARD_DECK_SIZE: usize = 136;

/// Tiles dealt to each player.
pub const HAND_SIZE: usize = 13;

/// Tile kinds of the standard deck in enumeration order, one entry per kind.
pub fn standard_kinds() -> impl Iterator<Item = TileKind> {
    let numbered = Suit::NUMBERED
        .into_iter()
        .flat_map(|suit| (1..=9).map(move |n| TileKind::numbered(suit, n)));
    let winds = Wind::ALL.into_iter().map(TileKind::wind);
    let dragons = Dragon::ALL.into_iter().map(TileKind::dragon);

    numbered.chain(winds).chain(dragons)
}

/// Total tiles produced by `build_ordered_deck`.
#[must_use]
pub const fn deck_size(include_flowers: bool) -> usize {
    if include_flowers {
        STANDARD_DECK_SIZE + FLOWER_COUNT as usize
    } else {
        STANDARD_DECK_SIZE
    }
}

/// Build the unshuffled deck.
///
/// Copies of a kind are adjacent; ids run 0.. in enumeration order.
#[must_use]
pub fn build_ordered_deck(include_flowers: bool) -> Vec<Tile> {
    let mut kinds: Vec<TileKind> = standard_kinds()
        .flat_map(|kind| std::iter::repeat(kind).take(COPIES_PER_KIND))
        .collect();

    if include_flowers {
        kinds.extend((1..=FLOWER_COUNT).map(TileKind::flower));
    }

    kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| Tile::new(TileId(i as u16), kind))
        .collect()
}

/// Build and shuffle a fresh deck.
#[must_use]
pub fn build_deck(include_flowers: bool, rng: &mut GameRng) -> Vec<Tile> {
    let mut deck = build_ordered_deck(include_flowers);
    rng.shuffle(&mut deck);
    deck
}

/// Result of dealing a deck.
#[derive(Clone, Debug)]
pub struct Deal {
    /// One sorted hand per player, in seat order.
    pub hands: Vec<Vec<Tile>>,
    /// Undealt tiles; front is drawn next.
    pub draw_pile: Vector<Tile>,
}

/// Deal `hand_size` tiles to each of `player_count` players in deck order.
///
/// If the deck cannot cover every hand, all hands come back empty and the
/// whole deck stays in the draw pile.
#[must_use]
pub fn deal(deck: Vec<Tile>, player_count: usize, hand_size: usize) -> Deal {
    let needed = player_count * hand_size;
    if hand_size == 0 || deck.len() < needed {
        return Deal {
            hands: vec![Vec::new(); player_count],
            draw_pile: deck.into_iter().collect(),
        };
    }

    let mut hands: Vec<Vec<Tile>> = deck[..needed]
        .chunks(hand_size)
        .map(<[Tile]>::to_vec)
        .collect();
    for hand in &mut hands {
        sort_hand(hand);
    }

    Deal {
        hands,
        draw_pile: deck[needed..].iter().copied().collect(),
    }
}
