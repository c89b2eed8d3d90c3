//! Tile identity and display ordering.
//!
//! A `Tile` is a physical piece: a `TileKind` (suit + value) plus a unique
//! `TileId`. Four physical tiles share each numbered/wind/dragon kind, so
//! the id is what tells duplicates apart.
//!
//! ## Ordering
//!
//! `TileKind` implements `Ord` as the display order used to keep hands
//! grouped on screen:
//!
//! 1. Suit rank: bamboo < character < dot < wind < dragon < flower
//! 2. Numeric value when both kinds are numbered
//! 3. Otherwise the textual label of the value (`"east" < "north"`)
//!
//! The order has no bearing on game legality.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Tile suit.
///
/// Bamboo, character and dot are the numbered suits (values 1-9).
/// Wind, dragon and flower are honors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Bamboo,
    Character,
    Dot,
    Wind,
    Dragon,
    Flower,
}

impl Suit {
    /// The three numbered suits, in deck enumeration order.
    pub const NUMBERED: [Suit; 3] = [Suit::Bamboo, Suit::Character, Suit::Dot];

    /// Display rank (primary sort key).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Suit::Bamboo => 0,
            Suit::Character => 1,
            Suit::Dot => 2,
            Suit::Wind => 3,
            Suit::Dragon => 4,
            Suit::Flower => 5,
        }
    }

    /// True for bamboo, character and dot.
    #[must_use]
    pub const fn is_numbered(self) -> bool {
        matches!(self, Suit::Bamboo | Suit::Character | Suit::Dot)
    }

    /// Lowercase suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Bamboo => "bamboo",
            Suit::Character => "character",
            Suit::Dot => "dot",
            Suit::Wind => "wind",
            Suit::Dragon => "dragon",
            Suit::Flower => "flower",
        }
    }
}

/// Wind direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wind {
    East,
    South,
    West,
    North,
}

impl Wind {
    /// All winds in deck enumeration order.
    pub const ALL: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Wind::East => "east",
            Wind::South => "south",
            Wind::West => "west",
            Wind::North => "north",
        }
    }
}

/// Dragon color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dragon {
    Red,
    Green,
    White,
}

impl Dragon {
    /// All dragons in deck enumeration order.
    pub const ALL: [Dragon; 3] = [Dragon::Red, Dragon::Green, Dragon::White];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Dragon::Red => "red",
            Dragon::Green => "green",
            Dragon::White => "white",
        }
    }
}

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// The face value of a tile, appropriate to its suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileValue {
    /// 1-9, numbered suits only.
    Number(u8),
    Wind(Wind),
    Dragon(Dragon),
    /// 1-8, one physical tile each.
    Flower(u8),
}

impl TileValue {
    /// Numeric value for numbered tiles, `None` for honors.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            TileValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Textual form of the value, used as the fallback sort key.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TileValue::Number(n) | TileValue::Flower(n) => DIGITS[(n as usize).min(9)],
            TileValue::Wind(w) => w.label(),
            TileValue::Dragon(d) => d.label(),
        }
    }
}

/// Suit + value: what a tile *is*, ignoring which physical copy it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileKind {
    pub suit: Suit,
    pub value: TileValue,
}

impl TileKind {
    /// A numbered tile.
    ///
    /// Panics if `suit` is not numbered or `value` is outside 1-9.
    #[must_use]
    pub fn numbered(suit: Suit, value: u8) -> Self {
        assert!(suit.is_numbered(), "{} is not a numbered suit", suit.name());
        assert!((1..=9).contains(&value), "Numbered tiles run 1-9");
        Self {
            suit,
            value: TileValue::Number(value),
        }
    }

    #[must_use]
    pub const fn wind(wind: Wind) -> Self {
        Self {
            suit: Suit::Wind,
            value: TileValue::Wind(wind),
        }
    }

    #[must_use]
    pub const fn dragon(dragon: Dragon) -> Self {
        Self {
            suit: Suit::Dragon,
            value: TileValue::Dragon(dragon),
        }
    }

    /// A flower tile.
    ///
    /// Panics if `value` is outside 1-8.
    #[must_use]
    pub fn flower(value: u8) -> Self {
        assert!((1..=8).contains(&value), "Flower tiles run 1-8");
        Self {
            suit: Suit::Flower,
            value: TileValue::Flower(value),
        }
    }

    /// Numeric value if this kind belongs to a numbered suit.
    #[must_use]
    pub fn number(&self) -> Option<u8> {
        if self.suit.is_numbered() {
            self.value.number()
        } else {
            None
        }
    }

    /// True for wind, dragon and flower kinds.
    #[must_use]
    pub fn is_honor(&self) -> bool {
        !self.suit.is_numbered()
    }
}

impl Ord for TileKind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.suit
            .rank()
            .cmp(&other.suit.rank())
            .then_with(|| match (self.number(), other.number()) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => self.value.label().cmp(other.value.label()),
            })
    }
}

impl PartialOrd for TileKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            TileValue::Number(n) => write!(f, "{} {}", n, self.suit.name()),
            TileValue::Wind(w) => write!(f, "{} wind", w.label()),
            TileValue::Dragon(d) => write!(f, "{} dragon", d.label()),
            TileValue::Flower(n) => write!(f, "flower {}", n),
        }
    }
}

/// Unique identifier of a physical tile within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A physical tile: kind plus identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub kind: TileKind,
}

impl Tile {
    #[must_use]
    pub const fn new(id: TileId, kind: TileKind) -> Self {
        Self { id, kind }
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.kind.suit
    }

    #[must_use]
    pub const fn value(&self) -> TileValue {
        self.kind.value
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}", self.kind, self.id.0)
    }
}

/// Sort a hand into display order.
///
/// Stable: copies of the same kind keep their relative order.
pub fn sort_hand(hand: &mut [Tile]) {
    hand.sort_by(|a, b| a.kind.cmp(&b.kind));
}
