//! Table configuration.
//!
//! `TableConfig` collects everything the turn engine needs at startup:
//! seating, RNG seed, pacing delays, deck options, and the difficulty used
//! when a new game doesn't name one.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::policy::Difficulty;
use crate::tiles::HAND_SIZE;

/// Table configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of seats (default: 4).
    pub player_count: usize,

    /// Tiles dealt to each seat (default: 13).
    pub hand_size: usize,

    /// Seed for the table RNG. Same seed, same games.
    pub seed: u64,

    /// Delay before a scripted opponent discards after drawing, in ms.
    pub think_delay_ms: u64,

    /// Delay between a discard and the next seat's draw, in ms.
    pub draw_delay_ms: u64,

    /// Human-controlled seat. `None` makes every seat scripted.
    pub human_seat: Option<PlayerId>,

    /// Add the eight single-copy flower tiles to the deck.
    pub include_flowers: bool,

    /// Display names by seat. Missing entries fall back to "Player N".
    pub player_names: Vec<String>,

    /// Difficulty used when `new_game` gets no valid tier.
    pub default_difficulty: Difficulty,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            hand_size: HAND_SIZE,
            seed: 42,
            think_delay_ms: 1000,
            draw_delay_ms: 500,
            human_seat: Some(PlayerId::new(0)),
            include_flowers: false,
            player_names: vec![
                "You".to_string(),
                "Opponent 1".to_string(),
                "Opponent 2".to_string(),
                "Opponent 3".to_string(),
            ],
            default_difficulty: Difficulty::Medium,
        }
    }
}

impl TableConfig {
    /// Set the number of seats.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        assert!((2..=8).contains(&count), "Player count must be 2-8");
        self.player_count = count;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the opponent thinking delay and the post-discard draw delay.
    #[must_use]
    pub fn with_delays(mut self, think_delay_ms: u64, draw_delay_ms: u64) -> Self {
        self.think_delay_ms = think_delay_ms;
        self.draw_delay_ms = draw_delay_ms;
        self
    }

    /// Zero both delays. Timers still go through the scheduler.
    #[must_use]
    pub fn instant(self) -> Self {
        self.with_delays(0, 0)
    }

    /// Choose the human seat, or `None` for an all-scripted table.
    #[must_use]
    pub fn with_human_seat(mut self, seat: Option<PlayerId>) -> Self {
        self.human_seat = seat;
        self
    }

    /// Every seat scripted.
    #[must_use]
    pub fn all_scripted(self) -> Self {
        self.with_human_seat(None)
    }

    /// Include flower tiles in the deck.
    #[must_use]
    pub fn with_flowers(mut self) -> Self {
        self.include_flowers = true;
        self
    }

    /// Set display names by seat.
    #[must_use]
    pub fn with_player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fallback difficulty.
    #[must_use]
    pub fn with_default_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.default_difficulty = difficulty;
        self
    }

    /// Display name for a seat.
    #[must_use]
    pub fn name_for(&self, player: PlayerId) -> String {
        self.player_names
            .get(player.index())
            .cloned()
            .unwrap_or_else(|| player.to_string())
    }

    /// Whether a seat takes external input.
    #[must_use]
    pub fn is_human(&self, player: PlayerId) -> bool {
        self.human_seat == Some(player)
    }
}
