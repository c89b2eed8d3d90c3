//! The turn engine.
//!
//! `TurnEngine` owns one table: the seats, the draw pile, turn state, the
//! pacing scheduler and the RNG. A presentation layer drives it with three
//! kinds of event:
//!
//! - `new_game`: deal a fresh game (tears down the previous one)
//! - `discard` / `select_tile`: input from the human seat
//! - `advance`: elapsed time, which fires pending draws and opponent turns
//!
//! Each call runs to completion and returns a `Snapshot`.
//!
//! ## Turn flow
//!
//! ```text
//! new_game ──► [draw_delay] ──► draw(seat 0)
//!                                  │
//!            win? ──► Finished     │ human: wait for discard()
//!                                  │ scripted: [think_delay] ──► policy discard
//!                                  ▼
//!                     discard ──► [draw_delay] ──► draw(next seat) ──► ...
//! ```
//!
//! An empty draw pile at draw time finishes the game as a draw.
//!
//! ## Example
//!
//! ```
//! use mahjong_table::{GamePhase, TableConfig, TurnEngine};
//!
//! let mut engine = TurnEngine::new(TableConfig::default().all_scripted().instant());
//! let dealt = engine.new_game(Some("hard"));
//! assert_eq!(dealt.draw_pile_remaining, 84);
//!
//! let end = engine.run_until_idle(10_000);
//! assert_eq!(end.phase, GamePhase::Finished);
//! ```

use im::Vector;

use crate::core::{Action, GamePhase, GameRng, Player, PlayerId, PlayerMap, TableConfig, TurnState};
use crate::error::{EngineError, EngineResult};
use crate::policy::{select_opponent_discard, Difficulty};
use crate::rules::{is_winning_hand, GameResult};
use crate::schedule::{Scheduler, TaskId};
use crate::tiles::{build_deck, deal, Tile, TileId};

use super::snapshot::{PlayerSnapshot, Snapshot};

/// Deferred turn steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnTask {
    /// Draw for a seat (after a discard, or the opening draw).
    Draw(PlayerId),
    /// A scripted seat picks and makes its discard.
    OpponentDiscard(PlayerId),
}

/// Turn engine for one table.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    config: TableConfig,
    difficulty: Difficulty,
    players: PlayerMap<Player>,
    draw_pile: Vector<Tile>,
    deck_size: usize,
    turn: TurnState,
    scheduler: Scheduler<TurnTask>,
    /// The single outstanding turn timer, if any.
    pending: Option<TaskId>,
    /// Table RNG; each game forks from it.
    rng: GameRng,
    /// Opponent stream of the current game.
    opponent_rng: GameRng,
    games_dealt: u32,
}

impl TurnEngine {
    /// Create an engine in the setup phase. No tiles exist until `new_game`.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        let rng = GameRng::new(config.seed);
        let opponent_rng = rng.for_context("opponents");
        let players = Self::seat_players(&config);

        Self {
            difficulty: config.default_difficulty,
            players,
            draw_pile: Vector::new(),
            deck_size: 0,
            turn: TurnState::default(),
            scheduler: Scheduler::new(),
            pending: None,
            rng,
            opponent_rng,
            games_dealt: 0,
            config,
        }
    }

    fn seat_players(config: &TableConfig) -> PlayerMap<Player> {
        PlayerMap::new(config.player_count, |id| {
            Player::new(id, config.name_for(id), config.is_human(id))
        })
    }

    // === Lifecycle ===

    /// Deal a new game, discarding any game in progress.
    ///
    /// `difficulty` is a tier name; absent or unrecognised names fall back
    /// to the configured default (medium unless changed).
    pub fn new_game(&mut self, difficulty: Option<&str>) -> Snapshot {
        let difficulty = Difficulty::from_name_or(difficulty, self.config.default_difficulty);
        self.new_game_with(difficulty)
    }

    /// Deal a new game at a known difficulty.
    pub fn new_game_with(&mut self, difficulty: Difficulty) -> Snapshot {
        self.scheduler.cancel_all();
        self.pending = None;

        let game_rng = self.rng.fork();
        let mut deck_rng = game_rng.for_context("deck");
        self.opponent_rng = game_rng.for_context("opponents");

        let deck = build_deck(self.config.include_flowers, &mut deck_rng);
        self.deck_size = deck.len();
        let dealt = deal(deck, self.config.player_count, self.config.hand_size);

        self.players = Self::seat_players(&self.config);
        for (seat, hand) in dealt.hands.into_iter().enumerate() {
            self.players[PlayerId::new(seat as u8)].set_hand(hand);
        }
        self.draw_pile = dealt.draw_pile;
        self.difficulty = difficulty;
        self.turn = TurnState::dealt();
        self.games_dealt += 1;

        self.schedule_turn(self.config.draw_delay_ms, TurnTask::Draw(PlayerId::new(0)));
        self.snapshot()
    }

    // === Player input ===

    /// Draw the front tile of the pile for a seat.
    ///
    /// Finishes the game as a draw if the pile is empty, or with a winner if
    /// the resulting hand wins. No-op once the game is finished, for a seat
    /// whose turn it isn't, or for a seat that has already drawn this turn.
    pub fn draw(&mut self, player_index: usize) -> EngineResult<Snapshot> {
        let player = self.check_player(player_index)?;
        self.draw_for(player);
        Ok(self.snapshot())
    }

    /// Discard a tile from a seat's hand and pass the turn on.
    ///
    /// Changes nothing if the tile id isn't in the hand, if it isn't the
    /// seat's turn, or if the seat hasn't drawn yet this turn.
    pub fn discard(&mut self, player_index: usize, tile_id: TileId) -> EngineResult<Snapshot> {
        let player = self.check_player(player_index)?;
        self.discard_for(player, tile_id);
        Ok(self.snapshot())
    }

    /// Toggle the highlighted tile of a seat's hand.
    ///
    /// Selecting the selected tile clears it; unknown tiles are ignored.
    pub fn select_tile(&mut self, player_index: usize, tile_id: TileId) -> EngineResult<Snapshot> {
        let player = self.check_player(player_index)?;
        if self.turn.is_playing() && self.players[player].has_tile(tile_id) {
            self.turn.selected = if self.turn.selected == Some(tile_id) {
                None
            } else {
                Some(tile_id)
            };
        }
        Ok(self.snapshot())
    }

    // === Time ===

    /// Let `elapsed_ms` of logical time pass, firing every timer that falls due.
    ///
    /// Timers scheduled while firing also run if they fall inside the window.
    pub fn advance(&mut self, elapsed_ms: u64) -> Snapshot {
        let until = self.scheduler.now().saturating_add(elapsed_ms);
        while let Some(scheduled) = self.scheduler.pop_due(until) {
            self.fire(scheduled.id, scheduled.task);
        }
        self.scheduler.advance_to(until);
        self.snapshot()
    }

    /// Fire pending timers one at a time, jumping the clock to each deadline,
    /// until none remain or `max_steps` have fired.
    ///
    /// Stops early when the human seat is waiting to discard, since nothing
    /// is scheduled then.
    pub fn run_until_idle(&mut self, max_steps: usize) -> Snapshot {
        for _ in 0..max_steps {
            let Some(due) = self.scheduler.next_due() else {
                break;
            };
            if let Some(scheduled) = self.scheduler.pop_due(due) {
                self.fire(scheduled.id, scheduled.task);
            }
        }
        self.snapshot()
    }

    // === Queries ===

    /// Current state for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.turn.phase,
            difficulty: self.difficulty,
            players: self.players.values().map(PlayerSnapshot::from).collect(),
            draw_pile_remaining: self.draw_pile.len(),
            current_player: self.turn.current_player,
            turn_number: self.turn.turn_number,
            winner: self.turn.winner,
            result: self.turn.result,
            last_drawn: self.turn.last_drawn,
            selected_tile: self.turn.selected,
            history: self.turn.history.clone(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.turn.phase
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Seat state.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not a seat at this table.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn draw_pile_remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Size of the deck the current game was dealt from (0 before the first deal).
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    /// Logical time in ms.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    /// Turn timers waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    /// Games dealt since the engine was created.
    #[must_use]
    pub fn games_dealt(&self) -> u32 {
        self.games_dealt
    }

    // === Internals ===

    fn check_player(&self, index: usize) -> EngineResult<PlayerId> {
        if self.turn.phase == GamePhase::Setup {
            return Err(EngineError::NotStarted);
        }
        let player_count = self.players.player_count();
        if index >= player_count {
            return Err(EngineError::PlayerOutOfRange { index, player_count });
        }
        Ok(PlayerId::new(index as u8))
    }

    fn fire(&mut self, id: TaskId, task: TurnTask) {
        if self.pending == Some(id) {
            self.pending = None;
        }
        if !self.turn.is_playing() {
            return;
        }

        match task {
            TurnTask::Draw(player) => self.draw_for(player),
            TurnTask::OpponentDiscard(player) => {
                if !self.awaits_discard(player) {
                    return;
                }
                let hand = self.players[player].hand();
                if let Some(tile) = select_opponent_discard(hand, self.difficulty, &mut self.opponent_rng) {
                    self.discard_for(player, tile.id);
                }
            }
        }
    }

    /// Seat `player` may take its draw: its turn, nothing drawn yet.
    fn awaits_draw(&self, player: PlayerId) -> bool {
        self.turn.is_playing()
            && self.turn.current_player == player
            && self.turn.last_drawn.is_none()
    }

    /// Seat `player` holds its drawn tile and owes a discard.
    fn awaits_discard(&self, player: PlayerId) -> bool {
        self.turn.is_playing()
            && self.turn.current_player == player
            && self.turn.last_drawn.is_some()
    }

    fn draw_for(&mut self, player: PlayerId) {
        if !self.awaits_draw(player) {
            return;
        }

        let Some(tile) = self.draw_pile.pop_front() else {
            self.finish(GameResult::Draw);
            return;
        };

        self.players[player].receive(tile);
        self.turn.last_drawn = Some(tile);
        self.turn.record_action(player, Action::Draw { tile });

        if is_winning_hand(self.players[player].hand()) {
            self.finish(GameResult::Winner(player));
            return;
        }

        if !self.players[player].is_human {
            self.schedule_turn(self.config.think_delay_ms, TurnTask::OpponentDiscard(player));
        }
    }

    /// Returns false when the discard isn't allowed (nothing changes).
    fn discard_for(&mut self, player: PlayerId, tile_id: TileId) -> bool {
        if !self.awaits_discard(player) {
            return false;
        }
        let Some(tile) = self.players[player].discard(tile_id) else {
            return false;
        };

        self.turn.clear_transient();
        self.turn.record_action(player, Action::Discard { tile });

        let next = player.next(self.players.player_count());
        self.turn.advance_to(next);
        self.schedule_turn(self.config.draw_delay_ms, TurnTask::Draw(next));
        true
    }

    /// Schedule the next turn step, replacing any outstanding one.
    fn schedule_turn(&mut self, delay_ms: u64, task: TurnTask) {
        if let Some(previous) = self.pending.take() {
            self.scheduler.cancel(previous);
        }
        self.pending = Some(self.scheduler.schedule(delay_ms, task));
    }

    fn finish(&mut self, result: GameResult) {
        self.turn.finish(result);
        self.scheduler.cancel_all();
        self.pending = None;
    }
}
