//! End-to-end table scenarios through the public `TurnEngine` API.
//!
//! These drive the engine the way a presentation layer would: deal, feed
//! human discards, let time pass, and read snapshots.

use mahjong_table::{
    Difficulty, EngineError, GamePhase, GameResult, PlayerId, Snapshot, TableConfig, TurnEngine,
};

/// Snapshot-level invariants that hold between any two engine calls.
fn assert_table_invariants(snapshot: &Snapshot, deck_size: usize) {
    assert_eq!(snapshot.tiles_accounted(), deck_size);

    for player in &snapshot.players {
        let held = player.hand.len();
        if player.id == snapshot.current_player {
            assert!(held == 13 || held == 14, "{} holds {held}", player.name);
        } else {
            assert_eq!(held, 13, "{} holds {held} out of turn", player.name);
        }
        assert!(player.hand.windows(2).all(|w| w[0].kind <= w[1].kind));
    }

    let draws = snapshot.history.iter().filter(|r| r.action.is_draw()).count();
    let discards = snapshot.history.len() - draws;
    assert!(draws == discards || draws == discards + 1);
}

/// Play one game with the human discarding whatever they just drew.
fn play_draw_and_throw(engine: &mut TurnEngine) -> Snapshot {
    let human = PlayerId::new(0);
    let mut snapshot = engine.advance(1000);

    for _ in 0..1000 {
        if snapshot.is_finished() {
            break;
        }
        if snapshot.current_player == human && snapshot.player(human).hand.len() == 14 {
            let tile = snapshot.last_drawn.expect("human just drew");
            snapshot = engine.discard(0, tile.id).unwrap();
        } else {
            snapshot = engine.advance(1000);
        }
        assert_table_invariants(&snapshot, 136);
    }
    snapshot
}

/// Send every kind of input the table must refuse right now and check that
/// none of it lands.
fn assert_refuses_stray_input(engine: &mut TurnEngine) {
    let before = engine.snapshot();
    let pending = engine.pending_timers();
    let current = before.current_player;

    for player in &before.players {
        if player.id == current {
            continue;
        }
        let seat = player.id.index();
        assert_eq!(engine.discard(seat, player.hand[0].id).unwrap(), before);
        assert_eq!(engine.draw(seat).unwrap(), before);
    }

    let holder = before.player(current);
    if holder.hand.len() == 14 {
        // Already drew this turn
        assert_eq!(engine.draw(current.index()).unwrap(), before);
    } else if let Some(tile) = holder.hand.first() {
        // Hasn't drawn yet
        assert_eq!(engine.discard(current.index(), tile.id).unwrap(), before);
    }

    assert_eq!(engine.pending_timers(), pending);
    assert_table_invariants(&engine.snapshot(), 136);
}

#[test]
fn test_stray_input_during_delays_is_ignored() {
    let config = TableConfig::default().with_seed(11).with_delays(1000, 500);
    let mut engine = TurnEngine::new(config);
    engine.new_game(Some("medium"));

    let human = PlayerId::new(0);
    let mut snapshot = engine.snapshot();
    for _ in 0..5000 {
        if snapshot.is_finished() {
            break;
        }
        assert_refuses_stray_input(&mut engine);

        let human_to_discard =
            snapshot.current_player == human && snapshot.player(human).hand.len() == 14;
        if human_to_discard {
            assert_eq!(engine.pending_timers(), 0);
            let tile = snapshot.last_drawn.expect("human just drew");
            snapshot = engine.discard(0, tile.id).unwrap();
        } else {
            // Either a draw or a scripted discard is waiting
            assert_eq!(engine.pending_timers(), 1);
            snapshot = engine.advance(250);
        }
        assert_table_invariants(&snapshot, 136);
    }

    assert!(snapshot.is_finished());
    assert_eq!(engine.pending_timers(), 0);
}

#[test]
fn test_hard_game_opening_state() {
    let mut engine = TurnEngine::new(TableConfig::default());
    let snapshot = engine.new_game(Some("hard"));

    assert_eq!(snapshot.players.len(), 4);
    assert_eq!(snapshot.phase.name(), "playing");
    assert_eq!(snapshot.difficulty, Difficulty::Hard);
    assert_eq!(snapshot.current_player, PlayerId::new(0));
    assert_eq!(snapshot.draw_pile_remaining, 136 - 52);
    assert_eq!(snapshot.winner, None);

    for player in &snapshot.players {
        assert_eq!(player.hand.len(), 13);
        assert!(player.hand.windows(2).all(|w| w[0].kind <= w[1].kind));
        assert!(player.discards.is_empty());
    }

    let names: Vec<_> = snapshot.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["You", "Opponent 1", "Opponent 2", "Opponent 3"]);
}

#[test]
fn test_human_plays_full_game() {
    let mut engine = TurnEngine::new(TableConfig::default().with_seed(7));
    engine.new_game(Some("medium"));

    let end = play_draw_and_throw(&mut engine);
    assert_eq!(end.phase, GamePhase::Finished);
    assert_eq!(engine.pending_timers(), 0);

    match end.result {
        Some(GameResult::Winner(player)) => {
            assert_eq!(end.winner, Some(player));
            assert_eq!(end.current_player, player);
            assert_eq!(end.player(player).hand.len(), 14);
        }
        Some(GameResult::Draw) => {
            assert_eq!(end.winner, None);
            assert_eq!(end.draw_pile_remaining, 0);
        }
        None => panic!("finished without a result"),
    }
}

#[test]
fn test_exhausted_pile_ends_in_draw_and_stays_put() {
    // Draw-and-throw can still win on a lucky draw; find a seed that runs dry
    let ended_dry = (0..200u64).find_map(|seed| {
        let mut engine = TurnEngine::new(TableConfig::default().with_seed(seed));
        engine.new_game(None);
        let end = play_draw_and_throw(&mut engine);
        (end.result == Some(GameResult::Draw)).then_some((engine, end))
    });
    let (mut engine, end) = ended_dry.expect("some seed exhausts the pile");

    assert_eq!(end.phase, GamePhase::Finished);
    assert_eq!(end.winner, None);
    assert_eq!(end.draw_pile_remaining, 0);

    for _ in 0..3 {
        assert_eq!(engine.draw(0).unwrap(), end);
        assert_eq!(engine.draw(2).unwrap(), end);
    }
    assert_eq!(engine.advance(60_000), end);
}

#[test]
fn test_scripted_table_finishes() {
    for difficulty in Difficulty::ALL {
        let mut engine = TurnEngine::new(TableConfig::default().all_scripted().instant());
        engine.new_game_with(difficulty);

        let end = engine.run_until_idle(10_000);
        assert!(end.is_finished(), "{difficulty} game never finished");
        assert_eq!(end.tiles_accounted(), 136);
        assert!(end.players.iter().all(|p| !p.is_human));
    }
}

#[test]
fn test_human_seat_waits_for_input() {
    let mut engine = TurnEngine::new(TableConfig::default().instant());
    engine.new_game(None);

    let waiting = engine.advance(0);
    if waiting.phase == GamePhase::Playing {
        // Nothing more happens until the human discards
        assert_eq!(engine.pending_timers(), 0);
        assert_eq!(engine.run_until_idle(100), waiting);
        assert_eq!(engine.advance(1_000_000), waiting);
    }
}

#[test]
fn test_new_game_mid_game_starts_over() {
    let mut engine = TurnEngine::new(TableConfig::default().instant());
    engine.new_game(Some("easy"));
    let first = play_draw_and_throw(&mut engine);
    assert!(first.is_finished());

    let fresh = engine.new_game(Some("hard"));
    assert_eq!(fresh.phase, GamePhase::Playing);
    assert_eq!(fresh.difficulty, Difficulty::Hard);
    assert_eq!(fresh.turn_number, 1);
    assert!(fresh.history.is_empty());
    assert!(fresh.players.iter().all(|p| p.discards.is_empty()));
    assert_eq!(fresh.draw_pile_remaining, 84);
}

#[test]
fn test_two_player_table() {
    let config = TableConfig::default()
        .with_player_count(2)
        .with_player_names(["Host", "Guest"])
        .all_scripted()
        .instant();
    let mut engine = TurnEngine::new(config);

    let dealt = engine.new_game(None);
    assert_eq!(dealt.players.len(), 2);
    assert_eq!(dealt.draw_pile_remaining, 136 - 26);
    assert_eq!(dealt.players[1].name, "Guest");

    let end = engine.run_until_idle(10_000);
    assert!(end.is_finished());
    assert_eq!(end.tiles_accounted(), 136);
    assert!(end
        .history
        .iter()
        .all(|record| record.player.index() < 2));
}

#[test]
fn test_contract_violations() {
    let mut engine = TurnEngine::new(TableConfig::default());
    assert_eq!(engine.draw(0), Err(EngineError::NotStarted));

    engine.new_game(None);
    let err = engine.discard(7, mahjong_table::TileId(0)).unwrap_err();
    assert_eq!(err, EngineError::PlayerOutOfRange { index: 7, player_count: 4 });
    assert_eq!(err.to_string(), "Player index 7 out of range for 4 players");
}

#[test]
fn test_snapshot_json_shape() {
    let mut engine = TurnEngine::new(TableConfig::default().instant());
    engine.new_game(Some("hard"));
    let snapshot = engine.advance(0);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["phase"], "playing");
    assert_eq!(json["difficulty"], "hard");
    assert_eq!(json["players"].as_array().unwrap().len(), 4);
    assert_eq!(json["history"][0]["action"]["type"], "draw");

    let back: Snapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, snapshot);
}
