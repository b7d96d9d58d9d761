//! Full-round scenarios driven through the public intent surface.

use mexico_engine::{
    loser_penalty, DiceRoll, DieSlot, GameEngine, NavigationTarget, Phase, Score, ScriptedDice,
    MEXICO_POT_BONUS,
};

/// Engine in the `Rolling` phase with players P0..Pn seeded in registration
/// order, with `faces` queued for the round's throws.
fn rolling_engine(players: usize, faces: &[u8]) -> GameEngine<ScriptedDice> {
    let mut script: Vec<u8> = (0..players).map(|i| 6 - i as u8).collect();
    script.extend_from_slice(faces);

    let mut engine = GameEngine::with_dice(ScriptedDice::new(script));
    for i in 0..players {
        engine.add_player(&format!("P{i}"));
    }
    engine.start_initial_roll();
    for _ in 0..players {
        engine.perform_initial_roll();
        engine.next_initial_roll();
    }
    assert_eq!(engine.state().phase, Phase::Rolling);
    engine
}

#[test]
fn two_player_round_from_setup_to_result() {
    // Seeds 5 and 3, then A throws 6-4 and B throws 5-3.
    let mut engine = GameEngine::with_dice(ScriptedDice::new([5, 3, 6, 4, 5, 3]));

    let a = engine.add_player("Anna").unwrap();
    let b = engine.add_player("Bob").unwrap();
    engine.start_initial_roll();
    assert_eq!(engine.take_navigation(), Some(NavigationTarget::InitialRoll));

    engine.perform_initial_roll();
    engine.next_initial_roll();
    engine.perform_initial_roll();
    engine.next_initial_roll();
    assert_eq!(engine.take_navigation(), Some(NavigationTarget::Game));
    assert_eq!(engine.state().phase, Phase::Rolling);
    assert_eq!(engine.state().players[0].id, a); // 5 beats 3

    engine.roll_dice();
    engine.confirm_score();
    assert_eq!(engine.state().max_throws, 1); // leader stopped after one throw

    engine.roll_dice();
    engine.confirm_score();

    assert_eq!(engine.state().phase, Phase::RoundEnd);
    assert_eq!(engine.take_navigation(), Some(NavigationTarget::Result));

    let losers = engine.state().lowest_score_players();
    assert_eq!(losers.len(), 1);
    assert_eq!(losers[0].id, b);
    assert_eq!(losers[0].score, Some(Score::Normal(53)));
    assert_eq!(loser_penalty(engine.state().pot, false), "0 slokken uit de pot");
}

#[test]
fn leader_throw_count_caps_the_round() {
    // P0 uses two throws and stops; P1 and P2 get at most two.
    let mut engine = rolling_engine(3, &[6, 4, 6, 5, 5, 4, 4, 2, 5, 2, 6, 2]);

    engine.roll_dice(); // 6-4
    engine.roll_dice(); // 6-5
    engine.confirm_score();
    assert_eq!(engine.state().max_throws, 2);

    engine.roll_dice(); // P1: 5-4
    engine.roll_dice(); // P1: 4-2
    engine.roll_dice(); // rejected
    assert_eq!(engine.state().current_player().unwrap().throws_used, 2);
    assert_eq!(
        engine.state().current_player().unwrap().current_dice,
        Some(DiceRoll::new(4, 2))
    );
    engine.confirm_score();

    engine.roll_dice(); // P2: 5-2
    engine.roll_dice(); // P2: 6-2
    engine.roll_dice(); // rejected
    assert_eq!(engine.state().current_player().unwrap().throws_used, 2);
    engine.confirm_score();

    assert_eq!(engine.state().phase, Phase::RoundEnd);
}

#[test]
fn mexico_burns_hundreds_and_grows_pot() {
    let mut engine = rolling_engine(3, &[5, 5, 6, 4, 1, 2]);

    engine.roll_dice(); // P0: 5-5
    engine.confirm_score();
    assert_eq!(engine.state().pot, 5);

    engine.roll_dice(); // P1: 6-4
    engine.confirm_score();

    engine.roll_dice(); // P2: Mexico
    assert!(engine.signals().mexico_popup);
    engine.dismiss_mexico_popup();

    let state = engine.state();
    assert_eq!(state.pot, 5 + MEXICO_POT_BONUS);
    assert!(state.mexico_mode);
    assert!(state.players[0].score.is_none()); // Hundred revoked
    assert_eq!(state.players[1].score, Some(Score::Normal(64)));
    assert_eq!(state.players[2].score, Some(Score::Mexico));

    // P0 lost their score entirely, so only P1 can be the loser
    assert_eq!(state.phase, Phase::RoundEnd);
    let losers = state.lowest_score_players();
    assert_eq!(losers.len(), 1);
    assert_eq!(losers[0].name, "P1");
}

#[test]
fn locked_die_path_to_mexico() {
    // Throw 2-6, lock the 2, re-roll into a 1: Mexico.
    let mut engine = rolling_engine(2, &[2, 6, 1]);

    engine.roll_dice();
    engine.lock_die(2, DieSlot::First);
    engine.roll_dice();

    assert!(engine.signals().mexico_popup);
    assert_eq!(
        engine.state().current_player().unwrap().current_dice,
        Some(DiceRoll::new(2, 1))
    );
}

#[test]
fn pointing_gives_the_throw_back() {
    let mut engine = rolling_engine(2, &[6, 2, 1, 3, 6, 5, 4, 3]);

    engine.roll_dice(); // 6-2
    engine.roll_dice(); // 1-3, void
    assert!(engine.signals().pointing_popup);
    engine.dismiss_pointing_popup();
    assert_eq!(engine.state().current_player().unwrap().throws_used, 1);

    engine.roll_dice(); // 6-5, back to two throws used
    engine.roll_dice(); // 4-3, third and last
    assert_eq!(engine.state().current_player().unwrap().throws_used, 3);
    engine.roll_dice(); // rejected
    assert_eq!(engine.state().current_player().unwrap().throws_used, 3);
}

#[test]
fn duim_is_informational_only() {
    let mut engine = rolling_engine(2, &[5, 4, 4, 5, 6, 1]);

    engine.roll_dice(); // 5-4
    engine.roll_dice(); // 4-5: Duim
    assert!(engine.signals().duim_popup);

    let before = engine.state().pot;
    engine.dismiss_duim_popup();

    let player = engine.state().current_player().unwrap();
    assert_eq!(player.throws_used, 2);
    assert_eq!(player.current_dice, Some(DiceRoll::new(4, 5)));
    assert_eq!(engine.state().pot, before);

    engine.roll_dice(); // 6-1: third throw still available
    assert_eq!(engine.state().current_player().unwrap().throws_used, 3);
}

#[test]
fn snapshots_are_independent_of_later_intents() {
    let mut engine = rolling_engine(2, &[6, 4, 5, 3]);

    let before = engine.snapshot();
    engine.roll_dice();
    engine.confirm_score();

    assert!(before.players[0].score.is_none());
    assert!(engine.state().players[0].score.is_some());
}

#[test]
fn snapshot_survives_serde_round_trip() {
    let mut engine = rolling_engine(2, &[4, 4]);
    engine.roll_dice();

    let snapshot = engine.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: mexico_engine::GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(snapshot, back);
}

#[test]
fn seeded_engines_replay_identically() {
    let run = |seed: u64| {
        let mut engine = GameEngine::new(seed);
        engine.add_player("A");
        engine.add_player("B");
        engine.start_initial_roll();
        for _ in 0..2 {
            engine.perform_initial_roll();
            engine.next_initial_roll();
        }
        while engine.state().phase == Phase::Rolling {
            if engine.signals().pointing_popup {
                engine.dismiss_pointing_popup();
            } else if engine.signals().mexico_popup {
                engine.dismiss_mexico_popup();
            } else if engine.signals().sand_popup {
                engine.dismiss_sand_popup();
            } else if engine.signals().duim_popup {
                engine.dismiss_duim_popup();
            } else if engine
                .state()
                .current_player()
                .is_some_and(|p| p.current_dice.is_some())
            {
                engine.confirm_score();
            } else {
                engine.roll_dice();
            }
        }
        engine.snapshot()
    };

    assert_eq!(run(42), run(42));
}
