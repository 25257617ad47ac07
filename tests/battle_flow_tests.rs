//! End-to-end battle flow tests.
//!
//! These drive `BattleEngine` through whole rounds:
//! - Chained plays growing an accumulator
//! - Defeating an enemy mid-game and on the final stage
//! - Deterministic replay from a seed

use card_battle::battle::BattleEngine;
use card_battle::cards::{Card, Rank, Suit};
use card_battle::core::{Action, BattleConfig, GameState, GameStatus};
use card_battle::enemies::{EnemyRoster, EnemyTemplate};
use card_battle::rules::RulesEngine;
use card_battle::zones::{Field, FieldSlot};
use im::Vector;

fn card(suit: Suit, value: u8) -> Card {
    Card::new(suit, Rank::from_value(value).unwrap())
}

/// A round where 6, 7, 8, 9, 10 and J can all be chained onto a left-hand 5.
fn chain_state(engine: &mut BattleEngine) -> GameState {
    let base = engine.new_game();
    let mut state = GameState {
        field: Field::new(Some(card(Suit::Hearts, 5)), Some(card(Suit::Spades, 1))),
        hand: (6..=10).map(|v| card(Suit::Clubs, v)).collect(),
        deck: Vector::from(vec![
            card(Suit::Diamonds, 11),
            card(Suit::Diamonds, 12),
            card(Suit::Diamonds, 3),
        ]),
        ..base
    };
    state.enemy.hp = 5;
    state.enemy.current_attack = 4;
    state.enemy.current_shield = 1;
    state
}

fn play_chain(engine: &mut BattleEngine, mut state: GameState) -> GameState {
    for value in 6..=10 {
        state = engine.play_card(&state, card(Suit::Clubs, value).id(), FieldSlot::Left);
    }
    engine.play_card(&state, card(Suit::Diamonds, 11).id(), FieldSlot::Left)
}

/// Six chained plays onto the attack slot, then a lethal round.
#[test]
fn test_chained_plays_defeat_enemy() {
    let mut engine = BattleEngine::with_seed(BattleConfig::default(), 7).unwrap();
    let state = chain_state(&mut engine);

    let state = play_chain(&mut engine, state);
    assert_eq!(state.player.attack, 6);
    assert_eq!(state.player.shield, 0);
    assert_eq!(state.field.left, Some(card(Suit::Diamonds, 11)));
    assert_eq!(state.status, GameStatus::Playing);

    // Hand refilled from the deck until it ran out, then shrank
    assert_eq!(state.hand.len(), 2);
    assert!(state.deck.is_empty());

    let state = engine.manual_end_round(&state);
    assert_eq!(state.status, GameStatus::RoundEnding);

    let state = engine.end_round(&state);
    let result = state.last_result.expect("result pending");
    assert_eq!(result.damage_to_enemy, 5);
    assert!(result.enemy_defeated);
    assert_eq!(result.damage_to_player, 0);

    let state = engine.continue_battle(&state);
    assert_eq!(state.status, GameStatus::StageClear);
    assert_eq!(state.player.hp, 15);
    assert_eq!(state.player.attack, 0);

    let state = engine.next_stage(&state);
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.stage, 2);
    assert_eq!(state.enemy.name, "Goblin");
}

/// The same win on a one-stage roster ends the game.
#[test]
fn test_final_stage_win_is_game_clear() {
    let roster = EnemyRoster::new(vec![EnemyTemplate::new("Slime", 3, (2, 4), (1, 3))]).unwrap();
    let config = BattleConfig::default().with_enemies(roster);
    let mut engine = BattleEngine::with_seed(config, 7).unwrap();
    let state = chain_state(&mut engine);

    let state = play_chain(&mut engine, state);
    let state = engine.end_round(&state);
    let state = engine.continue_battle(&state);

    assert_eq!(state.status, GameStatus::GameClear);
    assert_eq!(engine.legal_actions(&state), vec![Action::NewGame]);
    assert!(engine.is_terminal(&state).is_some());

    // Nothing but NewGame moves a finished game
    assert_eq!(engine.next_stage(&state), state);
    assert_eq!(engine.end_round(&state), state);
}

/// Ending a round with nothing played still resolves combat.
#[test]
fn test_empty_round_takes_damage() {
    let mut engine = BattleEngine::with_seed(BattleConfig::default(), 11).unwrap();
    let state = chain_state(&mut engine);

    let state = engine.end_round(&state);
    let result = state.last_result.expect("result pending");
    assert_eq!(result.damage_to_enemy, 0);
    assert_eq!(result.damage_to_player, 4);

    let state = engine.continue_battle(&state);
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.round, 2);
    assert_eq!(state.player.hp, 11);
    assert_eq!(state.enemy.hp, 5);
    assert_eq!(state.hand.len(), 5);
    assert_eq!(state.cards_in_play(), 52);
}

/// Shield soaks the enemy's attack.
#[test]
fn test_shield_absorbs_attack() {
    let mut engine = BattleEngine::with_seed(BattleConfig::default(), 3).unwrap();
    let base = chain_state(&mut engine);
    let mut state = GameState {
        field: Field::new(Some(card(Suit::Hearts, 1)), Some(card(Suit::Spades, 5))),
        ..base
    };

    for value in 6..=9 {
        state = engine.play_card(&state, card(Suit::Clubs, value).id(), FieldSlot::Right);
    }
    assert_eq!(state.player.shield, 4);

    let state = engine.end_round(&state);
    let state = engine.continue_battle(&state);
    assert_eq!(state.player.hp, 15);
    assert_eq!(state.player.shield, 0);
}

/// Two engines with the same seed and inputs produce identical snapshots.
#[test]
fn test_deterministic_replay() {
    fn run(seed: u64) -> Vec<GameState> {
        let mut engine = BattleEngine::with_seed(BattleConfig::default(), seed).unwrap();
        let mut state = engine.new_game();
        let mut history = vec![state.clone()];

        for _ in 0..40 {
            let actions = engine.legal_actions(&state);
            // Skip NewGame; take the last option to keep the game moving
            let Some(action) = actions.into_iter().filter(|a| *a != Action::NewGame).last() else {
                break;
            };
            state = engine.apply_action(&state, &action);
            history.push(state.clone());
        }
        history
    }

    assert_eq!(run(1234), run(1234));
    assert_ne!(run(1234)[0], run(4321)[0]);
}

/// Snapshots survive a serde round trip with status tags intact.
#[test]
fn test_state_serializes() {
    let mut engine = BattleEngine::with_seed(BattleConfig::default(), 5).unwrap();
    let state = engine.new_game();
    let state = engine.end_round(&state);

    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"battle_result\""));

    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
