//! Battle transitions as pure functions.
//!
//! Each function takes the current snapshot and returns `Ok(next)` when the
//! transition is accepted, or the `Rejection` reason otherwise. Rejections are
//! not errors: the engine logs them and hands back the unchanged snapshot.
//! Randomness comes only from the `GameRng` passed in.

use im::Vector;
use tracing::info;

use crate::cards::{Card, CardId};
use crate::core::config::{AccrualRule, BattleConfig, RoundEndPolicy, FIELD_SIZE};
use crate::core::rng::GameRng;
use crate::core::state::{GameState, GameStatus, PlayerStats};
use crate::enemies::create_enemy_for_stage;
use crate::rules::combat::resolve_combat;
use crate::rules::playability::{can_play, is_round_over};
use crate::zones::{draw, draw_one, fresh_shuffled_deck, Field, FieldSlot};

/// Why a transition was turned down. Only used for trace logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    WrongStatus(GameStatus),
    CardNotInHand(CardId),
    NotAdjacent(CardId, FieldSlot),
    NoRefreshesLeft,
    DeckTooSmall(usize),
    NoPendingResult,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::WrongStatus(status) => write!(f, "not allowed while {status}"),
            Rejection::CardNotInHand(card) => write!(f, "{card} is not in hand"),
            Rejection::NotAdjacent(card, slot) => write!(f, "{card} is not playable on {slot}"),
            Rejection::NoRefreshesLeft => write!(f, "no field refreshes left this stage"),
            Rejection::DeckTooSmall(len) => write!(f, "deck has {len} cards, refresh needs 2"),
            Rejection::NoPendingResult => write!(f, "no pending battle result"),
        }
    }
}

pub type Outcome = Result<GameState, Rejection>;

/// A freshly shuffled deck with field and hand dealt from it.
struct Deal {
    deck: Vector<Card>,
    hand: Vector<Card>,
    field: Field,
}

fn deal(hand_size: usize, rng: &mut GameRng) -> Deal {
    let shuffled = fresh_shuffled_deck(rng);
    let field_draw = draw(&shuffled, FIELD_SIZE);
    let hand_draw = draw(&field_draw.remaining, hand_size);

    Deal {
        deck: hand_draw.remaining,
        hand: hand_draw.drawn,
        field: Field::new(field_draw.drawn.get(0).copied(), field_draw.drawn.get(1).copied()),
    }
}

fn require(state: &GameState, allowed: &[GameStatus]) -> Result<(), Rejection> {
    if allowed.contains(&state.status) {
        Ok(())
    } else {
        Err(Rejection::WrongStatus(state.status))
    }
}

/// Build a playthrough from scratch. Always succeeds.
pub fn new_game(config: &BattleConfig, rng: &mut GameRng) -> GameState {
    let Deal { deck, hand, field } = deal(config.hand_size, rng);

    GameState {
        player: PlayerStats::new(config.initial_player_hp),
        deck,
        hand,
        field,
        enemy: create_enemy_for_stage(&config.enemies, 1, rng),
        stage: 1,
        round: 1,
        status: GameStatus::Playing,
        refreshes_left: config.refreshes_per_stage,
        played_this_round: false,
        last_result: None,
    }
}

/// Move a hand card onto a field slot and grow that slot's accumulator.
///
/// The replacement card from the deck takes the played card's hand position.
pub fn play_card(state: &GameState, config: &BattleConfig, card_id: CardId, slot: FieldSlot) -> Outcome {
    require(state, &[GameStatus::Playing])?;

    let index = state
        .hand_position(card_id)
        .ok_or(Rejection::CardNotInHand(card_id))?;
    let card = state.hand[index];

    if !can_play(card, state.field.get(slot)) {
        return Err(Rejection::NotAdjacent(card_id, slot));
    }

    let (replacement, deck) = draw_one(&state.deck);
    let mut hand = state.hand.clone();
    match replacement {
        Some(next) => {
            hand.set(index, next);
        }
        None => {
            hand.remove(index);
        }
    }

    let gain = match config.accrual {
        AccrualRule::Flat => 1,
        AccrualRule::CardValue => u32::from(card.value()),
    };
    let player = match slot {
        FieldSlot::Left => PlayerStats {
            attack: state.player.attack + gain,
            ..state.player
        },
        FieldSlot::Right => PlayerStats {
            shield: state.player.shield + gain,
            ..state.player
        },
    };

    let mut next = GameState {
        player,
        deck,
        hand,
        field: state.field.with_card(slot, card),
        played_this_round: true,
        ..state.clone()
    };

    if config.round_end == RoundEndPolicy::AutoWhenStuck && is_round_over(&next) {
        next.status = GameStatus::RoundEnding;
    }

    Ok(next)
}

/// Replace both field cards from the deck and reroll the enemy.
pub fn refresh_field(state: &GameState, rng: &mut GameRng) -> Outcome {
    require(state, &[GameStatus::Playing])?;

    if state.refreshes_left == 0 {
        return Err(Rejection::NoRefreshesLeft);
    }
    if state.deck.len() < FIELD_SIZE {
        return Err(Rejection::DeckTooSmall(state.deck.len()));
    }

    let field_draw = draw(&state.deck, FIELD_SIZE);
    let field = Field::new(
        field_draw.drawn.get(0).copied().or(state.field.left),
        field_draw.drawn.get(1).copied().or(state.field.right),
    );

    Ok(GameState {
        deck: field_draw.remaining,
        field,
        enemy: state.enemy.rerolled(rng),
        refreshes_left: state.refreshes_left - 1,
        ..state.clone()
    })
}

/// Close the accumulation phase without touching any stat.
pub fn manual_end_round(state: &GameState) -> Outcome {
    require(state, &[GameStatus::Playing])?;

    Ok(GameState {
        status: GameStatus::RoundEnding,
        ..state.clone()
    })
}

/// Compute and stage the round's battle result. Nothing is applied yet.
pub fn end_round(state: &GameState) -> Outcome {
    require(state, &[GameStatus::Playing, GameStatus::RoundEnding])?;

    Ok(GameState {
        status: GameStatus::BattleResult,
        last_result: Some(resolve_combat(&state.player, &state.enemy)),
        ..state.clone()
    })
}

/// Apply the pending battle result.
pub fn continue_battle(state: &GameState, config: &BattleConfig, rng: &mut GameRng) -> Outcome {
    require(state, &[GameStatus::BattleResult])?;
    let result = state.last_result.ok_or(Rejection::NoPendingResult)?;

    if result.enemy_defeated {
        let status = if config.enemies.is_final_stage(state.stage) {
            GameStatus::GameClear
        } else {
            GameStatus::StageClear
        };
        info!(stage = state.stage, enemy = %state.enemy.name, %status, "enemy defeated");

        let mut enemy = state.enemy.clone();
        enemy.hp = 0;

        return Ok(GameState {
            player: state.player.with_cleared_accumulators(),
            enemy,
            status,
            last_result: None,
            ..state.clone()
        });
    }

    if result.player_defeated {
        info!(stage = state.stage, round = state.round, "player defeated");

        let mut player = state.player;
        player.hp = 0;

        return Ok(GameState {
            player,
            enemy: state.enemy.damaged(result.damage_to_enemy),
            status: GameStatus::GameOver,
            last_result: None,
            ..state.clone()
        });
    }

    let Deal { deck, hand, field } = deal(config.hand_size, rng);

    Ok(GameState {
        player: state
            .player
            .damaged(result.damage_to_player)
            .with_cleared_accumulators(),
        deck,
        hand,
        field,
        enemy: state.enemy.damaged(result.damage_to_enemy).rerolled(rng),
        round: state.round + 1,
        status: GameStatus::Playing,
        played_this_round: false,
        last_result: None,
        ..state.clone()
    })
}

/// Advance to the next stage with a fresh enemy, deal, and refresh allowance.
pub fn next_stage(state: &GameState, config: &BattleConfig, rng: &mut GameRng) -> Outcome {
    require(state, &[GameStatus::StageClear])?;

    let stage = state.stage + 1;
    let Deal { deck, hand, field } = deal(config.hand_size, rng);

    Ok(GameState {
        player: state.player.with_cleared_accumulators(),
        deck,
        hand,
        field,
        enemy: create_enemy_for_stage(&config.enemies, stage, rng),
        stage,
        round: 1,
        status: GameStatus::Playing,
        refreshes_left: config.refreshes_per_stage,
        played_this_round: false,
        last_result: None,
    })
}
