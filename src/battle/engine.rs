//! The battle state machine.
//!
//! `BattleEngine` owns the configuration and the single `GameRng`, and exposes
//! one method per transition plus a generic `dispatch`. Every method takes the
//! current snapshot by reference and returns the next one; a rejected action
//! returns an identical copy.

use tracing::{debug, trace};

use super::transitions::{self, Outcome};
use crate::cards::CardId;
use crate::core::action::Action;
use crate::core::config::{BattleConfig, FIELD_SIZE};
use crate::core::error::ConfigError;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, GameStatus};
use crate::rules::engine::RulesEngine;
use crate::rules::playability::legal_plays;
use crate::zones::FieldSlot;

/// Battle state machine.
///
/// ## Example
///
/// ```
/// use card_battle::battle::BattleEngine;
/// use card_battle::core::{BattleConfig, GameStatus};
///
/// let mut engine = BattleEngine::with_seed(BattleConfig::default(), 42).unwrap();
/// let state = engine.new_game();
///
/// let ending = engine.manual_end_round(&state);
/// let pending = engine.end_round(&ending);
/// assert_eq!(pending.status, GameStatus::BattleResult);
/// ```
#[derive(Clone, Debug)]
pub struct BattleEngine {
    config: BattleConfig,
    rng: GameRng,
}

impl BattleEngine {
    /// Create an engine with an injected RNG.
    pub fn new(config: BattleConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Create an engine with a seeded RNG.
    pub fn with_seed(config: BattleConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, GameRng::new(seed))
    }

    /// Seed of the engine's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Transitions ===

    /// Start a fresh playthrough.
    pub fn new_game(&mut self) -> GameState {
        let state = transitions::new_game(&self.config, &mut self.rng);
        debug!(
            enemy = %state.enemy.name,
            enemy_attack = state.enemy.current_attack,
            enemy_shield = state.enemy.current_shield,
            "new game"
        );
        state
    }

    /// Play `card` from the hand onto `slot`.
    pub fn play_card(&mut self, state: &GameState, card: CardId, slot: FieldSlot) -> GameState {
        let outcome = transitions::play_card(state, &self.config, card, slot);
        settle(state, Action::PlayCard { card, slot }, outcome)
    }

    /// Redeal the field and reroll the enemy, if allowance and deck permit.
    pub fn refresh_field(&mut self, state: &GameState) -> GameState {
        let outcome = transitions::refresh_field(state, &mut self.rng);
        settle(state, Action::RefreshField, outcome)
    }

    /// Close the accumulation phase.
    pub fn manual_end_round(&self, state: &GameState) -> GameState {
        settle(state, Action::ManualEndRound, transitions::manual_end_round(state))
    }

    /// Compute the round's battle result.
    pub fn end_round(&self, state: &GameState) -> GameState {
        settle(state, Action::EndRound, transitions::end_round(state))
    }

    /// Apply the pending battle result.
    pub fn continue_battle(&mut self, state: &GameState) -> GameState {
        let outcome = transitions::continue_battle(state, &self.config, &mut self.rng);
        settle(state, Action::Continue, outcome)
    }

    /// Advance past a cleared stage.
    pub fn next_stage(&mut self, state: &GameState) -> GameState {
        let outcome = transitions::next_stage(state, &self.config, &mut self.rng);
        settle(state, Action::NextStage, outcome)
    }

    /// Route an action to its transition.
    pub fn dispatch(&mut self, state: &GameState, action: &Action) -> GameState {
        match *action {
            Action::NewGame => self.new_game(),
            Action::PlayCard { card, slot } => self.play_card(state, card, slot),
            Action::RefreshField => self.refresh_field(state),
            Action::ManualEndRound => self.manual_end_round(state),
            Action::EndRound => self.end_round(state),
            Action::Continue => self.continue_battle(state),
            Action::NextStage => self.next_stage(state),
        }
    }

    // === Queries ===

    /// Whether RefreshField would be accepted.
    #[must_use]
    pub fn can_refresh(&self, state: &GameState) -> bool {
        state.status == GameStatus::Playing
            && state.refreshes_left > 0
            && state.deck.len() >= FIELD_SIZE
    }
}

/// Log the outcome and collapse a rejection into an unchanged snapshot.
fn settle(state: &GameState, action: Action, outcome: Outcome) -> GameState {
    match outcome {
        Ok(next) => {
            debug!(
                %action,
                stage = next.stage,
                round = next.round,
                status = %next.status,
                attack = next.player.attack,
                shield = next.player.shield,
                "transition accepted"
            );
            next
        }
        Err(reason) => {
            trace!(%action, status = %state.status, %reason, "transition rejected");
            state.clone()
        }
    }
}

impl RulesEngine for BattleEngine {
    fn config(&self) -> &BattleConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let mut actions = vec![Action::NewGame];

        match state.status {
            GameStatus::Playing => {
                actions.extend(
                    legal_plays(&state.hand, &state.field)
                        .into_iter()
                        .map(|play| Action::PlayCard { card: play.card, slot: play.slot }),
                );
                if self.can_refresh(state) {
                    actions.push(Action::RefreshField);
                }
                actions.push(Action::ManualEndRound);
                actions.push(Action::EndRound);
            }
            GameStatus::RoundEnding => actions.push(Action::EndRound),
            GameStatus::BattleResult if state.last_result.is_some() => {
                actions.push(Action::Continue);
            }
            GameStatus::StageClear => actions.push(Action::NextStage),
            _ => {}
        }

        actions
    }

    fn apply_action(&mut self, state: &GameState, action: &Action) -> GameState {
        self.dispatch(state, action)
    }
}
