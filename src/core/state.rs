//! Game state: the aggregate snapshot of a playthrough.
//!
//! ## GameState
//!
//! Everything a consumer needs to render or reason about the game:
//! - Player HP and round accumulators
//! - Deck, hand, and field cards
//! - The current enemy
//! - Stage/round counters, status tag, refresh allowance
//! - The pending battle result, if any
//!
//! Snapshots are immutable from the outside. Each accepted transition builds
//! a new `GameState`; deck and hand are `im` vectors, so the copy is cheap.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::{BattleConfig, DECK_SIZE};
use super::error::InvariantViolation;
use crate::cards::Card;
use crate::enemies::Enemy;
use crate::rules::combat::BattleResult;
use crate::zones::Field;

/// Player HP and the two per-round accumulators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub hp: u32,
    pub max_hp: u32,
    /// Attack accumulated this round.
    pub attack: u32,
    /// Shield accumulated this round.
    pub shield: u32,
}

impl PlayerStats {
    /// Full HP, empty accumulators.
    #[must_use]
    pub fn new(max_hp: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            attack: 0,
            shield: 0,
        }
    }

    /// Copy with both accumulators reset.
    #[must_use]
    pub fn with_cleared_accumulators(self) -> Self {
        Self {
            attack: 0,
            shield: 0,
            ..self
        }
    }

    /// Copy with `damage` subtracted from HP, floored at zero.
    #[must_use]
    pub fn damaged(self, damage: u32) -> Self {
        Self {
            hp: self.hp.saturating_sub(damage),
            ..self
        }
    }
}

/// Status tag of the battle state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Accumulation phase: cards may be played.
    Playing,
    /// Accumulation is over; waiting for EndRound.
    RoundEnding,
    /// A battle result is pending acknowledgement.
    BattleResult,
    /// The stage's enemy is defeated; waiting for NextStage.
    StageClear,
    /// The player was defeated.
    #[serde(rename = "gameover")]
    GameOver,
    /// The final stage was cleared.
    GameClear,
}

impl GameStatus {
    /// Snake_case tag, as serialized.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::RoundEnding => "round_ending",
            GameStatus::BattleResult => "battle_result",
            GameStatus::StageClear => "stage_clear",
            GameStatus::GameOver => "gameover",
            GameStatus::GameClear => "game_clear",
        }
    }

    /// Only a full reset leaves a terminal status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::GameClear)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Full game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub player: PlayerStats,

    /// Remaining draw pile (front = top).
    pub deck: Vector<Card>,

    /// Hand, in display order.
    pub hand: Vector<Card>,

    pub field: Field,

    pub enemy: Enemy,

    /// 1-based stage index.
    pub stage: u32,

    /// 1-based round index within the stage.
    pub round: u32,

    pub status: GameStatus,

    /// Field refreshes left in this stage.
    pub refreshes_left: u32,

    /// Whether any card has been played this round.
    pub played_this_round: bool,

    /// Set only while `status` is `BattleResult`.
    pub last_result: Option<BattleResult>,
}

impl GameState {
    /// Cards across deck, hand, and field.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.deck.len() + self.hand.len() + self.field.occupied()
    }

    /// Position of a card in the hand.
    #[must_use]
    pub fn hand_position(&self, card: crate::cards::CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id() == card)
    }

    /// Verify the snapshot invariants against the configuration it was built with.
    pub fn check_invariants(&self, config: &BattleConfig) -> Result<(), InvariantViolation> {
        if self.player.hp > self.player.max_hp {
            return Err(InvariantViolation::PlayerHpOverflow {
                hp: self.player.hp,
                max_hp: self.player.max_hp,
            });
        }
        if self.enemy.hp > self.enemy.max_hp {
            return Err(InvariantViolation::EnemyHpOverflow {
                hp: self.enemy.hp,
                max_hp: self.enemy.max_hp,
            });
        }

        let total = self.cards_in_play();
        if total > DECK_SIZE {
            return Err(InvariantViolation::TooManyCards(total));
        }

        let mut seen = FxHashSet::default();
        for card in self.deck.iter().chain(self.hand.iter()).copied().chain(self.field.cards()) {
            if !seen.insert(card.id()) {
                return Err(InvariantViolation::DuplicateCard(card.id()));
            }
        }

        if self.hand.len() > config.hand_size {
            return Err(InvariantViolation::OversizeHand {
                len: self.hand.len(),
                max: config.hand_size,
            });
        }
        if self.refreshes_left > config.refreshes_per_stage {
            return Err(InvariantViolation::RefreshOverflow {
                left: self.refreshes_left,
                max: config.refreshes_per_stage,
            });
        }
        if self.last_result.is_some() != (self.status == GameStatus::BattleResult) {
            return Err(InvariantViolation::PendingResultMismatch(self.status.tag()));
        }
        if self.stage == 0 || self.round == 0 {
            return Err(InvariantViolation::ZeroIndex);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::rng::GameRng;
    use crate::enemies::create_enemy_for_stage;

    fn sample_state() -> GameState {
        let config = BattleConfig::default();
        let mut rng = GameRng::new(42);
        GameState {
            player: PlayerStats::new(15),
            deck: Vector::from(vec![Card::new(Suit::Clubs, Rank::Two)]),
            hand: Vector::from(vec![
                Card::new(Suit::Hearts, Rank::Five),
                Card::new(Suit::Spades, Rank::King),
            ]),
            field: Field::new(
                Some(Card::new(Suit::Hearts, Rank::Four)),
                Some(Card::new(Suit::Diamonds, Rank::Ace)),
            ),
            enemy: create_enemy_for_stage(&config.enemies, 1, &mut rng),
            stage: 1,
            round: 1,
            status: GameStatus::Playing,
            refreshes_left: config.refreshes_per_stage,
            played_this_round: false,
            last_result: None,
        }
    }

    #[test]
    fn test_player_stats() {
        let stats = PlayerStats::new(15);
        assert_eq!(stats.hp, 15);
        assert_eq!(stats.attack, 0);

        let hurt = PlayerStats { attack: 3, shield: 2, ..stats }.damaged(20);
        assert_eq!(hurt.hp, 0);

        let cleared = hurt.with_cleared_accumulators();
        assert_eq!((cleared.attack, cleared.shield), (0, 0));
        assert_eq!(cleared.hp, 0);
    }

    #[test]
    fn test_status_tags() {
        assert_eq!(GameStatus::RoundEnding.to_string(), "round_ending");
        assert_eq!(serde_json::to_string(&GameStatus::GameOver).unwrap(), "\"gameover\"");
        assert_eq!(serde_json::to_string(&GameStatus::GameClear).unwrap(), "\"game_clear\"");
        assert!(GameStatus::GameOver.is_terminal());
        assert!(!GameStatus::StageClear.is_terminal());
    }

    #[test]
    fn test_cards_in_play_and_lookup() {
        let state = sample_state();
        assert_eq!(state.cards_in_play(), 5);
        assert_eq!(state.hand_position(Card::new(Suit::Spades, Rank::King).id()), Some(1));
        assert_eq!(state.hand_position(Card::new(Suit::Clubs, Rank::Two).id()), None);
    }

    #[test]
    fn test_valid_snapshot_passes() {
        assert_eq!(sample_state().check_invariants(&BattleConfig::default()), Ok(()));
    }

    #[test]
    fn test_duplicate_card_detected() {
        let mut state = sample_state();
        state.hand.push_back(Card::new(Suit::Hearts, Rank::Four));

        assert_eq!(
            state.check_invariants(&BattleConfig::default()),
            Err(InvariantViolation::DuplicateCard(Card::new(Suit::Hearts, Rank::Four).id()))
        );
    }

    #[test]
    fn test_pending_result_mismatch_detected() {
        let mut state = sample_state();
        state.status = GameStatus::BattleResult;

        assert_eq!(
            state.check_invariants(&BattleConfig::default()),
            Err(InvariantViolation::PendingResultMismatch("battle_result"))
        );
    }

    #[test]
    fn test_hp_and_refresh_overflow_detected() {
        let config = BattleConfig::default();

        let mut state = sample_state();
        state.player.hp = 16;
        assert!(matches!(
            state.check_invariants(&config),
            Err(InvariantViolation::PlayerHpOverflow { .. })
        ));

        let mut state = sample_state();
        state.refreshes_left = 5;
        assert!(matches!(
            state.check_invariants(&config),
            Err(InvariantViolation::RefreshOverflow { left: 5, max: 4 })
        ));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = sample_state();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"status\":\"playing\""));

        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
