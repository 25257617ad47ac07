//! # rust-card-battle
//!
//! A single-player, turn-based card battle engine.
//!
//! The player builds attack and shield by playing hand cards onto two field
//! slots, one adjacent value at a time, then trades blows with a scripted
//! enemy. Clearing every stage's enemy wins; running out of HP loses.
//!
//! ## Design Principles
//!
//! 1. **Functional state machine**: Every transition maps a snapshot and an
//!    action to a new snapshot. Illegal actions return the snapshot unchanged.
//!
//! 2. **Deterministic given a seed**: All randomness (shuffles, enemy stat
//!    rolls) flows through one injected `GameRng`.
//!
//! 3. **Configuration over convention**: HP, hand size, refresh allowance,
//!    the enemy roster and rule variants live in `BattleConfig`.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, actions, state snapshot, errors
//! - `cards`: Card value objects and the canonical catalog
//! - `zones`: Deck operations and the two-slot field
//! - `rules`: Playability, combat resolution, `RulesEngine` trait
//! - `enemies`: Stage templates and enemy instances
//! - `battle`: The battle state machine

pub mod battle;
pub mod cards;
pub mod core;
pub mod enemies;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    AccrualRule, Action, BattleConfig, ConfigError, GameRng, GameState, GameStatus,
    InvariantViolation, PlayerStats, RoundEndPolicy,
};

pub use crate::cards::{build_canonical_deck, Card, CardCatalog, CardId, Rank, Suit};

pub use crate::zones::{draw, shuffle, Deck, Draw, Field, FieldSlot};

pub use crate::rules::{
    can_play, has_playable_card, is_round_over, legal_plays, playable_slots, resolve_combat,
    BattleResult, GameResult, LegalPlay, RulesEngine,
};

pub use crate::enemies::{create_enemy_for_stage, Enemy, EnemyRoster, EnemyTemplate, StatRange};

pub use crate::battle::BattleEngine;
