//! Error types for the fallible setup surfaces.
//!
//! Transitions never fail: an illegal action returns the unchanged state.
//! Errors exist only for loading configuration and for checking snapshot
//! invariants.

use thiserror::Error;

use crate::cards::CardId;

/// Rejected battle configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("enemy roster must contain at least one template")]
    EmptyRoster,

    #[error("enemy `{name}`: {stat} range {min}..={max} is inverted")]
    InvalidRange {
        name: String,
        stat: &'static str,
        min: u32,
        max: u32,
    },

    #[error("enemy `{0}` has zero max HP")]
    ZeroEnemyHp(String),

    #[error("initial player HP must be positive")]
    ZeroPlayerHp,

    #[error("hand size {0} must be between 1 and 50")]
    InvalidHandSize(usize),
}

/// A snapshot that breaks one of the game-state invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("player HP {hp} exceeds max {max_hp}")]
    PlayerHpOverflow { hp: u32, max_hp: u32 },

    #[error("enemy HP {hp} exceeds max {max_hp}")]
    EnemyHpOverflow { hp: u32, max_hp: u32 },

    #[error("{0} cards in play exceed the 52-card deck")]
    TooManyCards(usize),

    #[error("{0} appears more than once")]
    DuplicateCard(CardId),

    #[error("hand holds {len} cards, target size is {max}")]
    OversizeHand { len: usize, max: usize },

    #[error("refresh allowance {left} exceeds per-stage maximum {max}")]
    RefreshOverflow { left: u32, max: u32 },

    #[error("pending battle result does not match status {0}")]
    PendingResultMismatch(&'static str),

    #[error("stage and round are 1-based")]
    ZeroIndex,
}
