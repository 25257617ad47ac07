//! Battle configuration.
//!
//! Every tunable of a playthrough lives in `BattleConfig`:
//! - Player starting HP and hand size
//! - Field refreshes allowed per stage
//! - The enemy roster
//! - Which rule variant decides accrual and round termination
//!
//! Configs are built in code with the `with_*` builders or loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::enemies::EnemyRoster;

/// Cards in the canonical deck.
pub const DECK_SIZE: usize = 52;

/// Cards dealt to the field at the start of every round.
pub const FIELD_SIZE: usize = 2;

pub const DEFAULT_PLAYER_HP: u32 = 15;
pub const DEFAULT_HAND_SIZE: usize = 5;
pub const DEFAULT_REFRESHES_PER_STAGE: u32 = 4;

/// How a played card grows its accumulator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualRule {
    /// +1 per card played.
    #[default]
    Flat,
    /// +card value per card played.
    CardValue,
}

/// When the accumulation phase of a round ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEndPolicy {
    /// Only when the player signals it (ManualEndRound / EndRound).
    #[default]
    Manual,
    /// Additionally, right after a play that leaves no playable hand card.
    AutoWhenStuck,
}

/// Complete battle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Player max HP at the start of a playthrough.
    pub initial_player_hp: u32,

    /// Target hand size.
    pub hand_size: usize,

    /// Field refreshes allowed per stage.
    pub refreshes_per_stage: u32,

    pub round_end: RoundEndPolicy,

    pub accrual: AccrualRule,

    /// Stage-ordered enemy templates.
    pub enemies: EnemyRoster,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            initial_player_hp: DEFAULT_PLAYER_HP,
            hand_size: DEFAULT_HAND_SIZE,
            refreshes_per_stage: DEFAULT_REFRESHES_PER_STAGE,
            round_end: RoundEndPolicy::default(),
            accrual: AccrualRule::default(),
            enemies: EnemyRoster::default(),
        }
    }
}

impl BattleConfig {
    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Check the values a roster cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_player_hp == 0 {
            return Err(ConfigError::ZeroPlayerHp);
        }
        if self.hand_size == 0 || self.hand_size > DECK_SIZE - FIELD_SIZE {
            return Err(ConfigError::InvalidHandSize(self.hand_size));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_initial_player_hp(mut self, hp: u32) -> Self {
        self.initial_player_hp = hp;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_refreshes_per_stage(mut self, refreshes: u32) -> Self {
        self.refreshes_per_stage = refreshes;
        self
    }

    #[must_use]
    pub fn with_round_end(mut self, policy: RoundEndPolicy) -> Self {
        self.round_end = policy;
        self
    }

    #[must_use]
    pub fn with_accrual(mut self, rule: AccrualRule) -> Self {
        self.accrual = rule;
        self
    }

    #[must_use]
    pub fn with_enemies(mut self, roster: EnemyRoster) -> Self {
        self.enemies = roster;
        self
    }
}
