//! Enemy instances.
//!
//! An enemy is created from a template with full HP and freshly rolled
//! current attack/shield. Rerolls only replace the current stats; name, max
//! HP, ranges and remaining HP are preserved.

use serde::{Deserialize, Serialize};

use super::template::{EnemyRoster, EnemyTemplate, StatRange};
use crate::core::rng::GameRng;

/// A live enemy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub max_hp: u32,
    pub hp: u32,
    pub attack_range: StatRange,
    pub shield_range: StatRange,
    pub current_attack: u32,
    pub current_shield: u32,
}

impl Enemy {
    /// Instantiate a template: full HP, independently rolled attack and shield.
    #[must_use]
    pub fn from_template(template: &EnemyTemplate, rng: &mut GameRng) -> Self {
        Self {
            name: template.name.clone(),
            max_hp: template.max_hp,
            hp: template.max_hp,
            attack_range: template.attack_range,
            shield_range: template.shield_range,
            current_attack: roll(template.attack_range, rng),
            current_shield: roll(template.shield_range, rng),
        }
    }

    /// Copy with re-rolled current attack and shield.
    #[must_use]
    pub fn rerolled(&self, rng: &mut GameRng) -> Self {
        Self {
            current_attack: roll(self.attack_range, rng),
            current_shield: roll(self.shield_range, rng),
            ..self.clone()
        }
    }

    /// Copy with `damage` subtracted from HP, floored at zero.
    #[must_use]
    pub fn damaged(&self, damage: u32) -> Self {
        Self {
            hp: self.hp.saturating_sub(damage),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

fn roll(range: StatRange, rng: &mut GameRng) -> u32 {
    rng.gen_range_inclusive(range.min..=range.max)
}

/// Create the enemy for a 1-based stage, clamping past the roster's end.
#[must_use]
pub fn create_enemy_for_stage(roster: &EnemyRoster, stage: u32, rng: &mut GameRng) -> Enemy {
    Enemy::from_template(roster.template_for_stage(stage), rng)
}
