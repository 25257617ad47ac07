//! Per-stage enemy templates and the stage roster.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// Inclusive `(min, max)` stat range.
///
/// Serializes as a two-element array, e.g. `attack_range = [2, 4]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the range.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Whether `min <= max`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

impl From<(u32, u32)> for StatRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self { min, max }
    }
}

impl From<StatRange> for (u32, u32) {
    fn from(range: StatRange) -> Self {
        (range.min, range.max)
    }
}

/// The fixed description of one stage's enemy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub name: String,
    pub max_hp: u32,
    pub attack_range: StatRange,
    pub shield_range: StatRange,
}

impl EnemyTemplate {
    pub fn new(
        name: impl Into<String>,
        max_hp: u32,
        attack_range: (u32, u32),
        shield_range: (u32, u32),
    ) -> Self {
        Self {
            name: name.into(),
            max_hp,
            attack_range: attack_range.into(),
            shield_range: shield_range.into(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hp == 0 {
            return Err(ConfigError::ZeroEnemyHp(self.name.clone()));
        }
        for (stat, range) in [("attack", self.attack_range), ("shield", self.shield_range)] {
            if !range.is_valid() {
                return Err(ConfigError::InvalidRange {
                    name: self.name.clone(),
                    stat,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}

/// Ordered, non-empty list of enemy templates, indexed by 1-based stage.
///
/// Stages past the end of the roster reuse the final template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<EnemyTemplate>", into = "Vec<EnemyTemplate>")]
pub struct EnemyRoster {
    templates: Vec<EnemyTemplate>,
}

impl EnemyRoster {
    /// Build a roster, validating every template.
    pub fn new(templates: Vec<EnemyTemplate>) -> Result<Self, ConfigError> {
        if templates.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        for template in &templates {
            template.validate()?;
        }
        Ok(Self { templates })
    }

    /// The five-stage roster the game ships with.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            templates: vec![
                EnemyTemplate::new("Slime", 3, (2, 4), (1, 3)),
                EnemyTemplate::new("Goblin", 5, (1, 4), (0, 2)),
                EnemyTemplate::new("Orc", 7, (4, 5), (0, 3)),
                EnemyTemplate::new("Dark Knight", 5, (1, 4), (3, 4)),
                EnemyTemplate::new("Dragon", 15, (3, 6), (1, 4)),
            ],
        }
    }

    /// Number of defined stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false; kept for the `len` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Template for a 1-based stage, clamped to the last entry.
    ///
    /// Stage 0 is treated as stage 1.
    #[must_use]
    pub fn template_for_stage(&self, stage: u32) -> &EnemyTemplate {
        let index = (stage.max(1) as usize - 1).min(self.templates.len() - 1);
        &self.templates[index]
    }

    /// Whether clearing `stage` ends the game.
    #[must_use]
    pub fn is_final_stage(&self, stage: u32) -> bool {
        stage as usize >= self.templates.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyTemplate> {
        self.templates.iter()
    }
}

impl Default for EnemyRoster {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<EnemyTemplate>> for EnemyRoster {
    type Error = ConfigError;

    fn try_from(templates: Vec<EnemyTemplate>) -> Result<Self, Self::Error> {
        Self::new(templates)
    }
}

impl From<EnemyRoster> for Vec<EnemyTemplate> {
    fn from(roster: EnemyRoster) -> Self {
        roster.templates
    }
}
