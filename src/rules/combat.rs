//! Combat resolution for one round.
//!
//! Resolution is sequential and player-favoring: the player's attack lands
//! first, and if it is lethal the enemy never retaliates.

use serde::{Deserialize, Serialize};

use crate::core::state::PlayerStats;
use crate::enemies::Enemy;

/// The computed, not-yet-applied outcome of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResult {
    pub player_attack: u32,
    pub player_shield: u32,
    pub enemy_attack: u32,
    pub enemy_shield: u32,
    pub damage_to_enemy: u32,
    pub damage_to_player: u32,
    pub enemy_defeated: bool,
    pub player_defeated: bool,
}

/// Compute the exchange between the player's accumulators and the enemy's
/// current stats. Pure; nothing is applied.
#[must_use]
pub fn resolve_combat(player: &PlayerStats, enemy: &Enemy) -> BattleResult {
    let damage_to_enemy = player.attack.saturating_sub(enemy.current_shield);
    let enemy_defeated = damage_to_enemy >= enemy.hp;

    let (damage_to_player, player_defeated) = if enemy_defeated {
        (0, false)
    } else {
        let damage = enemy.current_attack.saturating_sub(player.shield);
        (damage, damage >= player.hp)
    };

    BattleResult {
        player_attack: player.attack,
        player_shield: player.shield,
        enemy_attack: enemy.current_attack,
        enemy_shield: enemy.current_shield,
        damage_to_enemy,
        damage_to_player,
        enemy_defeated,
        player_defeated,
    }
}
