//! Rules engine trait.
//!
//! The battle machine implements `RulesEngine` to define:
//! - What actions are legal in a snapshot
//! - How an action produces the next snapshot
//! - When a playthrough is over

use crate::core::action::Action;
use crate::core::config::BattleConfig;
use crate::core::state::{GameState, GameStatus};

/// Outcome of a finished playthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Every stage cleared.
    Victory,
    /// Player HP reached zero.
    Defeat,
}

impl GameResult {
    /// Terminal outcome for a status, if it is terminal.
    #[must_use]
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::GameClear => Some(GameResult::Victory),
            GameStatus::GameOver => Some(GameResult::Defeat),
            _ => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action` must be total: an action that is not legal in `state`
///   returns an unchanged copy of `state`
/// - `legal_actions` must list exactly the actions `apply_action` accepts
/// - `is_terminal`: Return None while the playthrough continues
pub trait RulesEngine {
    /// Get the battle configuration.
    fn config(&self) -> &BattleConfig;

    /// Every action that would be accepted in `state`.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Compute the next snapshot.
    fn apply_action(&mut self, state: &GameState, action: &Action) -> GameState;

    /// Check if the playthrough is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        GameResult::from_status(state.status)
    }

    // === Convenience Methods ===

    /// Whether `action` would be accepted in `state`.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.legal_actions(state).contains(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_from_status() {
        assert_eq!(GameResult::from_status(GameStatus::GameClear), Some(GameResult::Victory));
        assert_eq!(GameResult::from_status(GameStatus::GameOver), Some(GameResult::Defeat));

        for status in [
            GameStatus::Playing,
            GameStatus::RoundEnding,
            GameStatus::BattleResult,
            GameStatus::StageClear,
        ] {
            assert_eq!(GameResult::from_status(status), None);
        }
    }
}
