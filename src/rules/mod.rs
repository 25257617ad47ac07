//! Game rules: playability, combat resolution, and the engine trait.
//!
//! `playability` and `combat` are pure functions over snapshots. The
//! `RulesEngine` trait is the seam the battle state machine implements.

pub mod combat;
pub mod engine;
pub mod playability;

pub use combat::{resolve_combat, BattleResult};
pub use engine::{GameResult, RulesEngine};
pub use playability::{can_play, has_playable_card, is_round_over, legal_plays, playable_slots, LegalPlay};
