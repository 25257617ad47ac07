//! Battle state machine.
//!
//! Statuses and the transitions between them:
//!
//! ```text
//! playing --ManualEndRound--> round_ending --EndRound--> battle_result
//! playing --EndRound--------------------------------->  battle_result
//! battle_result --Continue--> playing | stage_clear | game_clear | gameover
//! stage_clear --NextStage--> playing
//! any --NewGame--> playing
//! ```
//!
//! PlayCard and RefreshField stay within `playing`. Anything else is a no-op.

pub mod engine;
pub mod transitions;

pub use engine::BattleEngine;
pub use transitions::Rejection;
