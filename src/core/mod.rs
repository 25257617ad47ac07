//! Core engine types: RNG, configuration, actions, state, errors.
//!
//! These are shared by every other module. The battle machine in `battle`
//! consumes them; nothing here knows about transitions.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::Action;
pub use config::{AccrualRule, BattleConfig, RoundEndPolicy, DECK_SIZE, FIELD_SIZE};
pub use error::{ConfigError, InvariantViolation};
pub use rng::GameRng;
pub use state::{GameState, GameStatus, PlayerStats};
