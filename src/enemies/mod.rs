//! Enemy generator: stage templates and enemy instances.
//!
//! `EnemyRoster` maps 1-based stage indices to templates, clamping to the
//! final template. `Enemy` is the live instance whose current attack and
//! shield are re-rolled at round boundaries and on field refresh.

pub mod enemy;
pub mod template;

pub use enemy::{create_enemy_for_stage, Enemy};
pub use template::{EnemyRoster, EnemyTemplate, StatRange};
