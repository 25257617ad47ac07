//! Action representation: the closed set of battle transitions.
//!
//! Every input a UI can dispatch is one `Action`. Only `PlayCard` carries
//! arguments; the rest act on the current snapshot alone.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::zones::FieldSlot;

/// A dispatchable battle transition.
///
/// ## Example
///
/// ```
/// use card_battle::core::Action;
/// use card_battle::cards::{CardId, Rank, Suit};
/// use card_battle::zones::FieldSlot;
///
/// let play = Action::PlayCard {
///     card: CardId::of(Suit::Hearts, Rank::Seven),
///     slot: FieldSlot::Left,
/// };
/// assert_eq!(play.name(), "play_card");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Start (or restart) a playthrough.
    NewGame,
    /// Play a hand card onto a field slot.
    PlayCard { card: CardId, slot: FieldSlot },
    /// Redeal both field cards and reroll the enemy.
    RefreshField,
    /// Player signals the end of the accumulation phase.
    ManualEndRound,
    /// Compute the round's battle result.
    EndRound,
    /// Acknowledge and apply the pending battle result.
    Continue,
    /// Advance past a cleared stage.
    NextStage,
}

impl Action {
    /// Stable snake_case name, as used on the wire and in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::NewGame => "new_game",
            Action::PlayCard { .. } => "play_card",
            Action::RefreshField => "refresh_field",
            Action::ManualEndRound => "manual_end_round",
            Action::EndRound => "end_round",
            Action::Continue => "continue",
            Action::NextStage => "next_stage",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlayCard { card, slot } => write!(f, "play_card({card}, {slot})"),
            other => f.write_str(other.name()),
        }
    }
}
