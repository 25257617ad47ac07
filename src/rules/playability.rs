//! Playability: which hand cards may go onto which field slot.
//!
//! A card may be played onto a slot iff the slot already holds a card whose
//! value is adjacent on the 13-point cycle (A and K are adjacent). Suit is
//! irrelevant. These predicates are the single source of truth for both the
//! state machine and any UI computing enabled affordances.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId};
use crate::core::state::GameState;
use crate::zones::{Field, FieldSlot};

/// Whether `card` may be placed on top of `field_card`.
///
/// Always false for an empty slot.
#[must_use]
pub fn can_play(card: Card, field_card: Option<Card>) -> bool {
    let Some(field_card) = field_card else {
        return false;
    };
    matches!(card.value().abs_diff(field_card.value()), 1 | 12)
}

/// Whether any hand card is playable on either slot.
#[must_use]
pub fn has_playable_card<'a>(
    hand: impl IntoIterator<Item = &'a Card>,
    left: Option<Card>,
    right: Option<Card>,
) -> bool {
    hand.into_iter()
        .any(|&card| can_play(card, left) || can_play(card, right))
}

/// The slots that accept `card`, left first.
#[must_use]
pub fn playable_slots(card: Card, field: &Field) -> SmallVec<[FieldSlot; 2]> {
    FieldSlot::BOTH
        .into_iter()
        .filter(|&slot| can_play(card, field.get(slot)))
        .collect()
}

/// A legal (card, slot) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalPlay {
    pub card: CardId,
    pub slot: FieldSlot,
}

/// Every legal play for the given hand and field, in hand order.
#[must_use]
pub fn legal_plays<'a>(hand: impl IntoIterator<Item = &'a Card>, field: &Field) -> Vec<LegalPlay> {
    hand.into_iter()
        .flat_map(|&card| {
            playable_slots(card, field)
                .into_iter()
                .map(move |slot| LegalPlay { card: card.id(), slot })
        })
        .collect()
}

/// True when no hand card can be played on either slot.
#[must_use]
pub fn is_round_over(state: &GameState) -> bool {
    !has_playable_card(&state.hand, state.field.left, state.field.right)
}
