//! The two field slots hand cards are played onto.
//!
//! The left slot feeds the attack accumulator, the right slot the shield
//! accumulator. Each slot holds at most one card.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Which field slot an action targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSlot {
    /// Attack slot.
    Left,
    /// Shield slot.
    Right,
}

impl FieldSlot {
    /// Both slots, left first.
    pub const BOTH: [FieldSlot; 2] = [FieldSlot::Left, FieldSlot::Right];
}

impl std::fmt::Display for FieldSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldSlot::Left => write!(f, "left/attack"),
            FieldSlot::Right => write!(f, "right/shield"),
        }
    }
}

/// Left and right field cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub left: Option<Card>,
    pub right: Option<Card>,
}

impl Field {
    /// A field holding the two given cards.
    #[must_use]
    pub fn new(left: Option<Card>, right: Option<Card>) -> Self {
        Self { left, right }
    }

    /// Card currently in `slot`.
    #[must_use]
    pub fn get(&self, slot: FieldSlot) -> Option<Card> {
        match slot {
            FieldSlot::Left => self.left,
            FieldSlot::Right => self.right,
        }
    }

    /// Copy of this field with `card` placed in `slot`, replacing the previous card.
    #[must_use]
    pub fn with_card(self, slot: FieldSlot, card: Card) -> Self {
        match slot {
            FieldSlot::Left => Self { left: Some(card), ..self },
            FieldSlot::Right => Self { right: Some(card), ..self },
        }
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Iterate over the cards on the field.
    pub fn cards(&self) -> impl Iterator<Item = Card> {
        self.left.into_iter().chain(self.right)
    }
}
