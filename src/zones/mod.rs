//! Card zones: the deck, the hand, and the two-slot field.
//!
//! Deck and hand are persistent `im::Vector`s so a whole game snapshot can be
//! cloned in O(1) on every transition. Deck operations never mutate their
//! input.

pub mod deck;
pub mod field;

pub use deck::{draw, draw_one, fresh_shuffled_deck, shuffle, Deck, Draw};
pub use field::{Field, FieldSlot};
