//! Card system: value objects and the canonical catalog.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: categorical card properties
//! - `CardId`: Stable identity, dense in `0..52`
//! - `Card`: Immutable (suit, rank, value) triple
//! - `CardCatalog`: Lookup over the 52 canonical cards

pub mod card;
pub mod catalog;

pub use card::{Card, CardId, Rank, Suit};
pub use catalog::{build_canonical_deck, CardCatalog};
