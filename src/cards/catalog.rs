//! Card catalog: the immutable set of playable cards.
//!
//! The catalog holds the 52 canonical cards and provides lookup by `CardId`.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId, Rank, Suit};

/// Build the canonical 52-card deck.
///
/// One card per (suit × rank) pair, suit-major then rank-minor. No randomness.
#[must_use]
pub fn build_canonical_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

/// Registry of the canonical cards.
///
/// ## Example
///
/// ```
/// use card_battle::cards::{CardCatalog, CardId, Rank, Suit};
///
/// let catalog = CardCatalog::new();
/// let card = catalog.get(CardId::of(Suit::Spades, Rank::Queen)).unwrap();
/// assert_eq!(card.value(), 12);
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    cards: Vec<Card>,
    by_id: FxHashMap<CardId, Card>,
}

impl CardCatalog {
    /// Create the standard catalog.
    #[must_use]
    pub fn new() -> Self {
        let cards = build_canonical_deck();
        let by_id = cards.iter().map(|card| (card.id(), *card)).collect();
        Self { cards, by_id }
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.by_id.get(&id)
    }

    /// A fresh copy of the canonical deck, in enumeration order.
    #[must_use]
    pub fn canonical_deck(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Number of cards in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::new()
    }
}
