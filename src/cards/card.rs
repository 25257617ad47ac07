//! Card value objects.
//!
//! A `Card` is one of the 52 (suit × rank) pairs of a standard deck. Cards
//! are immutable and `Copy`; playing a card moves a copy between zones and
//! never alters the catalog's definition.

use serde::{Deserialize, Serialize};

/// One of the four suits. Suit never affects playability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in canonical enumeration order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Position in the canonical enumeration.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    /// Lowercase name, as used in card ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }
}

/// One of the thirteen ranks. The numeric value is rank-determined: A=1 … K=13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace = 1,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    /// All ranks in canonical enumeration order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value, or `None` outside 1..=13.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1..=13 => Some(Self::ALL[usize::from(value - 1)]),
            _ => None,
        }
    }

    /// Short label (`A`, `2` … `10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Stable card identity.
///
/// Equal to the card's position in the canonical (suit-major, rank-minor)
/// enumeration, so ids are dense in `0..52`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Number of distinct card ids.
    pub const COUNT: usize = 52;

    /// Identity of the (suit, rank) pair.
    #[must_use]
    pub const fn of(suit: Suit, rank: Rank) -> Self {
        Self(suit.index() * 13 + rank.value() - 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A playing card.
///
/// Fields are private so `value` always agrees with `rank`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    suit: Suit,
    rank: Rank,
    value: u8,
}

impl Card {
    /// Create the card for a (suit, rank) pair.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            id: CardId::of(suit, rank),
            suit,
            rank,
            value: rank.value(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Numeric value, 1..=13.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Human-readable key, e.g. `hearts-A`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}-{}", self.suit.name(), self.rank.label())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
