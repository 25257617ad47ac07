//! Deck operations: shuffle and draw.
//!
//! Both operations are pure. They take the deck by reference and return new
//! persistent vectors, so the caller's snapshot is never mutated. Draw takes
//! from the front.

use im::Vector;

use crate::cards::{build_canonical_deck, Card};
use crate::core::rng::GameRng;

/// An ordered pile of cards. Front = top.
pub type Deck = Vector<Card>;

/// Result of drawing from the front of a sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw<T: Clone> {
    /// The drawn cards, in deck order.
    pub drawn: Vector<T>,
    /// What is left of the deck.
    pub remaining: Vector<T>,
}

/// Uniformly random permutation of `items`. The input is left untouched.
#[must_use]
pub fn shuffle<T: Clone>(items: &Vector<T>, rng: &mut GameRng) -> Vector<T> {
    let mut buffer: Vec<T> = items.iter().cloned().collect();
    rng.shuffle(&mut buffer);
    Vector::from(buffer)
}

/// Split off the first `n` elements.
///
/// If `n` exceeds the length, everything is drawn and the remainder is
/// empty. Never pads and never fails.
#[must_use]
pub fn draw<T: Clone>(items: &Vector<T>, n: usize) -> Draw<T> {
    let (drawn, remaining) = items.clone().split_at(n.min(items.len()));
    Draw { drawn, remaining }
}

/// Draw a single card from the front, if any.
#[must_use]
pub fn draw_one<T: Clone>(items: &Vector<T>) -> (Option<T>, Vector<T>) {
    let mut remaining = items.clone();
    let top = remaining.pop_front();
    (top, remaining)
}

/// The canonical deck, shuffled.
#[must_use]
pub fn fresh_shuffled_deck(rng: &mut GameRng) -> Deck {
    shuffle(&Vector::from(build_canonical_deck()), rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: u32) -> Vector<u32> {
        (0..n).collect()
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let mut rng = GameRng::new(42);
        let deck = numbers(20);
        let before = deck.clone();

        let shuffled = shuffle(&deck, &mut rng);

        assert_eq!(deck, before);
        assert_ne!(shuffled, deck);

        let mut sorted: Vec<_> = shuffled.into_iter().collect();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = GameRng::new(1);
        assert!(shuffle(&Vector::<u32>::new(), &mut rng).is_empty());
        assert_eq!(shuffle(&numbers(1), &mut rng), numbers(1));
    }

    #[test]
    fn test_shuffle_is_roughly_uniform_on_first_position() {
        // Each of 4 values should land on top about a quarter of the time.
        let mut rng = GameRng::new(2024);
        let deck = numbers(4);
        let mut counts = [0u32; 4];

        for _ in 0..4000 {
            let top = *shuffle(&deck, &mut rng).front().unwrap();
            counts[top as usize] += 1;
        }

        for count in counts {
            assert!((800..1200).contains(&count), "skewed counts: {counts:?}");
        }
    }

    #[test]
    fn test_draw_from_front() {
        let deck = numbers(10);
        let Draw { drawn, remaining } = draw(&deck, 3);

        assert_eq!(drawn, numbers(3));
        assert_eq!(remaining, (3..10).collect::<Vector<_>>());
        assert_eq!(deck.len(), 10);
    }

    #[test]
    fn test_draw_more_than_available() {
        let deck = numbers(2);
        let result = draw(&deck, 5);

        assert_eq!(result.drawn, deck);
        assert!(result.remaining.is_empty());
    }

    #[test]
    fn test_draw_zero() {
        let deck = numbers(4);
        let result = draw(&deck, 0);

        assert!(result.drawn.is_empty());
        assert_eq!(result.remaining, deck);
    }

    #[test]
    fn test_draw_one() {
        let (top, rest) = draw_one(&numbers(3));
        assert_eq!(top, Some(0));
        assert_eq!(rest, (1..3).collect::<Vector<_>>());

        let (none, empty) = draw_one(&Vector::<u32>::new());
        assert_eq!(none, None);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_fresh_shuffled_deck() {
        let mut rng = GameRng::new(5);
        let deck = fresh_shuffled_deck(&mut rng);

        assert_eq!(deck.len(), 52);
        assert_ne!(deck, Vector::from(build_canonical_deck()));
    }
}
