//! The drawable card sequence for a round.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A single-deck shoe consumed from one end.
///
/// Drawing from an empty shoe refills it to a fresh shuffled 52 cards before
/// the draw proceeds, so a draw never fails. This is a deliberate
/// infinite-shoe approximation, not an error path.
#[derive(Debug)]
pub(crate) struct Shoe {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly shuffled shoe using the given generator.
    pub(crate) fn new(rng: ChaCha8Rng) -> Self {
        let mut shoe = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        shoe.refill();
        shoe
    }

    /// Rebuilds the shoe to a full shuffled deck, discarding any remainder.
    pub(crate) fn refill(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
        self.cards.shuffle(&mut self.rng);
    }

    /// Draws the next card, refilling first if the shoe is exhausted.
    pub(crate) fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            self.refill();
        }
        self.cards.pop().expect("shoe was just refilled")
    }

    /// Number of cards left before the next refill.
    pub(crate) fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Replaces the shoe contents so the given cards are drawn in order.
    #[cfg(test)]
    pub(crate) fn stack(&mut self, draws: &[Card]) {
        self.cards = draws.iter().rev().copied().collect();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn fresh_shoe_holds_every_card_once() {
        let mut shoe = Shoe::new(ChaCha8Rng::seed_from_u64(3));
        assert_eq!(shoe.remaining(), DECK_SIZE);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..DECK_SIZE {
            assert!(seen.insert(shoe.draw()));
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn draw_from_empty_shoe_refills_silently() {
        let mut shoe = Shoe::new(ChaCha8Rng::seed_from_u64(9));
        for _ in 0..DECK_SIZE {
            shoe.draw();
        }
        assert_eq!(shoe.remaining(), 0);

        // The 53rd draw succeeds against a fresh deck.
        let _ = shoe.draw();
        assert_eq!(shoe.remaining(), DECK_SIZE - 1);
    }
}
