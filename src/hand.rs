//! Hand representations and total calculation.

use crate::card::{Card, Rank};
use crate::result::HandOutcome;

/// Calculates the total value of a hand.
///
/// Card values are summed with every Ace counted as 11, then Aces are
/// softened to 1 one at a time while the total exceeds 21. The result is the
/// highest total not exceeding 21, or the minimum bust total if a bust is
/// unavoidable.
///
/// # Example
///
/// ```
/// use twentyone::{Card, Rank, Suit, hand_total};
///
/// let hand = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Six),
///     Card::new(Suit::Clubs, Rank::Five),
/// ];
/// assert_eq!(hand_total(&hand), 12);
/// ```
#[must_use]
pub fn hand_total(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        total = total.saturating_add(card.rank.value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total
}

/// Per-hand play status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandStatus {
    /// Hand is awaiting player actions.
    Playing,
    /// Hand has stood or busted; no further actions.
    Finished,
}

/// One of the hands created by splitting a pair.
///
/// Carries its own bet and, once decided, its outcome. The outcome is written
/// exactly once: at bust time for busted hands, at round resolution for the
/// rest.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitHand {
    cards: Vec<Card>,
    bet: u32,
    status: HandStatus,
    result: Option<HandOutcome>,
}

impl SplitHand {
    /// Creates a split hand from one card of the original pair plus a fresh
    /// draw, inheriting the original bet.
    #[must_use]
    pub(crate) fn new(original: Card, drawn: Card, bet: u32) -> Self {
        Self {
            cards: vec![original, drawn],
            bet,
            status: HandStatus::Playing,
            result: None,
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet riding on this hand.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Returns the play status of this hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns the outcome, once decided.
    #[must_use]
    pub const fn result(&self) -> Option<HandOutcome> {
        self.result
    }

    /// Calculates the total value of this hand.
    #[must_use]
    pub fn total(&self) -> u8 {
        hand_total(&self.cards)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) const fn finish(&mut self) {
        self.status = HandStatus::Finished;
    }

    pub(crate) fn settle(&mut self, outcome: HandOutcome) {
        debug_assert!(self.result.is_none(), "outcome decided twice");
        self.result = Some(outcome);
    }
}

/// The player's hands: either the un-split primary hand or the split hands
/// with a cursor over the one currently acting.
///
/// Exactly one of the two shapes exists at a time, so the primary hand and
/// the split list can never both be populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlayerHands {
    /// The ordinary single hand (possibly empty between rounds).
    Single(Vec<Card>),
    /// The hands created by a split, played left to right.
    Split {
        /// The split hands, in play order.
        hands: Vec<SplitHand>,
        /// Index of the hand currently acting.
        active: usize,
    },
}

impl PlayerHands {
    pub(crate) const fn empty() -> Self {
        Self::Single(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::card::Suit;

    use super::*;

    fn card(rank: Rank) -> Card {
        Card::new(Suit::Spades, rank)
    }

    #[test]
    fn ace_counts_eleven_when_safe() {
        assert_eq!(hand_total(&[card(Rank::Ace), card(Rank::King)]), 21);
        assert_eq!(hand_total(&[card(Rank::Ace), card(Rank::Six)]), 17);
    }

    #[test]
    fn aces_soften_one_at_a_time() {
        // A + 6 + 5 is 12, not 22 or 2.
        assert_eq!(
            hand_total(&[card(Rank::Ace), card(Rank::Six), card(Rank::Five)]),
            12
        );
        // Two aces: one stays hard.
        assert_eq!(hand_total(&[card(Rank::Ace), card(Rank::Ace)]), 12);
        assert_eq!(
            hand_total(&[card(Rank::Ace), card(Rank::Ace), card(Rank::Nine)]),
            21
        );
    }

    #[test]
    fn bust_total_is_minimal() {
        assert_eq!(
            hand_total(&[
                card(Rank::Ace),
                card(Rank::King),
                card(Rank::Queen),
                card(Rank::Five),
            ]),
            26
        );
    }

    #[test]
    fn empty_hand_totals_zero() {
        assert_eq!(hand_total(&[]), 0);
    }

    #[test]
    fn split_hand_settles_once() {
        let mut hand = SplitHand::new(card(Rank::Eight), card(Rank::Ten), 50);
        assert_eq!(hand.total(), 18);
        assert_eq!(hand.status(), HandStatus::Playing);
        assert_eq!(hand.result(), None);

        hand.finish();
        hand.settle(HandOutcome::Win);
        assert_eq!(hand.status(), HandStatus::Finished);
        assert_eq!(hand.result(), Some(HandOutcome::Win));
    }
}
