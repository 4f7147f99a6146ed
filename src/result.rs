//! Outcome and snapshot types for observing a round.

use core::fmt;

use crate::card::Card;
use crate::game::GameStatus;
use crate::hand::SplitHand;

/// Outcome of a single hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandOutcome {
    /// Dealer busted or the player's total was higher; pays 2x the bet.
    Win,
    /// Dealer's total was higher; the bet is forfeited.
    Lose,
    /// Totals were equal; the bet is refunded.
    Push,
    /// The hand went over 21 before the dealer played.
    Bust,
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "Win!",
            Self::Lose => "Lose",
            Self::Push => "Push",
            Self::Bust => "Bust!",
        })
    }
}

/// An owned, plain-data view of the engine's full observable state.
///
/// Taken after each command via [`crate::Game::snapshot`]; the presentation
/// layer diffs and renders snapshots instead of reaching into the engine.
///
/// `player_hand` is empty whenever `split_hands` is populated and vice
/// versa: once a split occurs, the split hands replace the primary hand for
/// the rest of the round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSnapshot {
    /// The player's un-split hand.
    pub player_hand: Vec<Card>,
    /// The dealer's visible cards.
    pub dealer_hand: Vec<Card>,
    /// The split hands, in play order.
    pub split_hands: Vec<SplitHand>,
    /// Index of the split hand currently awaiting action, if any.
    pub active_split_hand: Option<usize>,
    /// Where the round stands.
    pub status: GameStatus,
    /// Human-readable status line.
    pub message: String,
    /// Current bankroll.
    pub bankroll: u32,
    /// Bet riding on the current round.
    pub bet: u32,
    /// Insurance stake, if taken.
    pub insurance_bet: u32,
    /// Whether insurance has been taken this round.
    pub insurance_taken: bool,
}
