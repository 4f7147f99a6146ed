//! The round engine and its command surface.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::{PlayerHands, SplitHand, hand_total};
use crate::result::RoundSnapshot;
use crate::shoe::Shoe;

mod actions;
mod dealer;
mod insurance;
pub mod state;

pub use state::GameStatus;

/// Bankroll a fresh engine starts with, and the amount [`Game::reset`]
/// restores.
pub const STARTING_BANKROLL: u32 = 500;

pub(crate) const WELCOME_MESSAGE: &str = "Want to play a round?";

/// A single-player blackjack round engine.
///
/// The engine owns the shoe and all round state, and is driven through a
/// small command surface (`start_game`, `hit`, `stand`, `split`,
/// `insurance`, `reset`). Every command completes synchronously, including
/// the dealer's auto-play, and ineligible commands are silent no-ops, so the
/// engine is always safe to call. After each command the caller reads the
/// new state, either through the accessors or as an owned [`RoundSnapshot`].
///
/// # Example
///
/// ```
/// use twentyone::{Game, GameStatus};
///
/// let mut game = Game::with_seed(42);
/// assert!(game.start_game(100));
/// assert_eq!(game.status(), GameStatus::Playing);
/// assert_eq!(game.bankroll(), 400);
///
/// game.stand();
/// assert_eq!(game.status(), GameStatus::Finished);
/// println!("{}", game.message());
/// ```
#[derive(Debug)]
pub struct Game {
    shoe: Shoe,
    player: PlayerHands,
    dealer: Vec<Card>,
    status: GameStatus,
    message: String,
    bankroll: u32,
    bet: u32,
    insurance_bet: u32,
    insurance_taken: bool,
}

impl Game {
    /// Creates a new engine seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Creates a new engine with a fixed shuffle seed.
    ///
    /// Two engines built from the same seed draw identical card sequences,
    /// which is the intended way to make tests deterministic.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            shoe: Shoe::new(ChaCha8Rng::seed_from_u64(seed)),
            player: PlayerHands::empty(),
            dealer: Vec::new(),
            status: GameStatus::Waiting,
            message: WELCOME_MESSAGE.to_owned(),
            bankroll: STARTING_BANKROLL,
            bet: 0,
            insurance_bet: 0,
            insurance_taken: false,
        }
    }

    /// Restores the engine to its initial state.
    ///
    /// The bankroll returns to [`STARTING_BANKROLL`], all hand, bet, and
    /// insurance state is cleared, and the shoe is rebuilt to a fresh
    /// shuffled deck.
    pub fn reset(&mut self) {
        self.bankroll = STARTING_BANKROLL;
        self.clear_round();
        self.message = WELCOME_MESSAGE.to_owned();
        self.shoe.refill();
    }

    /// Clears per-round state without touching the bankroll or the shoe.
    pub(crate) fn clear_round(&mut self) {
        self.player = PlayerHands::empty();
        self.dealer.clear();
        self.bet = 0;
        self.insurance_bet = 0;
        self.insurance_taken = false;
        self.status = GameStatus::Waiting;
    }

    pub(crate) fn draw(&mut self) -> Card {
        self.shoe.draw()
    }

    /// Returns the player's un-split hand.
    ///
    /// Empty once a split has occurred; the hands live in
    /// [`split_hands`](Self::split_hands) from then on.
    #[must_use]
    pub fn player_hand(&self) -> &[Card] {
        match &self.player {
            PlayerHands::Single(cards) => cards,
            PlayerHands::Split { .. } => &[],
        }
    }

    /// Returns the dealer's visible cards.
    ///
    /// A single card from the deal until the dealer's turn begins, two or
    /// more afterwards.
    #[must_use]
    pub fn dealer_hand(&self) -> &[Card] {
        &self.dealer
    }

    /// Returns the split hands, in play order.
    #[must_use]
    pub fn split_hands(&self) -> &[SplitHand] {
        match &self.player {
            PlayerHands::Single(_) => &[],
            PlayerHands::Split { hands, .. } => hands,
        }
    }

    /// Returns the index of the split hand currently awaiting action.
    ///
    /// `None` when no split is active, including after the round resolves.
    #[must_use]
    pub fn active_split_hand(&self) -> Option<usize> {
        match &self.player {
            PlayerHands::Split { active, .. } if self.status == GameStatus::Playing => {
                Some(*active)
            }
            _ => None,
        }
    }

    /// Returns where the round stands.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the current human-readable status line.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> u32 {
        self.bankroll
    }

    /// Returns the bet riding on the current round.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Returns the insurance stake, or zero if none was taken.
    #[must_use]
    pub const fn insurance_bet(&self) -> u32 {
        self.insurance_bet
    }

    /// Returns whether insurance has been taken this round.
    #[must_use]
    pub const fn insurance_taken(&self) -> bool {
        self.insurance_taken
    }

    /// Returns the number of cards left in the shoe before the next refill.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Calculates the total of the currently acting hand.
    ///
    /// Zero between rounds, when no hand has cards.
    #[must_use]
    pub fn active_total(&self) -> u8 {
        match &self.player {
            PlayerHands::Single(cards) => hand_total(cards),
            PlayerHands::Split { hands, active } => {
                hands.get(*active).map_or(0, SplitHand::total)
            }
        }
    }

    /// Takes an owned snapshot of the full observable state.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        let (player_hand, split_hands) = match &self.player {
            PlayerHands::Single(cards) => (cards.clone(), Vec::new()),
            PlayerHands::Split { hands, .. } => (Vec::new(), hands.clone()),
        };

        RoundSnapshot {
            player_hand,
            dealer_hand: self.dealer.clone(),
            split_hands,
            active_split_hand: self.active_split_hand(),
            status: self.status,
            message: self.message.clone(),
            bankroll: self.bankroll,
            bet: self.bet,
            insurance_bet: self.insurance_bet,
            insurance_taken: self.insurance_taken,
        }
    }

    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Replaces the shoe contents so the given cards are drawn in order.
    #[cfg(test)]
    pub(crate) fn stack_shoe(&mut self, draws: &[Card]) {
        self.shoe.stack(draws);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
