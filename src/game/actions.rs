use crate::error::BetError;
use crate::hand::{PlayerHands, SplitHand, hand_total};
use crate::result::HandOutcome;

use super::{Game, GameStatus};

impl Game {
    /// Starts a new round with the given bet.
    ///
    /// On success the bet is debited, the player receives two cards and the
    /// dealer one, and the round enters [`GameStatus::Playing`]. Starting a
    /// round abandons any round already in progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero or exceeds the bankroll; no state
    /// is mutated in that case.
    pub fn try_start_game(&mut self, bet: u32) -> Result<(), BetError> {
        if bet == 0 {
            return Err(BetError::ZeroBet);
        }
        if self.bankroll < bet {
            return Err(BetError::InsufficientFunds);
        }

        self.clear_round();
        self.bet = bet;
        self.bankroll -= bet;

        let first = self.draw();
        let second = self.draw();
        self.player = PlayerHands::Single(vec![first, second]);
        let up_card = self.draw();
        self.dealer.push(up_card);

        self.status = GameStatus::Playing;
        if self.can_insure() {
            self.set_message("Insurance available! Dealer showing Ace");
        } else {
            self.set_message("Hit or Stand?");
        }

        Ok(())
    }

    /// Starts a new round with the given bet, reporting success as a flag.
    ///
    /// The failure reason is surfaced through [`message`](Self::message)
    /// instead of an error value; see [`try_start_game`](Self::try_start_game)
    /// for the `Result` form.
    pub fn start_game(&mut self, bet: u32) -> bool {
        match self.try_start_game(bet) {
            Ok(()) => true,
            Err(err) => {
                self.set_message(err.to_string());
                false
            }
        }
    }

    /// Draws a card into the currently acting hand.
    ///
    /// A no-op unless the round is in [`GameStatus::Playing`]. Busting ends
    /// the hand; reaching exactly 21 stands it automatically.
    pub fn hit(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        let card = self.draw();
        let total = match &mut self.player {
            PlayerHands::Single(cards) => {
                cards.push(card);
                hand_total(cards)
            }
            PlayerHands::Split { hands, active } => {
                let Some(hand) = hands.get_mut(*active) else {
                    return;
                };
                hand.push(card);
                hand.total()
            }
        };

        if total > 21 {
            self.bust();
        } else if total == 21 {
            self.stand();
        }
    }

    /// Ends the turn of the currently acting hand.
    ///
    /// A no-op unless the round is in [`GameStatus::Playing`]. Standing the
    /// last hand runs the dealer's turn and resolution synchronously, leaving
    /// the round in [`GameStatus::Finished`].
    pub fn stand(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        if let PlayerHands::Split { hands, active } = &mut self.player {
            if let Some(hand) = hands.get_mut(*active) {
                hand.finish();
            }
            self.next_split_hand();
        } else {
            self.play_dealer_turn();
        }
    }

    /// Returns whether the player's hand can currently be split.
    ///
    /// True only for a two-card primary hand of matching rank, with enough
    /// bankroll left to fund the second hand. Splitting replaces the primary
    /// hand, so a hand can be split at most once per round.
    #[must_use]
    pub fn can_split(&self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let PlayerHands::Single(cards) = &self.player else {
            return false;
        };
        cards.len() == 2 && cards[0].rank == cards[1].rank && self.bankroll >= self.bet
    }

    /// Splits the player's pair into two independently played hands.
    ///
    /// A no-op when [`can_split`](Self::can_split) is false. Each hand keeps
    /// one of the original cards, receives a fresh draw, and inherits the
    /// original bet; an additional bet is debited to fund the second hand.
    pub fn split(&mut self) {
        if !self.can_split() {
            return;
        }
        let PlayerHands::Single(cards) = &mut self.player else {
            return;
        };
        let (Some(second), Some(first)) = (cards.pop(), cards.pop()) else {
            return;
        };

        let bet = self.bet;
        let first_draw = self.draw();
        let second_draw = self.draw();

        self.bankroll -= bet;
        self.player = PlayerHands::Split {
            hands: vec![
                SplitHand::new(first, first_draw, bet),
                SplitHand::new(second, second_draw, bet),
            ],
            active: 0,
        };
        self.set_message("Playing split hand 1");
    }

    /// Advances play past the active split hand, starting the dealer's turn
    /// once none remain.
    pub(super) fn next_split_hand(&mut self) {
        let next_message = match &mut self.player {
            PlayerHands::Split { hands, active } if *active + 1 < hands.len() => {
                *active += 1;
                Some(format!("Playing split hand {}", *active + 1))
            }
            _ => None,
        };

        match next_message {
            Some(message) => self.set_message(message),
            None => self.play_dealer_turn(),
        }
    }

    /// Handles the acting hand going over 21.
    fn bust(&mut self) {
        if let PlayerHands::Split { hands, active } = &mut self.player {
            if let Some(hand) = hands.get_mut(*active) {
                hand.finish();
                hand.settle(HandOutcome::Bust);
            }
            self.next_split_hand();
        } else {
            // The bet and any insurance stake were already debited when
            // placed; a bust forfeits them without a further deduction.
            self.status = GameStatus::Finished;
            self.set_message("Bust! You lose!");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::card::{Card, Rank, Suit};
    use crate::hand::HandStatus;

    use super::*;

    const fn card(rank: Rank) -> Card {
        Card::new(Suit::Hearts, rank)
    }

    #[test]
    fn start_game_deals_and_debits() {
        let mut game = Game::with_seed(10);
        assert!(game.start_game(100));
        assert_eq!(game.bankroll(), 400);
        assert_eq!(game.player_hand().len(), 2);
        assert_eq!(game.dealer_hand().len(), 1);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn start_game_rejects_bet_above_bankroll() {
        let mut game = Game::with_seed(10);
        assert!(!game.start_game(600));
        assert_eq!(game.message(), "Not enough money to place bet!");
        assert_eq!(game.bankroll(), 500);
        assert_eq!(game.status(), GameStatus::Waiting);
        assert!(game.player_hand().is_empty());

        assert_eq!(
            game.try_start_game(600).unwrap_err(),
            BetError::InsufficientFunds
        );
    }

    #[test]
    fn start_game_rejects_zero_bet() {
        let mut game = Game::with_seed(10);
        assert!(!game.start_game(0));
        assert_eq!(game.try_start_game(0).unwrap_err(), BetError::ZeroBet);
        assert_eq!(game.status(), GameStatus::Waiting);
    }

    #[test]
    fn start_game_announces_insurance_on_dealer_ace() {
        let mut game = Game::with_seed(11);
        game.stack_shoe(&[
            card(Rank::Seven), // player
            card(Rank::Nine),  // player
            card(Rank::Ace),   // dealer up
        ]);
        assert!(game.start_game(100));
        assert_eq!(game.message(), "Insurance available! Dealer showing Ace");
    }

    #[test]
    fn hit_then_auto_stand_on_twenty_one() {
        let mut game = Game::with_seed(12);
        game.stack_shoe(&[
            card(Rank::Five),  // player
            card(Rank::Six),   // player
            card(Rank::Ten),   // dealer up
            card(Rank::Ten),   // hit -> 21, auto-stand
            card(Rank::Nine),  // dealer draw -> 19
        ]);
        game.start_game(100);
        game.hit();

        // 21 stood automatically and the dealer played out to 19.
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.message(), "You win!");
        assert_eq!(game.bankroll(), 600);
    }

    #[test]
    fn primary_bust_ends_round_without_extra_insurance_debit() {
        let mut game = Game::with_seed(13);
        game.stack_shoe(&[
            card(Rank::Ten),  // player
            card(Rank::Nine), // player
            card(Rank::Ace),  // dealer up
            card(Rank::King), // hit -> bust
        ]);
        game.start_game(100);
        game.insurance();
        assert_eq!(game.bankroll(), 350);

        game.hit();
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.message(), "Bust! You lose!");
        // The stake was spent at purchase time; busting does not debit it again.
        assert_eq!(game.bankroll(), 350);
    }

    #[test]
    fn split_creates_two_funded_hands() {
        let mut game = Game::with_seed(14);
        game.stack_shoe(&[
            card(Rank::Eight), // player
            card(Rank::Eight), // player
            card(Rank::Five),  // dealer up
            card(Rank::Two),   // split hand 1 draw
            card(Rank::Three), // split hand 2 draw
        ]);
        game.start_game(100);
        assert!(game.can_split());
        game.split();

        assert_eq!(game.bankroll(), 300);
        assert!(game.player_hand().is_empty());
        assert_eq!(game.active_split_hand(), Some(0));
        assert_eq!(game.message(), "Playing split hand 1");

        let hands = game.split_hands();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0].cards(), &[card(Rank::Eight), card(Rank::Two)]);
        assert_eq!(hands[1].cards(), &[card(Rank::Eight), card(Rank::Three)]);
        assert_eq!(hands[0].bet(), 100);
        assert_eq!(hands[1].bet(), 100);

        // The primary hand is gone, so a second split is impossible.
        assert!(!game.can_split());
    }

    #[test]
    fn can_split_requires_matching_labels() {
        let mut game = Game::with_seed(15);
        game.stack_shoe(&[
            card(Rank::Ten),  // player
            card(Rank::Jack), // player
            card(Rank::Five), // dealer up
        ]);
        game.start_game(100);
        // Ten and Jack both count 10 but their labels differ.
        assert!(!game.can_split());
        game.split();
        assert!(game.split_hands().is_empty());
    }

    #[test]
    fn can_split_requires_bankroll_for_second_bet() {
        let mut game = Game::with_seed(16);
        game.stack_shoe(&[
            card(Rank::Eight), // player
            card(Rank::Eight), // player
            card(Rank::Five),  // dealer up
        ]);
        game.start_game(300);
        assert_eq!(game.bankroll(), 200);
        assert!(!game.can_split());
    }

    #[test]
    fn stand_advances_through_split_hands() {
        let mut game = Game::with_seed(17);
        game.stack_shoe(&[
            card(Rank::Eight), // player
            card(Rank::Eight), // player
            card(Rank::Ten),   // dealer up
            card(Rank::Two),   // split hand 1 draw
            card(Rank::Three), // split hand 2 draw
            card(Rank::Seven), // dealer draw -> 17
        ]);
        game.start_game(100);
        game.split();

        game.stand();
        assert_eq!(game.active_split_hand(), Some(1));
        assert_eq!(game.message(), "Playing split hand 2");
        assert_eq!(game.split_hands()[0].status(), HandStatus::Finished);

        game.stand();
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.message(), "Split hands finished!");
    }

    #[test]
    fn split_hand_bust_is_recorded_and_play_moves_on() {
        let mut game = Game::with_seed(18);
        game.stack_shoe(&[
            card(Rank::Eight), // player
            card(Rank::Eight), // player
            card(Rank::Ten),   // dealer up
            card(Rank::Ten),   // split hand 1 draw -> 18
            card(Rank::Ten),   // split hand 2 draw -> 18
            card(Rank::King),  // hit hand 1 -> bust
            card(Rank::Seven), // dealer draw -> 17
        ]);
        game.start_game(100);
        game.split();

        game.hit();
        let first = &game.split_hands()[0];
        assert_eq!(first.status(), HandStatus::Finished);
        assert_eq!(first.result(), Some(HandOutcome::Bust));
        assert_eq!(game.active_split_hand(), Some(1));

        game.stand();
        assert_eq!(game.status(), GameStatus::Finished);
        // Hand 2 stood on 18 against the dealer's 17.
        assert_eq!(game.split_hands()[1].result(), Some(HandOutcome::Win));
        // Busted hand keeps the result written at bust time.
        assert_eq!(game.split_hands()[0].result(), Some(HandOutcome::Bust));
    }

    #[test]
    fn commands_are_no_ops_outside_playing() {
        let mut game = Game::with_seed(19);
        let before = game.snapshot();
        game.hit();
        game.stand();
        game.split();
        game.insurance();
        assert_eq!(game.snapshot(), before);
    }
}
