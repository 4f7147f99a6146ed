use crate::card::Rank;

use super::{Game, GameStatus};

impl Game {
    /// Returns whether an insurance bet can currently be placed.
    ///
    /// True only while the round is in play with the dealer's visible hand a
    /// single Ace, insurance has not already been taken this round, and the
    /// bankroll covers the stake of half the current bet.
    #[must_use]
    pub fn can_insure(&self) -> bool {
        self.status == GameStatus::Playing
            && self.dealer.len() == 1
            && self.dealer[0].rank == Rank::Ace
            && !self.insurance_taken
            && self.bankroll >= self.bet / 2
    }

    /// Places an insurance side bet of half the current bet.
    ///
    /// A no-op when [`can_insure`](Self::can_insure) is false. The stake is
    /// debited immediately and pays 2:1 at resolution if the dealer turns out
    /// to have blackjack; otherwise it is forfeited.
    pub fn insurance(&mut self) {
        if !self.can_insure() {
            return;
        }

        self.insurance_bet = self.bet / 2;
        self.bankroll -= self.insurance_bet;
        self.insurance_taken = true;
        self.set_message("Insurance placed! Continue playing");
    }
}

#[cfg(test)]
mod tests {
    use crate::card::{Card, Suit};

    use super::*;

    const fn card(rank: Rank) -> Card {
        Card::new(Suit::Diamonds, rank)
    }

    #[test]
    fn insurance_debits_half_the_bet_once() {
        let mut game = Game::with_seed(40);
        game.stack_shoe(&[
            card(Rank::Seven), // player
            card(Rank::Nine),  // player
            card(Rank::Ace),   // dealer up
        ]);
        game.start_game(100);
        assert!(game.can_insure());

        game.insurance();
        assert_eq!(game.insurance_bet(), 50);
        assert!(game.insurance_taken());
        assert_eq!(game.bankroll(), 350);
        assert_eq!(game.message(), "Insurance placed! Continue playing");

        // Taking it again changes nothing.
        assert!(!game.can_insure());
        game.insurance();
        assert_eq!(game.insurance_bet(), 50);
        assert_eq!(game.bankroll(), 350);
    }

    #[test]
    fn no_insurance_without_a_dealer_ace() {
        let mut game = Game::with_seed(41);
        game.stack_shoe(&[
            card(Rank::Seven), // player
            card(Rank::Nine),  // player
            card(Rank::King),  // dealer up
        ]);
        game.start_game(100);
        assert!(!game.can_insure());

        game.insurance();
        assert_eq!(game.insurance_bet(), 0);
        assert_eq!(game.bankroll(), 400);
    }

    #[test]
    fn insurance_cannot_touch_a_finished_round() {
        let mut game = Game::with_seed(44);
        game.stack_shoe(&[
            card(Rank::Ten),  // player
            card(Rank::Nine), // player
            card(Rank::Ace),  // dealer up
            card(Rank::King), // hit -> bust
        ]);
        game.start_game(100);
        game.hit();
        assert_eq!(game.status(), GameStatus::Finished);

        // The dealer still shows a lone Ace, but the round is over.
        assert!(!game.can_insure());
        game.insurance();
        assert_eq!(game.bankroll(), 400);
        assert_eq!(game.message(), "Bust! You lose!");
        assert!(!game.insurance_taken());
        assert_eq!(game.insurance_bet(), 0);
    }

    #[test]
    fn no_insurance_once_the_dealer_has_drawn_out() {
        let mut game = Game::with_seed(42);
        game.stack_shoe(&[
            card(Rank::Ten),  // player
            card(Rank::Nine), // player
            card(Rank::Ace),  // dealer up
            card(Rank::Six),  // dealer draw -> 17
        ]);
        game.start_game(100);
        game.stand();
        assert!(!game.can_insure());
    }

    #[test]
    fn insurance_requires_bankroll_for_the_stake() {
        let mut game = Game::with_seed(43);
        game.stack_shoe(&[
            card(Rank::Seven), // player
            card(Rank::Nine),  // player
            card(Rank::Ace),   // dealer up
        ]);
        game.start_game(400);
        assert_eq!(game.bankroll(), 100);
        // Half of 400 is 200, more than the 100 left.
        assert!(!game.can_insure());
    }
}
