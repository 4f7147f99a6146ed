use crate::hand::{PlayerHands, hand_total};
use crate::result::HandOutcome;

use super::{Game, GameStatus};

impl Game {
    /// Plays out the dealer's hand and resolves the round.
    ///
    /// The dealer draws until reaching 17 or higher; a soft 17 stands. Runs
    /// synchronously to completion, so callers observe [`GameStatus::Dealer`]
    /// only from within this call, never between commands.
    pub(super) fn play_dealer_turn(&mut self) {
        self.status = GameStatus::Dealer;

        while hand_total(&self.dealer) < 17 {
            let card = self.draw();
            self.dealer.push(card);
        }

        self.resolve_round();
    }

    /// Compares every live hand to the dealer and applies payouts.
    fn resolve_round(&mut self) {
        let dealer_total = hand_total(&self.dealer);
        let dealer_blackjack = dealer_total == 21 && self.dealer.len() == 2;

        // Accumulated in u64 and clamped once when credited, so a bankroll
        // grown to the u32 ceiling cannot overflow the payout math.
        let mut payout: u64 = 0;
        if dealer_blackjack && self.insurance_taken {
            // Insurance pays 2:1, so the stake comes back threefold.
            payout += u64::from(self.insurance_bet) * 3;
        }

        let bet = self.bet;
        let message = match &mut self.player {
            PlayerHands::Split { hands, .. } => {
                for hand in hands.iter_mut() {
                    let total = hand.total();
                    if total > 21 {
                        // Already settled as a bust when it happened.
                        continue;
                    }

                    let outcome = if dealer_total > 21 || total > dealer_total {
                        HandOutcome::Win
                    } else if total < dealer_total {
                        HandOutcome::Lose
                    } else {
                        HandOutcome::Push
                    };
                    payout += match outcome {
                        HandOutcome::Win => u64::from(hand.bet()) * 2,
                        HandOutcome::Push => u64::from(hand.bet()),
                        HandOutcome::Lose | HandOutcome::Bust => 0,
                    };
                    hand.settle(outcome);
                }
                "Split hands finished!"
            }
            PlayerHands::Single(cards) => {
                let player_total = hand_total(cards);
                let player_blackjack = player_total == 21 && cards.len() == 2;

                if player_blackjack && !dealer_blackjack {
                    // 3:2 payout: the bet comes back 2.5x.
                    payout += u64::from(bet) * 5 / 2;
                    "Blackjack! You win!"
                } else if dealer_blackjack && !player_blackjack {
                    "Dealer has Blackjack! You lose!"
                } else if dealer_total > 21 {
                    payout += u64::from(bet) * 2;
                    "Dealer busts! You win!"
                } else if dealer_total > player_total {
                    "Dealer wins!"
                } else if player_total > dealer_total {
                    payout += u64::from(bet) * 2;
                    "You win!"
                } else {
                    payout += u64::from(bet);
                    "Push!"
                }
            }
        };

        self.bankroll =
            u32::try_from(u64::from(self.bankroll) + payout).unwrap_or(u32::MAX);
        self.set_message(message);
        self.status = GameStatus::Finished;
    }
}
