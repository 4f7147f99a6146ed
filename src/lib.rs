//! A single-player blackjack round engine.
//!
//! The crate provides a [`Game`] type that manages a full round against the
//! dealer under fixed house rules: betting, hitting and standing, splitting
//! a pair, the insurance side bet, dealer auto-play, and payout resolution.
//! Commands are always safe to call; ineligible ones are silent no-ops, and
//! the caller re-renders from the observable state (or an owned
//! [`RoundSnapshot`]) after each command.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameStatus};
//!
//! let mut game = Game::with_seed(42);
//! assert!(game.start_game(100));
//!
//! while game.status() == GameStatus::Playing {
//!     game.stand();
//! }
//! println!("{} (bankroll {})", game.message(), game.bankroll());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::BetError;
pub use game::{Game, GameStatus, STARTING_BANKROLL};
pub use hand::{HandStatus, SplitHand, hand_total};
pub use result::{HandOutcome, RoundSnapshot};
