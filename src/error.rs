//! Error types for round setup.

use thiserror::Error;

/// Reasons a round cannot start.
///
/// The `Display` strings double as the engine's status messages, so a caller
/// using [`crate::Game::start_game`] sees the same text a caller of
/// [`crate::Game::try_start_game`] gets from the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("Place a bet to start the round!")]
    ZeroBet,
    /// Bet exceeds the current bankroll.
    #[error("Not enough money to place bet!")]
    InsufficientFunds,
}
