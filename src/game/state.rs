//! Round status types.

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Between rounds; waiting for a bet.
    Waiting,
    /// The player (or the active split hand) is acting.
    Playing,
    /// The dealer is drawing out their hand.
    ///
    /// Transient: the dealer plays to completion inside the call that ended
    /// the player's turn, so callers never observe this status between
    /// commands.
    Dealer,
    /// The round is resolved and payouts have been applied.
    Finished,
}
