//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player's decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and can be resolved.
    RoundOver,
}

/// How the player's turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTurnState {
    /// Still choosing between hit and stand.
    Deciding,
    /// Went over 21.
    Busted,
    /// Chose to stand.
    Stood,
}

impl PlayerTurnState {
    /// Returns whether the turn is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Deciding)
    }
}
