//! Round outcomes.

use core::fmt;

use crate::hand::{Hand, Seat};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player was dealt a natural blackjack. Nothing else was played.
    PlayerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher total.
    PlayerWins,
    /// Dealer has the higher total.
    DealerWins,
    /// Equal totals.
    Tie,
}

impl Outcome {
    /// Returns who won the round, or `None` on a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWins => Some(Seat::Player),
            Self::PlayerBust | Self::DealerWins => Some(Seat::Dealer),
            Self::Tie => None,
        }
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBlackjack => "Blackjack! Player wins!",
            Self::PlayerBust => "Player busts. Dealer wins.",
            Self::DealerBust => "Dealer busts. Player wins!",
            Self::PlayerWins => "Player wins!",
            Self::DealerWins => "Dealer wins.",
            Self::Tie => "It's a tie.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand.
    pub player: Hand,
    /// The dealer's final hand.
    pub dealer: Hand,
    /// Cards left in the deck when the round ended.
    pub cards_remaining: usize,
    /// Session hand number this round was played as.
    pub hand_count: u32,
}

impl RoundResult {
    /// The player's final hand value.
    #[must_use]
    pub fn player_value(&self) -> u16 {
        self.player.value()
    }

    /// The dealer's final hand value.
    #[must_use]
    pub fn dealer_value(&self) -> u16 {
        self.dealer.value()
    }
}

/// Running tally of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Rounds started.
    pub rounds: u32,
    /// Rounds won by the player.
    pub player_wins: u32,
    /// Rounds won by the dealer.
    pub dealer_wins: u32,
    /// Rounds tied.
    pub ties: u32,
    /// Rounds aborted by an engine error.
    pub aborted: u32,
}

impl SessionSummary {
    /// Records a finished round.
    pub const fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome.winner() {
            Some(Seat::Player) => self.player_wins += 1,
            Some(Seat::Dealer) => self.dealer_wins += 1,
            None => self.ties += 1,
        }
    }

    /// Records a round that was aborted.
    pub const fn record_aborted(&mut self) {
        self.rounds += 1;
        self.aborted += 1;
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rounds: {} (won {}, lost {}, tied {})",
            self.rounds, self.player_wins, self.dealer_wins, self.ties
        )?;
        if self.aborted > 0 {
            write!(f, ", aborted {}", self.aborted)?;
        }
        Ok(())
    }
}
