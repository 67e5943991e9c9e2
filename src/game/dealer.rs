use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::{BLACKJACK, Hand};
use crate::result::Outcome;

use super::{Round, RoundState};

/// The dealer draws below this total and stands on it or above.
///
/// Soft and hard totals are treated alike, so the dealer stands on a soft 17.
pub const DEALER_STANDS_ON: u16 = 17;

/// Compares two finished hands.
///
/// Busts are checked before totals, player first: a busted player loses
/// even if the dealer busted too.
#[must_use]
pub fn resolve(player: &Hand, dealer: &Hand) -> Outcome {
    let player_value = player.value();
    let dealer_value = dealer.value();

    if player_value > BLACKJACK {
        Outcome::PlayerBust
    } else if dealer_value > BLACKJACK {
        Outcome::DealerBust
    } else if player_value > dealer_value {
        Outcome::PlayerWins
    } else if dealer_value > player_value {
        Outcome::DealerWins
    } else {
        Outcome::Tie
    }
}

impl Round {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws until reaching [`DEALER_STANDS_ON`] or higher. This
    /// happens even when the player has busted.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_turn(&mut self) -> Result<Vec<Card>, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.deck.draw()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        tracing::debug!(
            drawn = drawn_cards.len(),
            total = self.dealer.value(),
            "dealer stands"
        );

        self.state = RoundState::RoundOver;

        Ok(drawn_cards)
    }
}
