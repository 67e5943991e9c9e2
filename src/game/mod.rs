//! Round engine and state management.

use rand::Rng;

use crate::deck::Deck;
use crate::error::{DeckError, RoundError};
use crate::hand::{Hand, Seat};
use crate::options::RoundConfig;
use crate::prompt::Prompt;
use crate::render::render_table;
use crate::result::{Outcome, RoundResult};

mod dealer;
mod player;
pub mod state;

pub use dealer::{DEALER_STANDS_ON, resolve};
pub use player::RIGGED_DRAW_VALUE;
pub use state::{PlayerTurnState, RoundState};

/// One round of blackjack.
///
/// The round owns its deck and both hands. It is created already dealt and
/// consumed by [`Round::play`]; nothing carries over to the next round.
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards left in the deck.
    deck: Deck,
    /// Round configuration.
    config: RoundConfig,
    /// Current round state.
    state: RoundState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
}

impl Round {
    /// Creates a fresh deck, shuffles it, and deals the opening hands.
    ///
    /// # Errors
    ///
    /// Never fails in practice: a fresh deck always covers the deal.
    pub fn new<R: Rng + ?Sized>(config: RoundConfig, rng: &mut R) -> Result<Self, DeckError> {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::deal(config, deck)
    }

    /// Deals the opening hands from the given deck without shuffling it.
    ///
    /// The player gets the first two cards drawn, the dealer the next two.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than four cards.
    pub fn deal(config: RoundConfig, mut deck: Deck) -> Result<Self, DeckError> {
        let player = Hand::dealt(Seat::Player, deck.draw()?, deck.draw()?);
        let dealer = Hand::dealt(Seat::Dealer, deck.draw()?, deck.draw()?);

        tracing::debug!(
            hand_count = config.hand_count,
            player = player.value(),
            dealer_up = dealer.up_card().map_or(0, |card| card.value()),
            "dealt opening hands"
        );

        Ok(Self {
            deck,
            config,
            state: RoundState::PlayerTurn,
            player,
            dealer,
        })
    }

    /// Plays the round to the end.
    ///
    /// Shows the table with the dealer's hole card hidden. A natural
    /// blackjack for the player ends the round at once. Otherwise the player
    /// takes their turn, the dealer plays, and the revealed table is shown
    /// before the hands are compared.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out or the prompt fails.
    pub fn play(mut self, prompt: &mut dyn Prompt) -> Result<RoundResult, RoundError> {
        prompt.show(&render_table(&self.player, &self.dealer, false));

        if self.player.is_blackjack() {
            self.state = RoundState::RoundOver;
            return Ok(self.finish(Outcome::PlayerBlackjack));
        }

        self.player_turn(prompt)?;
        self.dealer_turn()?;

        prompt.show(&render_table(&self.player, &self.dealer, true));

        let outcome = self.outcome()?;
        Ok(self.finish(outcome))
    }

    /// Compares the finished hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn outcome(&self) -> Result<Outcome, RoundError> {
        if self.state != RoundState::RoundOver {
            return Err(RoundError::InvalidState);
        }
        Ok(resolve(&self.player, &self.dealer))
    }

    fn finish(self, outcome: Outcome) -> RoundResult {
        tracing::info!(
            hand_count = self.config.hand_count,
            ?outcome,
            player = self.player.value(),
            dealer = self.dealer.value(),
            "round finished"
        );

        RoundResult {
            outcome,
            cards_remaining: self.deck.len(),
            hand_count: self.config.hand_count,
            player: self.player,
            dealer: self.dealer,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the round configuration.
    #[must_use]
    pub const fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
