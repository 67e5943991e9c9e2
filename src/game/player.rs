use crate::card::Card;
use crate::error::RoundError;
use crate::hand::BLACKJACK;
use crate::prompt::{PlayerAction, Prompt};
use crate::render::render_hand;

use super::{PlayerTurnState, Round, RoundState};

/// Card value the biased draw looks for.
pub const RIGGED_DRAW_VALUE: u8 = 10;

const HIT_OR_STAND: &str = "Hit or Stand? (h/s): ";

impl Round {
    fn ensure_player_turn(&self) -> Result<(), RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }
        Ok(())
    }

    /// Runs the player's hit/stand loop.
    ///
    /// A hand over 21 ends the turn as [`PlayerTurnState::Busted`] before the
    /// player is asked again. Answers other than `h` or `s` are ignored and
    /// the question is repeated. After every hit the player's hand is shown.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the deck runs out, or
    /// the prompt fails.
    pub fn player_turn(&mut self, prompt: &mut dyn Prompt) -> Result<PlayerTurnState, RoundError> {
        self.ensure_player_turn()?;

        let mut turn = PlayerTurnState::Deciding;
        while !turn.is_terminal() {
            if self.player.value() > BLACKJACK {
                turn = PlayerTurnState::Busted;
                continue;
            }

            let answer = prompt.ask(HIT_OR_STAND)?;
            match PlayerAction::parse(&answer) {
                Some(PlayerAction::Hit) => {
                    self.hit()?;
                    prompt.show(&render_hand("Player Hand", &self.player));
                }
                Some(PlayerAction::Stand) => turn = PlayerTurnState::Stood,
                None => {
                    tracing::debug!(answer = answer.trim(), "unrecognized choice, asking again");
                }
            }
        }

        tracing::debug!(?turn, total = self.player.value(), "player turn over");
        self.state = RoundState::DealerTurn;
        Ok(turn)
    }

    /// Player action: Hit (draw a card).
    ///
    /// Under [`Difficulty::Fixed`](crate::Difficulty::Fixed), on every
    /// `rigged_interval`-th hand, a hit from a total of at least
    /// `rigged_min_total` takes the first ten-value card in the deck instead
    /// of the top card. Without a ten-value card left it is an ordinary draw.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.ensure_player_turn()?;

        let total = self.player.value();
        let card = if self.config.biased_draw_applies(total) {
            tracing::debug!(
                total,
                hand_count = self.config.hand_count,
                "biased draw engaged"
            );
            self.deck.draw_matching_value(RIGGED_DRAW_VALUE)?
        } else {
            self.deck.draw()?
        };

        self.player.add_card(card);
        tracing::debug!(%card, total = self.player.value(), "player hits");
        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_player_turn()?;
        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
