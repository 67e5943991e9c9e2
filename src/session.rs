//! The replay loop around individual rounds.

use alloc::format;
use alloc::string::ToString;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{RoundError, SessionError};
use crate::game::Round;
use crate::options::{Difficulty, GameOptions};
use crate::prompt::{Prompt, parse_play_again};
use crate::result::{RoundResult, SessionSummary};

const WELCOME: &str = "Welcome to Blackjack!\n";
const CHOOSE_DIFFICULTY: &str = "Choose difficulty (1 = Normal, 2 = Fixed): ";
const PLAY_AGAIN: &str = "Play again? (y/n): ";
const FAREWELL: &str = "Thanks for playing!";

/// A sequence of rounds against the dealer.
///
/// The session owns the random number generator and the hand counter. Each
/// round gets a fresh, freshly shuffled deck.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session options.
    options: GameOptions,
    /// Hands played so far, including the current one.
    hand_count: u32,
    /// Tally of finished rounds.
    summary: SessionSummary,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::{GameOptions, Session};
    ///
    /// let session = Session::new(GameOptions::default(), 42);
    /// assert_eq!(session.hand_count(), 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            hand_count: 0,
            summary: SessionSummary::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Runs rounds until the player declines another one.
    ///
    /// Asks for the difficulty first unless the options preset it. A round
    /// aborted because the deck ran out is reported and counted; the player
    /// is then asked whether to continue as usual.
    ///
    /// # Errors
    ///
    /// Returns an error if the difficulty is not a number or the prompt
    /// fails.
    pub fn run(&mut self, prompt: &mut dyn Prompt) -> Result<SessionSummary, SessionError> {
        prompt.show(WELCOME);

        let difficulty = match self.options.difficulty {
            Some(difficulty) => difficulty,
            None => ask_difficulty(prompt)?,
        };
        tracing::info!(%difficulty, "session started");

        loop {
            match self.play_round(difficulty, prompt) {
                Ok(result) => {
                    prompt.show(&format!("\nResult: {}", result.outcome));
                }
                Err(RoundError::Deck(err)) => {
                    tracing::error!(error = %err, hand_count = self.hand_count, "round aborted");
                    prompt.show(&format!("\nRound aborted: {err}"));
                }
                Err(RoundError::Prompt(err)) => return Err(err.into()),
                Err(err) => return Err(err.into()),
            }

            let again = prompt.ask(PLAY_AGAIN)?;
            if !parse_play_again(&again) {
                break;
            }
        }

        prompt.show(FAREWELL);
        prompt.show(&self.summary.to_string());
        tracing::info!(rounds = self.summary.rounds, "session finished");

        Ok(self.summary)
    }

    /// Plays the next round and records its outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the round fails.
    pub fn play_round(
        &mut self,
        difficulty: Difficulty,
        prompt: &mut dyn Prompt,
    ) -> Result<RoundResult, RoundError> {
        self.hand_count += 1;
        let config = self.options.round_config(difficulty, self.hand_count);

        let result = Round::new(config, &mut self.rng)
            .map_err(RoundError::from)
            .and_then(|round| round.play(prompt));

        match &result {
            Ok(result) => self.summary.record(result.outcome),
            Err(RoundError::Deck(_)) => self.summary.record_aborted(),
            Err(_) => {}
        }

        result
    }

    /// Returns the number of hands played so far.
    #[must_use]
    pub const fn hand_count(&self) -> u32 {
        self.hand_count
    }

    /// Returns the tally of finished rounds.
    #[must_use]
    pub const fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }
}

/// Asks for the difficulty selector.
///
/// Any integer is accepted; numbers other than 1 and 2 play as Normal.
///
/// # Errors
///
/// Returns [`SessionError::InvalidDifficulty`] if the answer is not an
/// integer, or a prompt error if no answer can be read.
pub fn ask_difficulty(prompt: &mut dyn Prompt) -> Result<Difficulty, SessionError> {
    let answer = prompt.ask(CHOOSE_DIFFICULTY)?;
    let difficulty: Difficulty = answer.parse()?;
    if let Difficulty::Unrecognized(selector) = difficulty {
        tracing::warn!(selector, "unrecognized difficulty, playing as Normal");
    }
    Ok(difficulty)
}
