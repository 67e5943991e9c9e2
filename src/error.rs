//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors raised by a [`Prompt`](crate::prompt::Prompt) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PromptError {
    /// The input stream was closed before an answer arrived.
    #[error("input stream closed")]
    Closed,
    /// Reading the answer failed.
    #[error("failed to read input")]
    Read,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The deck ran out of cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// The player could not be asked for a decision.
    #[error(transparent)]
    Prompt(#[from] PromptError),
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
}

/// Errors that end a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The difficulty selection was not an integer.
    #[error("invalid difficulty selection: '{0}' is not a number")]
    InvalidDifficulty(String),
    /// A round failed in a way the session cannot recover from.
    #[error("round failed: {0}")]
    Round(#[from] RoundError),
    /// The player could not be asked for a decision.
    #[error(transparent)]
    Prompt(#[from] PromptError),
}
