//! A single-player terminal blackjack game with an optional `no_std` engine.
//!
//! A [`Round`] owns one freshly shuffled deck and both hands. It deals,
//! runs the player's hit/stand loop through a [`Prompt`], plays the dealer
//! out to 17 and resolves the [`Outcome`]. A [`Session`] repeats rounds and
//! keeps the hand counter that drives the optional biased draw.
//!
//! # Example
//!
//! ```
//! use bjterm::{Difficulty, GameOptions, ScriptedPrompt, Session};
//!
//! let options = GameOptions::default().with_difficulty(Difficulty::Normal);
//! let mut session = Session::new(options, 42);
//! // Stand on the first decision, then decline another round.
//! let mut prompt = ScriptedPrompt::new(["s", "n"]);
//! let summary = session.run(&mut prompt).unwrap();
//! assert_eq!(summary.rounds, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
#[cfg(feature = "std")]
pub mod logging;
pub mod options;
pub mod prompt;
pub mod render;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{COPIES_PER_RANK, Card, DECK_SIZE, Rank};
pub use deck::Deck;
pub use error::{DeckError, PromptError, RoundError, SessionError};
pub use game::{
    DEALER_STANDS_ON, PlayerTurnState, RIGGED_DRAW_VALUE, Round, RoundState, resolve,
};
pub use hand::{BLACKJACK, Hand, Seat, hand_value, is_blackjack};
pub use options::{Difficulty, GameOptions, RoundConfig};
#[cfg(feature = "std")]
pub use prompt::StdioPrompt;
pub use prompt::{PlayerAction, Prompt, ScriptedPrompt};
pub use result::{Outcome, RoundResult, SessionSummary};
pub use session::Session;
