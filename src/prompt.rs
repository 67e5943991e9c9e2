//! Player input.
//!
//! The engine never touches the terminal directly. It asks questions and
//! shows text through a [`Prompt`], so scripted input can stand in for a
//! human.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::PromptError;

/// Synchronous question/answer channel to the player.
pub trait Prompt {
    /// Asks a question and blocks until an answer line arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be read.
    fn ask(&mut self, question: &str) -> Result<String, PromptError>;

    /// Shows text to the player.
    fn show(&mut self, text: &str);
}

/// A decision on the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl PlayerAction {
    /// Parses `h` or `s`, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("h") {
            Some(Self::Hit)
        } else if input.eq_ignore_ascii_case("s") {
            Some(Self::Stand)
        } else {
            None
        }
    }
}

/// Returns whether a "play again" answer means yes. Only `y` does.
#[must_use]
pub fn parse_play_again(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// A [`Prompt`] that replays scripted answers and records everything.
///
/// Asking after the script runs out fails with [`PromptError::Closed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    questions: Vec<String>,
    shown: Vec<String>,
}

impl ScriptedPrompt {
    /// Creates a prompt that answers with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
            shown: Vec::new(),
        }
    }

    /// Questions asked so far.
    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Text shown so far.
    #[must_use]
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or(PromptError::Closed)
    }

    fn show(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
}

#[cfg(feature = "std")]
pub use stdio::StdioPrompt;

#[cfg(feature = "std")]
mod stdio {
    use std::io::{self, BufRead, Write};

    use alloc::string::String;

    use super::Prompt;
    use crate::error::PromptError;

    /// A [`Prompt`] on the process's stdin and stdout.
    #[derive(Debug, Default)]
    pub struct StdioPrompt;

    impl StdioPrompt {
        /// Creates a prompt bound to the terminal.
        #[must_use]
        pub const fn new() -> Self {
            Self
        }
    }

    impl Prompt for StdioPrompt {
        fn ask(&mut self, question: &str) -> Result<String, PromptError> {
            let mut stdout = io::stdout().lock();
            let _ = write!(stdout, "{question}");
            let _ = stdout.flush();
            drop(stdout);

            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) => Err(PromptError::Closed),
                Ok(_) => Ok(line),
                Err(err) => {
                    tracing::error!(error = %err, "failed to read from stdin");
                    Err(PromptError::Read)
                }
            }
        }

        fn show(&mut self, text: &str) {
            let mut stdout = io::stdout().lock();
            let _ = writeln!(stdout, "{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_parsing_ignores_case() {
        assert_eq!(PlayerAction::parse("h\n"), Some(PlayerAction::Hit));
        assert_eq!(PlayerAction::parse("S"), Some(PlayerAction::Stand));
        assert_eq!(PlayerAction::parse("hit"), None);
        assert_eq!(PlayerAction::parse(""), None);
    }

    #[test]
    fn only_y_plays_again() {
        assert!(parse_play_again("y"));
        assert!(parse_play_again("Y\n"));
        assert!(!parse_play_again("yes"));
        assert!(!parse_play_again("n"));
        assert!(!parse_play_again(""));
    }

    #[test]
    fn scripted_prompt_records_and_closes() {
        let mut prompt = ScriptedPrompt::new(["a"]);
        assert_eq!(prompt.ask("first?"), Ok(String::from("a")));
        assert_eq!(prompt.ask("second?"), Err(PromptError::Closed));
        prompt.show("hello");
        assert_eq!(prompt.questions(), ["first?", "second?"]);
        assert_eq!(prompt.shown(), ["hello"]);
    }
}
