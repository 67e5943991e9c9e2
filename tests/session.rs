//! Session loop integration tests.

use std::collections::VecDeque;

use bjterm::{
    Difficulty, GameOptions, Prompt, PromptError, ScriptedPrompt, Session, SessionError,
};

/// Stands on every decision and answers "Play again?" from a script.
struct Stander {
    difficulty: &'static str,
    replies: VecDeque<&'static str>,
    questions: Vec<String>,
    shown: Vec<String>,
}

impl Stander {
    /// Asks for `rounds` rounds in total.
    fn new(difficulty: &'static str, rounds: usize) -> Self {
        let mut replies = vec!["y"; rounds.saturating_sub(1)];
        replies.push("n");
        Self::with_replies(difficulty, replies)
    }

    fn with_replies(difficulty: &'static str, replies: Vec<&'static str>) -> Self {
        Self {
            difficulty,
            replies: replies.into(),
            questions: Vec::new(),
            shown: Vec::new(),
        }
    }

    fn replay_questions(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| q.starts_with("Play again"))
            .count()
    }
}

impl Prompt for Stander {
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        self.questions.push(question.to_string());
        if question.starts_with("Choose difficulty") {
            Ok(self.difficulty.to_string())
        } else if question.starts_with("Hit or Stand") {
            Ok("s".to_string())
        } else {
            self.replies
                .pop_front()
                .map(str::to_string)
                .ok_or(PromptError::Closed)
        }
    }

    fn show(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
}

#[test]
fn non_numeric_difficulty_ends_session() {
    let mut session = Session::new(GameOptions::default(), 1);
    let mut prompt = ScriptedPrompt::new(["hard"]);

    let err = session.run(&mut prompt).unwrap_err();

    assert_eq!(err, SessionError::InvalidDifficulty("hard".to_string()));
    assert_eq!(session.hand_count(), 0);
}

#[test]
fn difficulty_parsing() {
    assert_eq!(" 1\n".parse::<Difficulty>(), Ok(Difficulty::Normal));
    assert_eq!("2".parse::<Difficulty>(), Ok(Difficulty::Fixed));
    assert_eq!("3".parse::<Difficulty>(), Ok(Difficulty::Unrecognized(3)));
    assert_eq!("-7".parse::<Difficulty>(), Ok(Difficulty::Unrecognized(-7)));
    assert!("1.5".parse::<Difficulty>().is_err());
    assert!(!Difficulty::Unrecognized(3).is_fixed());

    assert_eq!(
        "99999999999999999999".parse::<Difficulty>(),
        Ok(Difficulty::Unrecognized(i64::MAX))
    );
    assert_eq!(
        "-99999999999999999999".parse::<Difficulty>(),
        Ok(Difficulty::Unrecognized(i64::MIN))
    );
    assert_eq!(
        "9x".parse::<Difficulty>(),
        Err(SessionError::InvalidDifficulty("9x".to_string()))
    );
}

#[test]
fn huge_difficulty_number_is_played() {
    let mut session = Session::new(GameOptions::default(), 7);
    let mut prompt = Stander::new("99999999999999999999", 1);

    let summary = session.run(&mut prompt).unwrap();

    assert_eq!(summary.rounds, 1);
    assert_eq!(prompt.replay_questions(), 1);
}

#[test]
fn unrecognized_difficulty_is_played() {
    let mut session = Session::new(GameOptions::default(), 7);
    let mut prompt = Stander::new("3", 1);

    let summary = session.run(&mut prompt).unwrap();

    assert_eq!(summary.rounds, 1);
    assert_eq!(session.hand_count(), 1);
}

#[test]
fn plays_until_player_declines() {
    let mut session = Session::new(GameOptions::default(), 2024);
    let mut prompt = Stander::new("2", 3);

    let summary = session.run(&mut prompt).unwrap();

    assert_eq!(summary.rounds, 3);
    assert_eq!(
        summary.player_wins + summary.dealer_wins + summary.ties,
        3
    );
    assert_eq!(summary.aborted, 0);
    assert_eq!(session.hand_count(), 3);
    assert_eq!(session.summary(), &summary);

    assert_eq!(prompt.shown.first().map(String::as_str), Some("Welcome to Blackjack!\n"));
    let results = prompt
        .shown
        .iter()
        .filter(|text| text.starts_with("\nResult: "))
        .count();
    assert_eq!(results, 3);
    assert!(prompt.shown.iter().any(|text| text == "Thanks for playing!"));
    assert_eq!(prompt.shown.last(), Some(&summary.to_string()));
}

#[test]
fn preset_difficulty_skips_question() {
    let options = GameOptions::default().with_difficulty(Difficulty::Fixed);
    let mut session = Session::new(options, 3);
    let mut prompt = Stander::new("not asked", 1);

    session.run(&mut prompt).unwrap();

    assert!(
        prompt
            .questions
            .iter()
            .all(|q| !q.starts_with("Choose difficulty"))
    );
}

#[test]
fn same_seed_same_session() {
    let mut first = Stander::new("1", 4);
    let mut second = Stander::new("1", 4);

    let a = Session::new(GameOptions::default(), 99).run(&mut first).unwrap();
    let b = Session::new(GameOptions::default(), 99).run(&mut second).unwrap();

    assert_eq!(a, b);
    assert_eq!(first.shown, second.shown);
}

#[test]
fn closed_input_ends_session_with_error() {
    let mut session = Session::new(GameOptions::default(), 5);
    let mut prompt = ScriptedPrompt::new(["1"]);

    let err = session.run(&mut prompt).unwrap_err();

    assert_eq!(err, SessionError::Prompt(PromptError::Closed));
}

#[test]
fn only_y_continues() {
    let options = GameOptions::default().with_difficulty(Difficulty::Normal);
    let mut session = Session::new(options, 11);
    let mut prompt = Stander::with_replies("not asked", vec!["Y", "yes", "y"]);

    let summary = session.run(&mut prompt).unwrap();

    // "Y" continues, "yes" ends the session and "y" is never asked for.
    assert_eq!(summary.rounds, 2);
    assert_eq!(prompt.replay_questions(), 2);
    assert_eq!(prompt.replies, ["y"]);
}

#[test]
fn session_hand_count_reaches_round_config() {
    let options = GameOptions::default().with_difficulty(Difficulty::Fixed);
    let mut session = Session::new(options, 8);
    let mut prompt = Stander::with_replies("not asked", Vec::new());

    for hand in 1..=5 {
        let result = session.play_round(Difficulty::Fixed, &mut prompt).unwrap();
        assert_eq!(result.hand_count, hand);
        assert_eq!(session.hand_count(), hand);

        let config = session.options().round_config(Difficulty::Fixed, session.hand_count());
        assert_eq!(config.hand_count, hand);
        assert_eq!(config.biased_draw_applies(15), hand == 5);
    }
    assert_eq!(session.summary().rounds, 5);
}
