//! Game configuration options.

use core::fmt;
use core::num::IntErrorKind;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::SessionError;

/// House difficulty, chosen once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Every draw is a plain draw from the deck.
    #[default]
    Normal,
    /// Enables the biased draw on every few hands.
    Fixed,
    /// Any other selector number. Plays exactly like [`Difficulty::Normal`].
    Unrecognized(i64),
}

impl Difficulty {
    /// Maps the numeric selector (1 = Normal, 2 = Fixed) to a difficulty.
    #[must_use]
    pub const fn from_selector(selector: i64) -> Self {
        match selector {
            1 => Self::Normal,
            2 => Self::Fixed,
            other => Self::Unrecognized(other),
        }
    }

    /// Returns whether the biased draw can ever engage.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed)
    }
}

impl FromStr for Difficulty {
    type Err = SessionError;

    /// Parses a selector number. Whitespace around the number is ignored.
    ///
    /// Integers outside the `i64` range are still integers: they saturate to
    /// a [`Difficulty::Unrecognized`] selector instead of failing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        match text.parse::<i64>() {
            Ok(selector) => Ok(Self::from_selector(selector)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Ok(Self::Unrecognized(i64::MAX)),
                IntErrorKind::NegOverflow => Ok(Self::Unrecognized(i64::MIN)),
                _ => Err(SessionError::InvalidDifficulty(text.to_string())),
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("Normal"),
            Self::Fixed => f.write_str("Fixed"),
            Self::Unrecognized(n) => write!(f, "unrecognized ({n})"),
        }
    }
}

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjterm::{Difficulty, GameOptions};
///
/// let options = GameOptions::default()
///     .with_difficulty(Difficulty::Fixed)
///     .with_rigged_interval(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Preset difficulty. When `None` the session asks the player.
    pub difficulty: Option<Difficulty>,
    /// The biased draw may engage on hands whose count is a multiple of
    /// this. 0 disables it.
    pub rigged_interval: u32,
    /// Minimum player total before the draw for the biased draw to engage.
    pub rigged_min_total: u16,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            difficulty: None,
            rigged_interval: 5,
            rigged_min_total: 15,
        }
    }
}

impl GameOptions {
    /// Presets the difficulty so the session does not ask for it.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::{Difficulty, GameOptions};
    ///
    /// let options = GameOptions::default().with_difficulty(Difficulty::Fixed);
    /// assert_eq!(options.difficulty, Some(Difficulty::Fixed));
    /// ```
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Sets the hand interval of the biased draw.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::GameOptions;
    ///
    /// let options = GameOptions::default().with_rigged_interval(0);
    /// assert_eq!(options.rigged_interval, 0);
    /// ```
    #[must_use]
    pub const fn with_rigged_interval(mut self, interval: u32) -> Self {
        self.rigged_interval = interval;
        self
    }

    /// Sets the minimum total for the biased draw.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::GameOptions;
    ///
    /// let options = GameOptions::default().with_rigged_min_total(17);
    /// assert_eq!(options.rigged_min_total, 17);
    /// ```
    #[must_use]
    pub const fn with_rigged_min_total(mut self, total: u16) -> Self {
        self.rigged_min_total = total;
        self
    }

    /// Builds the configuration for one round.
    #[must_use]
    pub const fn round_config(&self, difficulty: Difficulty, hand_count: u32) -> RoundConfig {
        RoundConfig {
            difficulty,
            hand_count,
            rigged_interval: self.rigged_interval,
            rigged_min_total: self.rigged_min_total,
        }
    }
}

/// Per-round settings threaded from the session into the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// Session difficulty.
    pub difficulty: Difficulty,
    /// 1-based count of hands played this session, including this one.
    pub hand_count: u32,
    /// See [`GameOptions::rigged_interval`].
    pub rigged_interval: u32,
    /// See [`GameOptions::rigged_min_total`].
    pub rigged_min_total: u16,
}

impl RoundConfig {
    /// Creates a round configuration with the default biased-draw rule.
    #[must_use]
    pub fn new(difficulty: Difficulty, hand_count: u32) -> Self {
        GameOptions::default().round_config(difficulty, hand_count)
    }

    /// Returns whether a hit at `total` must use the biased draw.
    #[must_use]
    pub const fn biased_draw_applies(&self, total: u16) -> bool {
        if !self.difficulty.is_fixed() || total < self.rigged_min_total {
            return false;
        }
        match self.hand_count.checked_rem(self.rigged_interval) {
            Some(rem) => rem == 0,
            None => false,
        }
    }
}
