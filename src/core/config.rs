//! Rule configuration.
//!
//! The defaults are the party game's house rules: at least two players,
//! words of at least two characters, and the last five words on display.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of participants to start a game.
pub const DEFAULT_MIN_PARTICIPANTS: usize = 2;

/// Minimum word length, in characters.
pub const DEFAULT_MIN_WORD_CHARS: usize = 2;

/// How many accepted words the history keeps.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// A configuration value outside the range the rules can work with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `min_participants` below 2.
    #[error("a relay needs at least 2 participants, configured {0}")]
    MinParticipants(usize),

    /// `min_word_chars` of 0.
    #[error("minimum word length must be at least 1")]
    MinWordChars,

    /// `history_limit` of 0.
    #[error("history must hold at least 1 word")]
    HistoryLimit,
}

/// Tunable rules for a relay game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Fewest names `start_game` accepts.
    pub min_participants: usize,

    /// Shortest word that counts as an attempt. Shorter input is a soft
    /// retry, not a rule violation.
    pub min_word_chars: usize,

    /// Capacity of the recent-word history.
    pub history_limit: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            min_participants: DEFAULT_MIN_PARTICIPANTS,
            min_word_chars: DEFAULT_MIN_WORD_CHARS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl RelayConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the bounds the builders assert.
    ///
    /// Needed for configs that bypass the builders, such as deserialized
    /// snapshots.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_participants < 2 {
            return Err(ConfigError::MinParticipants(self.min_participants));
        }
        if self.min_word_chars == 0 {
            return Err(ConfigError::MinWordChars);
        }
        if self.history_limit == 0 {
            return Err(ConfigError::HistoryLimit);
        }
        Ok(())
    }

    /// Set the minimum participant count.
    #[must_use]
    pub fn with_min_participants(mut self, count: usize) -> Self {
        assert!(count >= 2, "A relay needs at least 2 participants");
        self.min_participants = count;
        self
    }

    /// Set the minimum word length.
    #[must_use]
    pub fn with_min_word_chars(mut self, chars: usize) -> Self {
        assert!(chars >= 1, "Minimum word length must be at least 1");
        self.min_word_chars = chars;
        self
    }

    /// Set the history capacity.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        assert!(limit >= 1, "History must hold at least 1 word");
        self.history_limit = limit;
        self
    }
}
