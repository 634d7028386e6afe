//! Engine error types.
//!
//! Rule violations are not errors: a duplicate or broken chain is an
//! [`Outcome`](super::Outcome). Errors here mean the command itself could
//! not be applied, and the session it was given is left untouched.

use thiserror::Error;

use super::invariants::InvariantViolation;
use crate::core::ConfigError;

/// Why a roster was refused by `start_game`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParticipantError {
    /// Not enough names.
    #[error("need at least {min} participants, got {count}")]
    TooFew {
        /// Names supplied
        count: usize,
        /// Configured minimum
        min: usize,
    },

    /// More names than seat ids can number.
    #[error("at most {max} participants are supported, got {count}")]
    TooMany {
        /// Names supplied
        count: usize,
        /// Largest roster
        max: usize,
    },

    /// A name was empty or whitespace-only.
    #[error("participant {position} has a blank name")]
    BlankName {
        /// 1-based entry position
        position: usize,
    },
}

/// Errors that can occur when applying a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Roster failed validation.
    #[error("invalid participants: {0}")]
    InvalidParticipants(#[from] ParticipantError),

    /// A command other than start arrived before any game.
    #[error("no game has been started")]
    NotStarted,

    /// The game already has a winner.
    #[error("the game is over")]
    GameOver,

    /// A word arrived while an elimination awaits its follow-up.
    #[error("an elimination is waiting for a follow-up decision")]
    FollowupPending,

    /// A follow-up arrived with no elimination to resolve.
    #[error("no elimination is pending")]
    NoPendingElimination,
}

/// Why a saved game could not be restored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The saved rules are out of range.
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    /// The saved session breaks a session invariant.
    #[error("corrupt session: {0}")]
    Session(InvariantViolation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_error_display() {
        let err = ParticipantError::TooFew { count: 1, min: 2 };
        assert_eq!(err.to_string(), "need at least 2 participants, got 1");

        let err = ParticipantError::BlankName { position: 3 };
        assert_eq!(err.to_string(), "participant 3 has a blank name");
    }

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::from(ParticipantError::TooFew { count: 0, min: 2 });
        assert_eq!(err.to_string(), "invalid participants: need at least 2 participants, got 0");

        assert_eq!(EngineError::GameOver.to_string(), "the game is over");
        assert_eq!(EngineError::NoPendingElimination.to_string(), "no elimination is pending");
    }

    #[test]
    fn test_snapshot_error_display() {
        let err = SnapshotError::from(ConfigError::HistoryLimit);
        assert_eq!(err.to_string(), "invalid config: history must hold at least 1 word");
    }
}
