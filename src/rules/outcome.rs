//! Outcome classification for engine transitions.

use serde::{Deserialize, Serialize};

use crate::core::{GameSession, ParticipantId};

/// Why input was bounced back without consequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Nothing but whitespace.
    Empty,
    /// Shorter than the minimum word length.
    TooShort,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Empty => write!(f, "empty"),
            RejectReason::TooShort => write!(f, "too-short"),
        }
    }
}

/// Rule violation that knocks a player out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EliminationReason {
    /// Word already played this round.
    DuplicateWord,
    /// Word does not start with the previous word's last character.
    ChainViolation {
        /// Character the word had to start with
        expected: char,
        /// Character it started with
        found: char,
    },
}

impl std::fmt::Display for EliminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EliminationReason::DuplicateWord => write!(f, "duplicate-word"),
            EliminationReason::ChainViolation { .. } => write!(f, "chain-violation"),
        }
    }
}

/// What a committed command did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A new game was seated.
    Started,
    /// Input refused; same player tries again, session unchanged.
    Rejected(RejectReason),
    /// Play moved on to the next player.
    ///
    /// `new_round` is set when the words were just cleared.
    Accepted {
        /// Round was reset by this command
        new_round: bool,
    },
    /// A player is out and more than one remain.
    Eliminated {
        /// Who went out
        player: ParticipantId,
        /// Which rule they broke
        reason: EliminationReason,
    },
    /// The elimination left a single participant.
    GameOver {
        /// Who went out last
        eliminated: ParticipantId,
        /// Which rule they broke
        reason: EliminationReason,
        /// Last one standing
        winner: ParticipantId,
    },
}

impl Outcome {
    /// Short tag for logs and bindings.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Started => "started",
            Outcome::Rejected(_) => "rejected",
            Outcome::Accepted { .. } => "accepted",
            Outcome::Eliminated { .. } => "eliminated",
            Outcome::GameOver { .. } => "game-over",
        }
    }

    /// Check if this outcome left the session unchanged.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

/// Result of applying a command: the next session and what happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Session after the command.
    pub session: GameSession,
    /// Classification of the command's effect.
    pub outcome: Outcome,
}

impl Transition {
    /// Create a transition.
    #[must_use]
    pub fn new(session: GameSession, outcome: Outcome) -> Self {
        Self { session, outcome }
    }
}
