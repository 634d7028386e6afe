//! Commands the interaction layer feeds into the engine.
//!
//! The engine never asks the humans anything. Where the table has to make
//! a decision (seat order, what happens after an elimination) the answer
//! arrives as an explicit command.

use serde::{Deserialize, Serialize};

/// Roster and seating choice for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartGameRequest {
    /// Participant names in entry order.
    pub names: Vec<String>,
    /// Shuffle seats before assigning ids.
    pub shuffle: bool,
}

impl StartGameRequest {
    /// Create a request.
    pub fn new<I, S>(names: I, shuffle: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            shuffle,
        }
    }
}

/// What the table decided after an elimination that left players standing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EliminationFollowup {
    /// Keep the current word and used words; play passes on.
    Continue,
    /// Clear the words and start a fresh round.
    NewRound,
}

/// A single engine command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start a new game, discarding any previous session.
    Start(StartGameRequest),
    /// The current player's raw input.
    Submit(String),
    /// Resolve a pending elimination.
    Followup(EliminationFollowup),
}

impl Command {
    /// Submit a word.
    pub fn submit(word: impl Into<String>) -> Self {
        Self::Submit(word.into())
    }
}
