//! Terminal front-end for word-relay.

pub(crate) mod play;

mod console;

use clap::ValueEnum;
use thiserror::Error;

use word_relay::EngineError;

/// What to do after an elimination that leaves players standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FollowupPolicy {
    /// Ask the table every time.
    Ask,
    /// Keep the words and play on.
    Continue,
    /// Always start a fresh round.
    NewRound,
}

/// CLI error type.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Terminal I/O failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The engine refused a command.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
