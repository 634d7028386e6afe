//! # word-relay
//!
//! Turn and elimination rules for a word-chaining party game played by a
//! fixed group sharing one keyboard.
//!
//! Each word must be new this round and must start with the last
//! character of the previous word. Breaking either rule knocks the player
//! out; the last one standing wins.
//!
//! ## Design Principles
//!
//! 1. **Value Transitions**: The engine never holds a session. Every
//!    command takes the current `GameSession` and returns the next one, so
//!    a failed command cannot leave a half-applied state behind.
//!
//! 2. **Explicit Decisions**: The table's choices (shuffle the seats,
//!    continue or reset after an elimination) arrive as commands. The
//!    engine never prompts.
//!
//! 3. **Cheap Snapshots**: Session collections are `im` persistent
//!    structures, so cloning a session per transition is O(1).
//!
//! ## Modules
//!
//! - `core`: Participants, RNG, configuration, commands, session
//! - `rules`: The engine, chain rule, outcomes, invariant checks, snapshots
//! - `view`: Board projection for front-ends
//!
//! ## Example
//!
//! ```
//! use word_relay::{GameRng, Outcome, RelayEngine, StartGameRequest};
//!
//! let mut engine = RelayEngine::new(GameRng::new(42));
//! let session = engine
//!     .start_game(&StartGameRequest::new(["지민", "현우"], false))
//!     .unwrap();
//!
//! let t = engine.submit_word(&session, "사과").unwrap();
//! assert_eq!(t.outcome, Outcome::Accepted { new_round: false });
//!
//! let t = engine.submit_word(&t.session, "자두").unwrap();
//! assert!(matches!(t.outcome, Outcome::GameOver { .. }));
//! assert_eq!(t.session.winner().unwrap().name, "지민");
//! ```

pub mod core;
pub mod rules;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Participant, ParticipantId, Roster,
    GameRng, GameRngState,
    ConfigError, RelayConfig,
    Command, EliminationFollowup, StartGameRequest,
    GameSession, Phase,
};

pub use crate::rules::{
    RelayEngine, Transition,
    Outcome, RejectReason, EliminationReason,
    EngineError, ParticipantError, SnapshotError,
    GameSnapshot,
    check_invariants, InvariantViolation,
};

pub use crate::view::{Board, PromptHint, RosterEntry, SeatStatus};
