//! Core game types: participants, RNG, configuration, commands, session.
//!
//! Nothing here knows the chaining rules. The `rules` module drives the
//! session through its transitions.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Participant, ParticipantId, Roster};
pub use rng::{GameRng, GameRngState};
pub use config::{ConfigError, RelayConfig};
pub use action::{Command, EliminationFollowup, StartGameRequest};
pub use state::{GameSession, Phase};
