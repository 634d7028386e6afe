//! The word-relay rules.
//!
//! - `engine`: the turn/elimination state machine
//! - `chain`: character-level chain rule
//! - `outcome`: classification of each transition
//! - `invariants`: session sanity checks
//! - `snapshot`: saved games

pub mod chain;
pub mod engine;
pub mod error;
pub mod invariants;
pub mod outcome;
pub mod snapshot;

pub use chain::Link;
pub use engine::{RelayEngine, MAX_PARTICIPANTS};
pub use error::{EngineError, ParticipantError, SnapshotError};
pub use invariants::{check_invariants, InvariantViolation};
pub use outcome::{EliminationReason, Outcome, RejectReason, Transition};
pub use snapshot::GameSnapshot;
