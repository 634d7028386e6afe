//! Saved games.
//!
//! A [`GameSnapshot`] holds everything needed to resume play: the rules,
//! the RNG position, and the session. Encoding is left to the caller.
//! Restoring re-checks the config bounds and the session invariants, since
//! deserialized data never passed through the engine.

use serde::{Deserialize, Serialize};

use super::engine::RelayEngine;
use super::error::SnapshotError;
use super::invariants::check_invariants;
use crate::core::{GameRng, GameRngState, GameSession, RelayConfig};

/// A resumable game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Rule configuration.
    pub config: RelayConfig,
    /// Seat-shuffling RNG position.
    pub rng: GameRngState,
    /// Session at the time of the save.
    pub session: GameSession,
}

impl GameSnapshot {
    /// Capture an engine and its session.
    #[must_use]
    pub fn capture(engine: &RelayEngine, session: &GameSession) -> Self {
        Self {
            config: engine.config().clone(),
            rng: engine.rng().state(),
            session: session.clone(),
        }
    }

    /// Rebuild the engine and session.
    ///
    /// Fails on out-of-range rules or a session that violates an invariant.
    pub fn restore(self) -> Result<(RelayEngine, GameSession), SnapshotError> {
        self.config.validate()?;
        if let Some(violation) = check_invariants(&self.session, &self.config).into_iter().next() {
            return Err(SnapshotError::Session(violation));
        }

        let engine = RelayEngine::with_config(self.config, GameRng::from_state(&self.rng));
        Ok((engine, self.session))
    }
}
