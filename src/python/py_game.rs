//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{GameRng, GameSession, Phase, StartGameRequest};
use crate::rules::{EngineError, GameSnapshot, Outcome, RelayEngine};
use crate::view::PromptHint;

fn engine_err(e: EngineError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Python wrapper holding an engine and its current session.
#[pyclass(name = "RelayGame")]
pub struct PyRelayGame {
    engine: RelayEngine,
    session: GameSession,
}

#[pymethods]
impl PyRelayGame {
    /// Seat a new game.
    ///
    /// # Arguments
    /// - names: Participant names in entry order (2 or more)
    /// - shuffle: Shuffle the seating order
    /// - seed: RNG seed; random when omitted
    #[new]
    #[pyo3(signature = (names, shuffle = false, seed = None))]
    fn new(names: Vec<String>, shuffle: bool, seed: Option<u64>) -> PyResult<Self> {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut engine = RelayEngine::new(rng);
        let session = engine
            .start_game(&StartGameRequest::new(names, shuffle))
            .map_err(engine_err)?;
        Ok(Self { engine, session })
    }

    /// Submit the current player's word.
    ///
    /// Returns the outcome tag: "rejected", "accepted", "eliminated",
    /// or "game-over".
    fn submit(&mut self, word: &str) -> PyResult<&'static str> {
        let t = self
            .engine
            .submit_word(&self.session, word)
            .map_err(engine_err)?;
        let tag = t.outcome.tag();
        self.session = t.session;
        Ok(tag)
    }

    /// Keep the words and pass play on after an elimination.
    fn continue_round(&mut self) -> PyResult<()> {
        let t = self.engine.continue_round(&self.session).map_err(engine_err)?;
        self.session = t.session;
        Ok(())
    }

    /// Clear the words and start a fresh round after an elimination.
    fn new_round(&mut self) -> PyResult<bool> {
        let t = self.engine.start_new_round(&self.session).map_err(engine_err)?;
        self.session = t.session;
        Ok(matches!(t.outcome, Outcome::Accepted { new_round: true }))
    }

    /// Word on the table.
    #[getter]
    fn current_word(&self) -> String {
        self.session.current_word().to_string()
    }

    /// Name of the player whose turn it is.
    #[getter]
    fn current_player(&self) -> String {
        self.session.current_player().name.clone()
    }

    /// Recent words, oldest first.
    #[getter]
    fn history(&self) -> Vec<String> {
        self.session.word_history().iter().cloned().collect()
    }

    /// Input prompt text.
    #[getter]
    fn hint(&self) -> String {
        PromptHint::for_session(&self.session).to_string()
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// Winner's name once the game is over.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.session.winner().map(|p| p.name.clone())
    }

    #[getter]
    fn phase(&self) -> &'static str {
        match self.session.phase() {
            Phase::AwaitingFirstWord => "awaiting-first-word",
            Phase::Playing => "playing",
            Phase::RoundEnded => "round-ended",
            Phase::GameOver => "game-over",
        }
    }

    /// Serialize the game, RNG position included.
    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let snapshot = GameSnapshot::capture(&self.engine, &self.session);
        let data = bincode::serialize(&snapshot).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyBytes::new_bound(py, &data))
    }

    /// Rebuild a game from `to_bytes` output.
    ///
    /// Raises `ValueError` on undecodable bytes, out-of-range rules, or an
    /// inconsistent session.
    #[staticmethod]
    fn from_bytes(data: &[u8]) -> PyResult<Self> {
        let snapshot: GameSnapshot =
            bincode::deserialize(data).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let (engine, session) = snapshot
            .restore()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine, session })
    }

    fn __repr__(&self) -> String {
        format!(
            "RelayGame(round={}, active={}, phase={})",
            self.session.round(),
            self.session.active_count(),
            self.phase()
        )
    }
}
