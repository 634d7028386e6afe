//! Python bindings for the word-relay engine.
//!
//! # Quick Start
//!
//! ```python
//! import word_relay
//!
//! game = word_relay.RelayGame(["지민", "현우", "서연"], shuffle=True, seed=7)
//! game.submit("사과")      # "accepted"
//! game.submit("자두")      # "eliminated"
//! game.new_round()
//!
//! saved = game.to_bytes()
//! restored = word_relay.RelayGame.from_bytes(saved)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// word_relay: turn and elimination rules for a word-chaining game.
#[pymodule]
fn word_relay(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRelayGame>()?;
    Ok(())
}
