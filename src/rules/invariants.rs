//! Session invariants - sanity checks that detect engine bugs.
//!
//! None of these should ever fire for a session produced by the engine.
//! Property tests run them after every transition.

use crate::core::{GameSession, Phase, RelayConfig};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all session invariants.
///
/// Returns every violation found, or empty if all hold.
#[must_use]
pub fn check_invariants(session: &GameSession, config: &RelayConfig) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let roster = session.participants();
    let active = roster.active_count();

    if session.active_count() != active {
        violations.push(InvariantViolation::new(format!(
            "active_count {} but {} participants are active",
            session.active_count(),
            active
        )));
    }

    if active == 0 || active > roster.len() {
        violations.push(InvariantViolation::new(format!(
            "{} active of {} seats",
            active,
            roster.len()
        )));
    }

    if session.is_over() != (active == 1) {
        violations.push(InvariantViolation::new(format!(
            "is_over = {} with {} active",
            session.is_over(),
            active
        )));
    }

    for (i, p) in roster.iter().enumerate() {
        if p.id.index() != i {
            violations.push(InvariantViolation::new(format!(
                "seat {} carries id {}",
                i, p.id
            )));
        }
    }

    let Some(current) = roster.get(session.current_player_index()) else {
        violations.push(InvariantViolation::new(format!(
            "current index {} out of {} seats",
            session.current_player_index(),
            roster.len()
        )));
        return violations;
    };

    match session.phase() {
        Phase::AwaitingFirstWord | Phase::Playing if !current.active => {
            violations.push(InvariantViolation::new(format!(
                "turn belongs to eliminated participant {current}"
            )));
        }
        Phase::RoundEnded => {
            let pending = session.pending_elimination().map(|p| p.id);
            if pending != Some(current.id) || current.active {
                violations.push(InvariantViolation::new(format!(
                    "pending elimination {pending:?} does not match current {current}"
                )));
            }
        }
        _ => {}
    }

    let history = session.word_history();
    if history.len() > config.history_limit {
        violations.push(InvariantViolation::new(format!(
            "history holds {} words, limit {}",
            history.len(),
            config.history_limit
        )));
    }

    if let Some(word) = history.iter().find(|w| !session.is_used(w)) {
        violations.push(InvariantViolation::new(format!(
            "history word {word:?} missing from used words"
        )));
    }

    let newest = history.last().map(String::as_str).unwrap_or("");
    if newest != session.current_word() {
        violations.push(InvariantViolation::new(format!(
            "current word {:?} but newest history entry {:?}",
            session.current_word(),
            newest
        )));
    }

    violations
}
