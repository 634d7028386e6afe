//! The relay engine: turn, chain, and elimination rules.
//!
//! The engine owns the rule configuration and the RNG used to shuffle
//! seats. It never owns a session: each transition takes the current
//! session by reference and returns the next one, leaving the input
//! untouched. A command that returns `Err` commits nothing.
//!
//! ## Word validation order
//!
//! 1. Empty after trimming: rejected
//! 2. Shorter than `min_word_chars`: rejected
//! 3. Already used this round: eliminated
//! 4. First word of the round: accepted
//! 5. Breaks the chain: eliminated, otherwise accepted

use tracing::{debug, info};

use super::chain::{self, Link};
use super::error::{EngineError, ParticipantError};
use super::outcome::{EliminationReason, Outcome, RejectReason, Transition};
use crate::core::{
    Command, EliminationFollowup, GameRng, GameSession, Phase, RelayConfig, Roster,
    StartGameRequest,
};

/// Upper bound on roster size; seat ids are `u16`.
pub const MAX_PARTICIPANTS: usize = u16::MAX as usize;

/// Word-relay rules engine.
#[derive(Clone, Debug)]
pub struct RelayEngine {
    config: RelayConfig,
    rng: GameRng,
}

impl RelayEngine {
    /// Create an engine with the default rules.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_config(RelayConfig::default(), rng)
    }

    /// Create an engine with custom rules.
    #[must_use]
    pub fn with_config(config: RelayConfig, rng: GameRng) -> Self {
        Self { config, rng }
    }

    /// Get the rule configuration.
    #[must_use]
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Get the seat-shuffling RNG.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    // === Commands ===

    /// Seat a new game.
    ///
    /// Names are trimmed. With `shuffle` set the seats are permuted before
    /// ids are assigned, so ids always read 1..=n in play order.
    pub fn start_game(&mut self, request: &StartGameRequest) -> Result<GameSession, EngineError> {
        let mut names = self.validate_names(&request.names)?;
        if request.shuffle {
            self.rng.shuffle(&mut names);
        }

        let session = GameSession::new(Roster::seat(names));
        info!(
            participants = session.participants().len(),
            shuffled = request.shuffle,
            first = %session.current_player(),
            "game started"
        );
        Ok(session)
    }

    /// Play the current participant's raw input.
    pub fn submit_word(&self, session: &GameSession, raw: &str) -> Result<Transition, EngineError> {
        match session.phase() {
            Phase::GameOver => return Err(EngineError::GameOver),
            Phase::RoundEnded => return Err(EngineError::FollowupPending),
            Phase::AwaitingFirstWord | Phase::Playing => {}
        }

        let word = raw.trim();
        if word.is_empty() {
            return Ok(Self::reject(session, RejectReason::Empty));
        }
        if chain::char_len(word) < self.config.min_word_chars {
            return Ok(Self::reject(session, RejectReason::TooShort));
        }

        if session.is_used(word) {
            return Ok(Self::eliminate(session, word, EliminationReason::DuplicateWord));
        }

        if let Link::Broken { expected, found } = chain::link(session.current_word(), word) {
            let reason = EliminationReason::ChainViolation { expected, found };
            return Ok(Self::eliminate(session, word, reason));
        }

        let mut next = session.clone();
        next.accept_word(word.to_string(), self.config.history_limit);
        next.advance_turn();
        debug!(
            word,
            player = %session.current_player(),
            next = %next.current_player(),
            "word accepted"
        );
        Ok(Transition::new(next, Outcome::Accepted { new_round: false }))
    }

    /// After an elimination: clear the words and start a fresh round with
    /// the next active player.
    pub fn start_new_round(&self, session: &GameSession) -> Result<Transition, EngineError> {
        self.followup(session, EliminationFollowup::NewRound)
    }

    /// After an elimination: keep the words and pass play on.
    pub fn continue_round(&self, session: &GameSession) -> Result<Transition, EngineError> {
        self.followup(session, EliminationFollowup::Continue)
    }

    /// Resolve a pending elimination.
    pub fn followup(
        &self,
        session: &GameSession,
        choice: EliminationFollowup,
    ) -> Result<Transition, EngineError> {
        match session.phase() {
            Phase::GameOver => return Err(EngineError::GameOver),
            Phase::RoundEnded => {}
            Phase::AwaitingFirstWord | Phase::Playing => {
                return Err(EngineError::NoPendingElimination)
            }
        }

        let new_round = choice == EliminationFollowup::NewRound;
        let mut next = session.clone();
        next.resolve_elimination(new_round);
        info!(
            ?choice,
            round = next.round(),
            next = %next.current_player(),
            "elimination resolved"
        );
        Ok(Transition::new(next, Outcome::Accepted { new_round }))
    }

    /// Dispatch a command.
    ///
    /// `Start` ignores `session`; every other command needs one.
    pub fn apply(
        &mut self,
        session: Option<&GameSession>,
        command: Command,
    ) -> Result<Transition, EngineError> {
        match command {
            Command::Start(request) => {
                let fresh = self.start_game(&request)?;
                Ok(Transition::new(fresh, Outcome::Started))
            }
            Command::Submit(raw) => {
                self.submit_word(session.ok_or(EngineError::NotStarted)?, &raw)
            }
            Command::Followup(choice) => {
                self.followup(session.ok_or(EngineError::NotStarted)?, choice)
            }
        }
    }

    // === Helpers ===

    fn validate_names(&self, names: &[String]) -> Result<Vec<String>, ParticipantError> {
        let count = names.len();
        if count < self.config.min_participants {
            return Err(ParticipantError::TooFew {
                count,
                min: self.config.min_participants,
            });
        }
        if count > MAX_PARTICIPANTS {
            return Err(ParticipantError::TooMany {
                count,
                max: MAX_PARTICIPANTS,
            });
        }

        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    Err(ParticipantError::BlankName { position: i + 1 })
                } else {
                    Ok(trimmed.to_string())
                }
            })
            .collect()
    }

    fn reject(session: &GameSession, reason: RejectReason) -> Transition {
        debug!(%reason, player = %session.current_player(), "input rejected");
        Transition::new(session.clone(), Outcome::Rejected(reason))
    }

    fn eliminate(session: &GameSession, word: &str, reason: EliminationReason) -> Transition {
        let mut next = session.clone();
        let player = next.current_player().id;
        next.eliminate_current();

        let winner = next.winner().map(|w| w.id);
        let outcome = match winner {
            Some(winner) => {
                info!(%player, %winner, %reason, word, "game over");
                Outcome::GameOver {
                    eliminated: player,
                    reason,
                    winner,
                }
            }
            None => {
                info!(%player, %reason, word, remaining = next.active_count(), "player eliminated");
                Outcome::Eliminated { player, reason }
            }
        };
        Transition::new(next, outcome)
    }
}
