//! Board snapshot for rendering.

use serde::{Deserialize, Serialize};

use crate::core::{GameSession, ParticipantId};

/// What the input prompt should ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptHint {
    /// Opening word of the first round.
    FirstWord,
    /// Opening word right after a round reset.
    NewRound,
    /// The word must start with this character.
    StartsWith(char),
}

impl PromptHint {
    /// Derive the hint for a session.
    #[must_use]
    pub fn for_session(session: &GameSession) -> Self {
        match session.chain_char() {
            Some(c) => PromptHint::StartsWith(c),
            None if session.round() > 1 => PromptHint::NewRound,
            None => PromptHint::FirstWord,
        }
    }
}

impl std::fmt::Display for PromptHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptHint::FirstWord => write!(f, "enter first word"),
            PromptHint::NewRound => write!(f, "new round! enter first word"),
            PromptHint::StartsWith(c) => write!(f, "{c} + start word"),
        }
    }
}

/// How a seat should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    /// Still playing, not their turn.
    Active,
    /// Still playing, their turn.
    Current,
    /// Knocked out.
    Eliminated,
}

/// One line of the roster panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Seat ordinal.
    pub id: ParticipantId,
    /// Display name.
    pub name: String,
    /// Drawing status.
    pub status: SeatStatus,
}

/// Everything a front-end needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Word on the table; empty at round start.
    pub current_word: String,
    /// `"<id>. <name>"` of whoever plays next. `None` once over.
    pub current_player: Option<String>,
    /// Input prompt.
    pub hint: PromptHint,
    /// Recent words, oldest first.
    pub history: Vec<String>,
    /// Every seat in play order.
    pub roster: Vec<RosterEntry>,
    /// Winner's name once the game is over.
    pub banner: Option<String>,
}

impl Board {
    /// Project a session into a board.
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        let over = session.is_over();
        let current = session.current_player_index();

        let roster = session
            .participants()
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let status = if !p.active {
                    SeatStatus::Eliminated
                } else if i == current && !over {
                    SeatStatus::Current
                } else {
                    SeatStatus::Active
                };
                RosterEntry {
                    id: p.id,
                    name: p.name.clone(),
                    status,
                }
            })
            .collect();

        Self {
            current_word: session.current_word().to_string(),
            current_player: (!over).then(|| session.current_player().to_string()),
            hint: PromptHint::for_session(session),
            history: session.word_history().iter().cloned().collect(),
            roster,
            banner: session.winner().map(|w| w.name.clone()),
        }
    }

    /// History joined with arrows, oldest first.
    #[must_use]
    pub fn history_text(&self) -> String {
        if self.history.is_empty() {
            "(no words yet)".to_string()
        } else {
            self.history.join(" → ")
        }
    }
}

/// Seat order as `"A → B → C"`.
#[must_use]
pub fn order_text(session: &GameSession) -> String {
    session.participants().names().collect::<Vec<_>>().join(" → ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, StartGameRequest};
    use crate::rules::RelayEngine;

    fn game(names: &[&str]) -> (RelayEngine, GameSession) {
        let mut engine = RelayEngine::new(GameRng::new(0));
        let session = engine
            .start_game(&StartGameRequest::new(names.iter().copied(), false))
            .unwrap();
        (engine, session)
    }

    #[test]
    fn test_hint_display() {
        assert_eq!(PromptHint::FirstWord.to_string(), "enter first word");
        assert_eq!(PromptHint::StartsWith('과').to_string(), "과 + start word");
    }

    #[test]
    fn test_fresh_board() {
        let (_, session) = game(&["A", "B"]);
        let board = Board::from_session(&session);

        assert_eq!(board.current_word, "");
        assert_eq!(board.current_player.as_deref(), Some("1. A"));
        assert_eq!(board.hint, PromptHint::FirstWord);
        assert_eq!(board.history_text(), "(no words yet)");
        assert_eq!(board.roster[0].status, SeatStatus::Current);
        assert_eq!(board.roster[1].status, SeatStatus::Active);
        assert!(board.banner.is_none());
    }

    #[test]
    fn test_board_mid_round() {
        let (engine, session) = game(&["A", "B"]);
        let session = engine.submit_word(&session, "사과").unwrap().session;
        let session = engine.submit_word(&session, "과자").unwrap().session;
        let board = Board::from_session(&session);

        assert_eq!(board.hint, PromptHint::StartsWith('자'));
        assert_eq!(board.history_text(), "사과 → 과자");
        assert_eq!(board.current_player.as_deref(), Some("1. A"));
    }

    #[test]
    fn test_board_after_new_round() {
        let (engine, session) = game(&["A", "B", "C"]);
        let session = engine.submit_word(&session, "사과").unwrap().session;
        let session = engine.submit_word(&session, "자두").unwrap().session;
        let session = engine.start_new_round(&session).unwrap().session;
        let board = Board::from_session(&session);

        assert_eq!(board.hint, PromptHint::NewRound);
        assert_eq!(board.roster[1].status, SeatStatus::Eliminated);
        assert_eq!(board.roster[2].status, SeatStatus::Current);
    }

    #[test]
    fn test_board_game_over() {
        let (engine, session) = game(&["A", "B"]);
        let session = engine.submit_word(&session, "사과").unwrap().session;
        let session = engine.submit_word(&session, "사과").unwrap().session;
        let board = Board::from_session(&session);

        assert_eq!(board.banner.as_deref(), Some("A"));
        assert!(board.current_player.is_none());
        // No current-turn marker once it's over
        assert!(board.roster.iter().all(|e| e.status != SeatStatus::Current));
    }

    #[test]
    fn test_order_text() {
        let (_, session) = game(&["지민", "현우", "서연"]);
        assert_eq!(order_text(&session), "지민 → 현우 → 서연");
    }
}
