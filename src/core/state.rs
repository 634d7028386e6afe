//! The game session: the single aggregate every transition produces.
//!
//! ## GameSession
//!
//! - Seating roster and how many seats are still active
//! - Whose turn it is
//! - The current word, the words used this round, and the recent history
//! - Whether an elimination is waiting on the table's follow-up decision
//! - The terminal game-over flag
//!
//! Collections use `im` persistent structures, so cloning a session to
//! build the next one is O(1) and every returned snapshot stays valid.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::player::{Participant, ParticipantId, Roster};

/// Where the session sits in the turn/elimination state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Round just started; any word of legal length is accepted.
    AwaitingFirstWord,
    /// A word is on the table and the next one must chain from it.
    Playing,
    /// Someone was eliminated and players remain; waiting for a follow-up.
    RoundEnded,
    /// One participant left. Terminal.
    GameOver,
}

/// State of one play-through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    roster: Roster,
    active_count: usize,
    current_index: usize,
    current_word: String,
    used_words: ImHashSet<String>,
    history: Vector<String>,
    is_over: bool,
    /// Set while the session is in `Phase::RoundEnded`.
    pending_elimination: Option<ParticipantId>,
    /// Round number (starts at 1).
    round: u32,
    /// Turn number (starts at 1), bumped every time play passes on.
    turn_number: u32,
}

impl GameSession {
    /// Create a fresh session for a seated roster.
    ///
    /// The first seat plays first.
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        let active_count = roster.active_count();
        Self {
            roster,
            active_count,
            current_index: 0,
            current_word: String::new(),
            used_words: ImHashSet::new(),
            history: Vector::new(),
            is_over: false,
            pending_elimination: None,
            round: 1,
            turn_number: 1,
        }
    }

    // === Queries ===

    /// Current phase, derived from the fields.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_over {
            Phase::GameOver
        } else if self.pending_elimination.is_some() {
            Phase::RoundEnded
        } else if self.current_word.is_empty() {
            Phase::AwaitingFirstWord
        } else {
            Phase::Playing
        }
    }

    /// All seats, in play order.
    #[must_use]
    pub fn participants(&self) -> &Roster {
        &self.roster
    }

    /// Seats still in the game.
    pub fn active_participants(&self) -> impl Iterator<Item = &Participant> {
        self.roster.active()
    }

    /// Number of seats still in the game.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Roster index of the seat whose turn it is.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_index
    }

    /// The seat whose turn it is.
    ///
    /// While `RoundEnded` this is still the participant just eliminated.
    #[must_use]
    pub fn current_player(&self) -> &Participant {
        &self.roster[self.current_index]
    }

    /// Most recently accepted word; empty at round start.
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// Last character of the current word, if any.
    #[must_use]
    pub fn chain_char(&self) -> Option<char> {
        self.current_word.chars().next_back()
    }

    /// Words used this round.
    #[must_use]
    pub fn used_words(&self) -> &ImHashSet<String> {
        &self.used_words
    }

    /// Check whether a word was already played this round.
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.contains(word)
    }

    /// Recent accepted words, oldest first.
    #[must_use]
    pub fn word_history(&self) -> &Vector<String> {
        &self.history
    }

    /// Terminal flag.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// The last participant standing, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Participant> {
        if self.is_over {
            self.roster.active().next()
        } else {
            None
        }
    }

    /// The participant awaiting a follow-up decision, if any.
    #[must_use]
    pub fn pending_elimination(&self) -> Option<&Participant> {
        self.pending_elimination.and_then(|id| self.roster.by_id(id))
    }

    /// Round number (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    // === Transitions (engine only) ===

    /// Record an accepted word and trim the history to `history_limit`.
    pub(crate) fn accept_word(&mut self, word: String, history_limit: usize) {
        self.used_words.insert(word.clone());
        self.history.push_back(word.clone());
        while self.history.len() > history_limit {
            self.history.pop_front();
        }
        self.current_word = word;
    }

    /// Pass play to the next active seat.
    ///
    /// Callers guarantee at least one other seat is active.
    pub(crate) fn advance_turn(&mut self) {
        debug_assert!(!self.is_over, "advance_turn on a finished game");
        if let Some(next) = self.roster.next_active_after(self.current_index) {
            self.current_index = next;
            self.turn_number += 1;
        }
    }

    /// Knock out the current player.
    ///
    /// Ends the game when one seat is left, otherwise parks the session in
    /// `RoundEnded` until a follow-up arrives.
    pub(crate) fn eliminate_current(&mut self) {
        if self.roster.deactivate(self.current_index) {
            self.active_count -= 1;
        }
        if self.active_count <= 1 {
            self.is_over = true;
        } else {
            self.pending_elimination = Some(self.current_player().id);
        }
    }

    /// Resolve a pending elimination, optionally clearing the round.
    pub(crate) fn resolve_elimination(&mut self, new_round: bool) {
        self.pending_elimination = None;
        if new_round {
            self.current_word.clear();
            self.used_words = ImHashSet::new();
            self.history = Vector::new();
            self.round += 1;
        }
        self.advance_turn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(names: &[&str]) -> GameSession {
        GameSession::new(Roster::seat(names.iter().copied()))
    }

    #[test]
    fn test_new_session() {
        let state = session(&["A", "B", "C"]);

        assert_eq!(state.active_count(), 3);
        assert_eq!(state.current_player_index(), 0);
        assert_eq!(state.current_word(), "");
        assert!(state.used_words().is_empty());
        assert!(state.word_history().is_empty());
        assert!(!state.is_over());
        assert_eq!(state.phase(), Phase::AwaitingFirstWord);
        assert_eq!(state.round(), 1);
        assert_eq!(state.turn_number(), 1);
    }

    #[test]
    fn test_accept_word_trims_history() {
        let mut state = session(&["A", "B"]);

        for word in ["가나", "나다", "다라"] {
            state.accept_word(word.to_string(), 2);
        }

        let history: Vec<_> = state.word_history().iter().cloned().collect();
        assert_eq!(history, vec!["나다", "다라"]);
        assert_eq!(state.used_words().len(), 3);
        assert_eq!(state.current_word(), "다라");
        assert_eq!(state.chain_char(), Some('라'));
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut state = session(&["A", "B"]);

        state.advance_turn();
        assert_eq!(state.current_player().name, "B");
        state.advance_turn();
        assert_eq!(state.current_player().name, "A");
        assert_eq!(state.turn_number(), 3);
    }

    #[test]
    fn test_eliminate_with_players_left() {
        let mut state = session(&["A", "B", "C"]);

        state.eliminate_current();

        assert_eq!(state.active_count(), 2);
        assert_eq!(state.phase(), Phase::RoundEnded);
        assert_eq!(state.pending_elimination().map(|p| p.name.as_str()), Some("A"));
        assert!(state.winner().is_none());
    }

    #[test]
    fn test_active_participants_skip_eliminated() {
        let mut state = session(&["A", "B", "C"]);
        state.advance_turn();

        state.eliminate_current();

        let names: Vec<_> = state.active_participants().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(state.active_participants().count(), state.active_count());
    }

    #[test]
    fn test_eliminate_last_opponent() {
        let mut state = session(&["A", "B"]);

        state.eliminate_current();

        assert!(state.is_over());
        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(state.winner().map(|p| p.name.as_str()), Some("B"));
        assert!(state.pending_elimination().is_none());
    }

    #[test]
    fn test_resolve_new_round_clears_words() {
        let mut state = session(&["A", "B", "C"]);
        state.accept_word("사과".to_string(), 5);
        state.eliminate_current();

        state.resolve_elimination(true);

        assert_eq!(state.current_word(), "");
        assert!(state.used_words().is_empty());
        assert!(state.word_history().is_empty());
        assert_eq!(state.round(), 2);
        assert_eq!(state.current_player().name, "B");
        assert_eq!(state.phase(), Phase::AwaitingFirstWord);
    }

    #[test]
    fn test_resolve_continue_keeps_words() {
        let mut state = session(&["A", "B", "C"]);
        state.accept_word("사과".to_string(), 5);
        state.eliminate_current();

        state.resolve_elimination(false);

        assert_eq!(state.current_word(), "사과");
        assert!(state.is_used("사과"));
        assert_eq!(state.round(), 1);
        assert_eq!(state.current_player().name, "B");
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = session(&["A", "B"]);
        state.accept_word("사과".to_string(), 5);

        let snapshot = state.clone();
        state.accept_word("과자".to_string(), 5);

        assert_eq!(snapshot.current_word(), "사과");
        assert!(!snapshot.is_used("과자"));
        assert_eq!(snapshot.word_history().len(), 1);
    }

    #[test]
    fn test_session_serialization() {
        let mut state = session(&["A", "B", "C"]);
        state.accept_word("사과".to_string(), 5);
        state.advance_turn();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameSession = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
