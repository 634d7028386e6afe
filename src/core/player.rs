//! Participant identification and the seating roster.
//!
//! ## ParticipantId
//!
//! 1-based seat ordinal. Ids are assigned after the (optional) shuffle, so
//! the first seat is always `ParticipantId(1)`.
//!
//! ## Roster
//!
//! The ordered seats of a game, backed by a `SmallVec` since party games
//! rarely seat more than eight people. Seat order is fixed at game start.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

/// Seat ordinal, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u16);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Id for the seat at a 0-based roster index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u16 + 1)
    }

    /// Get the 0-based roster index for this seat.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A seated participant.
///
/// `id` and `name` never change after the game starts; only elimination
/// flips `active`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Seat ordinal.
    pub id: ParticipantId,
    /// Display name, trimmed and non-empty.
    pub name: String,
    /// False once eliminated.
    pub active: bool,
}

impl Participant {
    /// Create an active participant.
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.id.0, self.name)
    }
}

/// Ordered seats of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    seats: SmallVec<[Participant; 8]>,
}

impl Roster {
    /// Seat the given names in order, assigning ids 1..=n.
    pub fn seat<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let seats = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Participant::new(ParticipantId::from_index(i), name))
            .collect();
        Self { seats }
    }

    /// Number of seats, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// True if nobody is seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Get the participant at a 0-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.seats.get(index)
    }

    /// Look a participant up by id.
    #[must_use]
    pub fn by_id(&self, id: ParticipantId) -> Option<&Participant> {
        if id.0 == 0 {
            return None;
        }
        self.seats.get(id.index())
    }

    /// Iterate over all seats in order.
    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.seats.iter()
    }

    /// Iterate over seats still in the game.
    pub fn active(&self) -> impl Iterator<Item = &Participant> {
        self.seats.iter().filter(|p| p.active)
    }

    /// Count of seats still in the game.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Mark the seat at `index` as eliminated.
    ///
    /// Returns false if it was already out.
    pub fn deactivate(&mut self, index: usize) -> bool {
        let seat = &mut self.seats[index];
        std::mem::replace(&mut seat.active, false)
    }

    /// Index of the next active seat after `index`, wrapping around.
    ///
    /// Returns `None` if no other seat is active.
    #[must_use]
    pub fn next_active_after(&self, index: usize) -> Option<usize> {
        let len = self.seats.len();
        (1..len)
            .map(|step| (index + step) % len)
            .find(|&i| self.seats[i].active)
    }

    /// Names in seat order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.seats.iter().map(|p| p.name.as_str())
    }
}

impl Index<usize> for Roster {
    type Output = Participant;

    fn index(&self, index: usize) -> &Self::Output {
        &self.seats[index]
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.seats.iter()
    }
}
