//! Presentation-neutral projections of a session.
//!
//! Front-ends draw from a [`Board`] instead of reading the session
//! directly, so every surface shows the same hint, history, and roster.

mod board;

pub use board::{order_text, Board, PromptHint, RosterEntry, SeatStatus};
