//! The chain rule on characters.
//!
//! Characters are Unicode scalar values. Comparison is exact: no case
//! folding and no normalization, so `'A'` does not chain from `'a'` and a
//! precomposed syllable does not chain from its decomposed jamo.

/// Length of a word in characters.
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// First character of a word.
#[must_use]
pub fn first_char(word: &str) -> Option<char> {
    word.chars().next()
}

/// Last character of a word.
#[must_use]
pub fn last_char(word: &str) -> Option<char> {
    word.chars().next_back()
}

/// How a candidate word relates to the word on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Link {
    /// Nothing on the table; any word opens the round.
    Open,
    /// The candidate starts with the previous word's last character.
    Linked,
    /// The candidate starts with something else.
    Broken {
        /// Last character of the previous word
        expected: char,
        /// First character of the candidate
        found: char,
    },
}

/// Check whether `next` chains from `previous`.
///
/// An empty `previous` means the round has not started yet. An empty
/// `next` never links.
#[must_use]
pub fn link(previous: &str, next: &str) -> Link {
    let Some(expected) = last_char(previous) else {
        return Link::Open;
    };
    match first_char(next) {
        Some(found) if found == expected => Link::Linked,
        Some(found) => Link::Broken { expected, found },
        None => Link::Broken {
            expected,
            found: char::REPLACEMENT_CHARACTER,
        },
    }
}
