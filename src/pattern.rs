//! Guess pattern grammar.
//!
//! A pattern is a sequence of positions written as:
//!
//! - a letter: that exact letter,
//! - `?` or `*`: any letter,
//! - `(` letters `)`: any letter except those listed.
//!
//! Validation is a two-state machine (outside / inside a group). Every input
//! either parses or fails with exactly one [`PatternError`].

use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// One resolved position of a guess pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    Literal(char),
    Any,
    Except(BTreeSet<char>),
}

impl Position {
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Position::Literal(l) => *l == c,
            Position::Any => c.is_ascii_lowercase(),
            Position::Except(set) => c.is_ascii_lowercase() && !set.contains(&c),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Literal(c) => write!(f, "{}", c),
            Position::Any => write!(f, "?"),
            Position::Except(set) => {
                write!(f, "(")?;
                for c in set {
                    write!(f, "{}", c)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Structural grammar violations. `at` is the byte offset of the offending
/// character, or the input length for a group left open at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unmatched '(' at {at}")]
    UnmatchedOpen { at: usize },
    #[error("unmatched ')' at {at}")]
    UnmatchedClose { at: usize },
    #[error("empty group at {at}")]
    EmptyGroup { at: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    Inside { opened_at: usize },
}

/// A structurally valid guess pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    positions: Vec<Position>,
}

impl Pattern {
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let mut state = State::Outside;
        let mut group = BTreeSet::new();
        let mut positions = Vec::new();

        for (at, c) in text.char_indices() {
            state = match (state, c) {
                (State::Outside, '(') => {
                    group.clear();
                    State::Inside { opened_at: at }
                }
                (State::Outside, ')') => return Err(PatternError::UnmatchedClose { at }),
                (State::Outside, '?' | '*') => {
                    positions.push(Position::Any);
                    State::Outside
                }
                (State::Outside, c) => {
                    positions.push(Position::Literal(c));
                    State::Outside
                }
                // A nested open can never be closed before the outer group.
                (State::Inside { opened_at }, '(') => {
                    return Err(PatternError::UnmatchedOpen { at: opened_at })
                }
                (State::Inside { .. }, ')') => {
                    if group.is_empty() {
                        return Err(PatternError::EmptyGroup { at });
                    }
                    positions.push(Position::Except(std::mem::take(&mut group)));
                    State::Outside
                }
                (inside @ State::Inside { .. }, c) => {
                    if c.is_ascii_alphabetic() {
                        group.insert(c);
                    }
                    inside
                }
            };
        }

        match state {
            State::Outside => Ok(Self { positions }),
            State::Inside { opened_at } => Err(PatternError::UnmatchedOpen { at: opened_at }),
        }
    }

    pub fn from_positions(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Number of resolved positions; each group counts as one.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Keep the first `len` positions.
    pub fn truncate(&mut self, len: usize) {
        self.positions.truncate(len);
    }

    /// Turn literal positions whose letter is in `letters` into wildcards.
    /// The position count never changes.
    pub fn blank_literals(&mut self, letters: &str) {
        for position in &mut self.positions {
            if matches!(position, Position::Literal(c) if letters.contains(*c)) {
                *position = Position::Any;
            }
        }
    }

    /// Whether `word` matches position by position over its whole length.
    pub fn matches(&self, word: &str) -> bool {
        word.chars().count() == self.positions.len()
            && word
                .chars()
                .zip(&self.positions)
                .all(|(c, position)| position.accepts(c))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in &self.positions {
            write!(f, "{}", position)?;
        }
        Ok(())
    }
}
