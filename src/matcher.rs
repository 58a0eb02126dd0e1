//! Compiles a constraint set into a single word predicate.

use crate::constraints::ConstraintSet;
use crate::pattern::{Pattern, Position};
use regex::Regex;

/// Render a pattern as an anchored regular expression.
///
/// `a(pb)?` becomes `^a[a-z&&[^bp]][a-z]$`.
pub fn pattern_regex(pattern: &Pattern) -> String {
    let mut source = String::from("^");
    for position in pattern.positions() {
        match position {
            Position::Literal(c) => source.push_str(&regex::escape(&c.to_string())),
            Position::Any => source.push_str("[a-z]"),
            Position::Except(set) => {
                source.push_str("[a-z&&[^");
                source.extend(set.iter());
                source.push_str("]]");
            }
        }
    }
    source.push('$');
    source
}

/// The acceptance predicate for one constraint set.
#[derive(Debug, Clone)]
pub struct Matcher {
    length: usize,
    positional: Option<Regex>,
    dead: Vec<char>,
    known: Vec<char>,
}

impl Matcher {
    pub fn compile(constraints: &ConstraintSet) -> Result<Self, regex::Error> {
        let positional = if constraints.pattern.is_empty() {
            None
        } else {
            Some(Regex::new(&pattern_regex(&constraints.pattern))?)
        };
        Ok(Self {
            length: constraints.length,
            positional,
            dead: constraints.dead.chars().collect(),
            known: constraints.known.chars().collect(),
        })
    }

    /// Length, then pattern, then dead letters, then known letters;
    /// stops at the first failed check.
    pub fn matches(&self, word: &str) -> bool {
        if word.len() != self.length {
            return false;
        }
        if let Some(regex) = &self.positional {
            if !regex.is_match(word) {
                return false;
            }
        }
        if word.contains(self.dead.as_slice()) {
            return false;
        }
        self.known.iter().all(|&c| word.contains(c))
    }
}
