//! The live query built from the four input fields.

use crate::error::Disabled;
use crate::pattern::Pattern;

/// Target length, known letters, dead letters and the positional pattern.
///
/// Letter fields hold normalized text (sorted, unique, a-z). `known` and
/// `dead` are kept disjoint by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    pub length: usize,
    pub known: String,
    pub dead: String,
    pub pattern: Pattern,
}

impl ConstraintSet {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            known: String::new(),
            dead: String::new(),
            pattern: Pattern::default(),
        }
    }

    /// Builder used by tests and one-shot queries. Values are taken as-is;
    /// route raw text through the engine to get it sanitized.
    pub fn with_known(mut self, known: &str) -> Self {
        self.known = known.to_string();
        self
    }

    pub fn with_dead(mut self, dead: &str) -> Self {
        self.dead = dead.to_string();
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// An empty pattern places no positional constraint. Otherwise it must
    /// resolve to exactly `length` positions.
    pub fn check_pattern_length(&self) -> Result<(), Disabled> {
        if self.pattern.is_empty() || self.pattern.len() == self.length {
            Ok(())
        } else {
            Err(Disabled::LengthMismatch {
                positions: self.pattern.len(),
                length: self.length,
            })
        }
    }

    pub fn clear(&mut self) {
        self.known.clear();
        self.dead.clear();
        self.pattern = Pattern::default();
    }
}
