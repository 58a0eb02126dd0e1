//! The constraint engine.
//!
//! The engine owns the current [`ConstraintSet`] and the dictionary state.
//! Every field edit goes through a sanitizer and keeps the fields mutually
//! consistent; evaluation runs only on request and only when the query is
//! complete.

use crate::config::EngineConfig;
use crate::constraints::ConstraintSet;
use crate::dictionary::{Dictionary, DictionaryHandle, DictionaryState};
use crate::error::{Disabled, EvalError, Rejection};
use crate::matcher::Matcher;
use crate::pattern::Pattern;
use crate::sanitize::{
    sanitize_dead, sanitize_known, sanitize_pattern_text, strip_letters, strip_pattern_letters,
};
use log::{debug, info};
use rayon::prelude::*;
use std::sync::Arc;

/// The four input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Length,
    Known,
    Dead,
    Pattern,
}

/// Result of a field edit. On rejection the previous value is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Accepted,
    Rejected(Rejection),
}

impl FieldEdit {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FieldEdit::Accepted)
    }
}

/// The last evaluation result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    NotRun,
    Matches(Vec<String>),
    NoMatches,
}

impl Outcome {
    pub fn words(&self) -> &[String] {
        match self {
            Outcome::Matches(words) => words,
            _ => &[],
        }
    }
}

/// Apply `matcher` to every dictionary word, keeping dictionary order.
pub fn evaluate(dictionary: &Dictionary, matcher: &Matcher) -> Vec<String> {
    dictionary
        .words()
        .par_iter()
        .filter(|word| matcher.matches(word))
        .cloned()
        .collect()
}

#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    constraints: ConstraintSet,
    dictionary: DictionaryState,
    pending: Option<DictionaryHandle>,
    rejected_pattern: Option<(String, Rejection)>,
    outcome: Outcome,
}

impl Engine {
    pub fn new(config: EngineConfig, dictionary: DictionaryState) -> Self {
        Self {
            constraints: ConstraintSet::new(config.default_length()),
            config,
            dictionary,
            pending: None,
            rejected_pattern: None,
            outcome: Outcome::NotRun,
        }
    }

    pub fn with_dictionary(config: EngineConfig, dictionary: Dictionary) -> Self {
        Self::new(config, DictionaryState::Ready(Arc::new(dictionary)))
    }

    /// Start with a dictionary that is still loading in the background.
    pub fn with_pending(config: EngineConfig, handle: DictionaryHandle) -> Self {
        let mut engine = Self::new(config, DictionaryState::Loading);
        engine.pending = Some(handle);
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The reason the most recent pattern edit was refused, if it has not
    /// since been replaced by a valid one.
    pub fn pattern_rejection(&self) -> Option<&Rejection> {
        self.rejected_pattern.as_ref().map(|(_, rejection)| rejection)
    }

    pub fn dictionary_state(&mut self) -> &DictionaryState {
        self.refresh_dictionary();
        &self.dictionary
    }

    /// Pick up the result of a background load if it has finished.
    pub fn refresh_dictionary(&mut self) {
        if let Some(handle) = self.pending.as_mut() {
            let state = handle.poll();
            if state.is_resolved() {
                self.dictionary = state.clone();
                self.pending = None;
            }
        }
    }

    /// Block until a background load has finished.
    pub fn wait_for_dictionary(&mut self) -> &DictionaryState {
        if let Some(handle) = self.pending.take() {
            self.dictionary = handle.wait();
        }
        &self.dictionary
    }

    /// Route a raw edit of any field. Length text that is not a positive
    /// number is rejected and the length is left alone.
    pub fn edit(&mut self, field: Field, raw: &str) -> FieldEdit {
        match field {
            Field::Length => match raw.trim().parse::<usize>() {
                Ok(length) if length > 0 => self.set_length(length),
                _ => return FieldEdit::Rejected(Rejection::NotANumber(raw.to_string())),
            },
            Field::Known => self.edit_known(raw),
            Field::Dead => self.edit_dead(raw),
            Field::Pattern => return self.edit_pattern(raw),
        }
        FieldEdit::Accepted
    }

    /// Change the target length, clamped to the configured bounds. Known
    /// letters and the pattern are cut down to fit, and a previously
    /// rejected pattern is validated again against the new length.
    pub fn set_length(&mut self, length: usize) {
        let length = self.config.clamp_length(length);
        self.constraints.length = length;
        self.constraints.known = sanitize_known(&self.constraints.known, length);
        self.constraints.pattern.truncate(length);
        debug!("length set to {}", length);
        if let Some((raw, _)) = self.rejected_pattern.take() {
            self.edit_pattern(&raw);
        }
    }

    pub fn edit_known(&mut self, raw: &str) {
        let known = sanitize_known(raw, self.constraints.length);
        self.constraints.dead = strip_letters(&self.constraints.dead, &known);
        self.constraints.pattern = strip_pattern_letters(&self.constraints.pattern, &known);
        self.constraints.known = known;
    }

    /// Known letters take priority: a letter already known stays known and
    /// is dropped from the dead letters instead.
    pub fn edit_dead(&mut self, raw: &str) {
        let dead = strip_letters(&sanitize_dead(raw), &self.constraints.known);
        self.constraints.pattern = strip_pattern_letters(&self.constraints.pattern, &dead);
        self.constraints.dead = dead;
    }

    /// Replace the pattern if `raw` is structurally valid and fits the
    /// length. Otherwise the previous pattern is kept and evaluation stays
    /// disabled until a valid pattern is entered or the fields are cleared.
    pub fn edit_pattern(&mut self, raw: &str) -> FieldEdit {
        match self.parse_pattern(raw) {
            Ok(pattern) => {
                self.constraints.pattern = pattern;
                self.rejected_pattern = None;
                FieldEdit::Accepted
            }
            Err(rejection) => {
                debug!("pattern {:?} rejected: {}", raw, rejection);
                self.rejected_pattern = Some((raw.to_string(), rejection.clone()));
                FieldEdit::Rejected(rejection)
            }
        }
    }

    fn parse_pattern(&self, raw: &str) -> Result<Pattern, Rejection> {
        let pattern = Pattern::parse(&sanitize_pattern_text(raw))?;
        if pattern.len() > self.constraints.length {
            return Err(Rejection::TooLong {
                positions: pattern.len(),
                length: self.constraints.length,
            });
        }
        Ok(pattern)
    }

    /// Reset the letter fields and the pattern. The length is kept.
    pub fn clear(&mut self) {
        self.constraints.clear();
        self.rejected_pattern = None;
        self.outcome = Outcome::NotRun;
    }

    pub fn readiness(&mut self) -> Result<Arc<Dictionary>, Disabled> {
        self.refresh_dictionary();
        let dictionary = match &self.dictionary {
            DictionaryState::Loading => return Err(Disabled::DictionaryLoading),
            DictionaryState::Failed(err) => return Err(Disabled::DictionaryFailed(err.to_string())),
            DictionaryState::Ready(dictionary) => Arc::clone(dictionary),
        };
        if let Some((_, rejection)) = &self.rejected_pattern {
            return Err(Disabled::MalformedPattern(rejection.clone()));
        }
        self.constraints.check_pattern_length()?;
        Ok(dictionary)
    }

    pub fn can_evaluate(&mut self) -> bool {
        self.readiness().is_ok()
    }

    pub fn evaluate(&mut self) -> Result<&Outcome, EvalError> {
        let dictionary = self.readiness()?;
        let matcher = Matcher::compile(&self.constraints)?;
        let matches = evaluate(&dictionary, &matcher);
        info!(
            "found {} matches among {} words",
            matches.len(),
            dictionary.len()
        );
        self.outcome = if matches.is_empty() {
            Outcome::NoMatches
        } else {
            Outcome::Matches(matches)
        };
        Ok(&self.outcome)
    }
}
