//! # Word Sieve
//!
//! A constraint-matching word finder for Wordle-like guessing puzzles.
//!
//! The engine filters a dictionary against what the player has learned so
//! far: the word length, letters known to be in the word, letters known to
//! be absent, and a positional pattern with wildcards and per-position
//! exclusion groups such as `a(pb)?le`.

pub mod config;
pub mod constraints;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod sanitize;

pub use config::EngineConfig;
pub use constraints::ConstraintSet;
pub use dictionary::{
    Dictionary, DictionaryHandle, DictionaryLoader, DictionaryState, EmbeddedLoader,
    JsonFileLoader, WordListLoader,
};
pub use engine::{Engine, Field, FieldEdit, Outcome};
pub use error::{ConfigError, Disabled, EvalError, LoadError, Rejection};
pub use matcher::Matcher;
pub use pattern::{Pattern, PatternError, Position};

/// Shortest word length accepted by default
pub const DEFAULT_MIN_WORD_LENGTH: usize = 1;

/// Longest word length accepted by default
pub const DEFAULT_MAX_WORD_LENGTH: usize = 20;

/// Initial target length, as in Wordle
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Load the dictionary bundled with the crate
pub fn load_dictionary() -> Result<Dictionary, LoadError> {
    EmbeddedLoader::default().load()
}
