//! Error types for dictionary loading, configuration and evaluation.

use crate::pattern::PatternError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing a [`Dictionary`](crate::Dictionary).
///
/// Any of these leaves the engine without a dictionary, which disables
/// evaluation but nothing else.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("could not read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not a JSON array of strings.
    #[error("dictionary is not a JSON array of strings: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry is not a lowercase a-z word within the length bounds.
    #[error("invalid dictionary entry {word:?} at index {index}")]
    InvalidWord { index: usize, word: String },

    /// The source produced no words at all.
    #[error("dictionary contains no words")]
    Empty,

    /// The background loader thread went away without reporting.
    #[error("dictionary loader thread terminated unexpectedly")]
    Disconnected,
}

/// Errors raised while reading an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    /// The length bounds are inconsistent.
    #[error("invalid length bounds: min {min}, default {default}, max {max}")]
    Bounds {
        min: usize,
        default: usize,
        max: usize,
    },
}

/// Why a field edit was not taken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("malformed pattern: {0}")]
    Malformed(#[from] PatternError),
    #[error("pattern has {positions} positions, more than the word length {length}")]
    TooLong { positions: usize, length: usize },
    #[error("length {0:?} is not a positive number")]
    NotANumber(String),
}

/// Why evaluation cannot currently run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Disabled {
    /// The dictionary has not finished loading.
    #[error("dictionary is still loading")]
    DictionaryLoading,

    /// The dictionary failed to load; evaluation stays unavailable.
    #[error("dictionary unavailable: {0}")]
    DictionaryFailed(String),

    /// The guess pattern does not resolve to exactly `length` positions.
    #[error("pattern has {positions} positions but the word length is {length}")]
    LengthMismatch { positions: usize, length: usize },

    /// The last pattern edit was rejected and has not been replaced.
    #[error("pattern rejected: {0}")]
    MalformedPattern(Rejection),
}

/// Errors returned by [`Engine::evaluate`](crate::Engine::evaluate).
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("evaluation disabled: {0}")]
    Disabled(#[from] Disabled),

    /// The compiled positional matcher was rejected by the regex engine.
    #[error("could not compile pattern matcher: {0}")]
    Compile(#[from] regex::Error),
}

/// A specialized `Result` type for dictionary loading.
pub type Result<T> = std::result::Result<T, LoadError>;
