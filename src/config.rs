//! Engine configuration: the word length bounds shared by the dictionary
//! loaders and the length field.

use crate::error::ConfigError;
use crate::{DEFAULT_MAX_WORD_LENGTH, DEFAULT_MIN_WORD_LENGTH, DEFAULT_WORD_LENGTH};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Length bounds and the initial target length.
///
/// Loaded from a JSON object such as `{"min_length": 2, "max_length": 15}`;
/// missing keys fall back to the defaults. Fields are only reachable
/// through validated constructors, so `1 <= min <= default <= max` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    min_length: usize,
    max_length: usize,
    default_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_WORD_LENGTH,
            max_length: DEFAULT_MAX_WORD_LENGTH,
            default_length: DEFAULT_WORD_LENGTH,
        }
    }
}

impl EngineConfig {
    pub fn new(
        min_length: usize,
        default_length: usize,
        max_length: usize,
    ) -> Result<Self, ConfigError> {
        Self {
            min_length,
            max_length,
            default_length,
        }
        .validate()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn default_length(&self) -> usize {
        self.default_length
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Check `1 <= min <= default <= max`.
    fn validate(self) -> Result<Self, ConfigError> {
        if self.min_length == 0
            || self.min_length > self.default_length
            || self.default_length > self.max_length
        {
            return Err(ConfigError::Bounds {
                min: self.min_length,
                default: self.default_length,
                max: self.max_length,
            });
        }
        Ok(self)
    }

    pub fn with_default_length(mut self, length: usize) -> Self {
        self.default_length = self.clamp_length(length);
        self
    }

    pub fn clamp_length(&self, length: usize) -> usize {
        length.max(self.min_length).min(self.max_length)
    }

    pub fn allows_length(&self, length: usize) -> bool {
        (self.min_length..=self.max_length).contains(&length)
    }
}
