//! The dictionary store and its loaders.
//!
//! A [`Dictionary`] is an immutable, lexicographically sorted list of unique
//! lowercase words. It is built once by a [`DictionaryLoader`] and then only
//! ever read. Loading can run on a background thread through
//! [`DictionaryHandle`], whose resolution gates evaluation.

use crate::config::EngineConfig;
use crate::error::{LoadError, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

const EMBEDDED_DICTIONARY: &str = include_str!("../dictionary/dict.json");

/// True if `word` is non-empty, lowercase a-z only, and within the bounds.
pub fn is_word(word: &str, config: &EngineConfig) -> bool {
    config.allows_length(word.len()) && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// An immutable sorted set of candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from entries that must already be valid words.
    ///
    /// Entries are sorted and deduplicated here; the source order is never
    /// trusted.
    pub fn from_words<I, S>(words: I, config: &EngineConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected = Vec::new();
        for (index, word) in words.into_iter().enumerate() {
            let word = word.into();
            if !is_word(&word, config) {
                return Err(LoadError::InvalidWord { index, word });
            }
            collected.push(word);
        }
        Self::finish(collected)
    }

    /// Parse the JSON array-of-strings format.
    pub fn from_json_str(text: &str, config: &EngineConfig) -> Result<Self> {
        let words: Vec<String> = serde_json::from_str(text)?;
        Self::from_words(words, config)
    }

    /// Read a raw plain-text word list, one word per line, keeping only
    /// entries that clean up into valid words.
    ///
    /// Proper nouns (leading capital) and possessives are dropped,
    /// apostrophes inside words are removed.
    pub fn from_word_list(text: &str, config: &EngineConfig) -> Result<Self> {
        let mut skipped = 0usize;
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|raw| {
                let cleaned = clean_raw_word(raw).filter(|w| is_word(w, config));
                if cleaned.is_none() {
                    skipped += 1;
                }
                cleaned
            })
            .collect();
        debug!("word list: kept {}, skipped {}", words.len(), skipped);
        Self::finish(words)
    }

    fn finish(mut words: Vec<String>) -> Result<Self> {
        words.sort_unstable();
        words.dedup();
        if words.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    pub fn max_word_length(&self) -> usize {
        self.words.iter().map(String::len).max().unwrap_or(0)
    }
}

fn clean_raw_word(raw: &str) -> Option<String> {
    if raw.starts_with(|c: char| c.is_ascii_uppercase()) || raw.ends_with("'s") {
        return None;
    }
    let word: String = raw
        .chars()
        .filter(|&c| c != '\'')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    Some(word)
}

/// The single boundary operation the engine needs from a dictionary source.
pub trait DictionaryLoader: Send {
    fn load(&self) -> Result<Dictionary>;

    /// Short human-readable description of the source, for logs.
    fn describe(&self) -> String;
}

/// Loads the JSON array format from a file.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    pub path: PathBuf,
    pub config: EngineConfig,
}

impl JsonFileLoader {
    pub fn new(path: impl Into<PathBuf>, config: EngineConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }
}

impl DictionaryLoader for JsonFileLoader {
    fn load(&self) -> Result<Dictionary> {
        let text = read_source(&self.path)?;
        Dictionary::from_json_str(&text, &self.config)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Loads a plain-text word list from a file.
#[derive(Debug, Clone)]
pub struct WordListLoader {
    pub path: PathBuf,
    pub config: EngineConfig,
}

impl WordListLoader {
    pub fn new(path: impl Into<PathBuf>, config: EngineConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }
}

impl DictionaryLoader for WordListLoader {
    fn load(&self) -> Result<Dictionary> {
        let text = read_source(&self.path)?;
        Dictionary::from_word_list(&text, &self.config)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Loads the dictionary bundled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedLoader {
    pub config: EngineConfig,
}

impl EmbeddedLoader {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }
}

impl DictionaryLoader for EmbeddedLoader {
    /// Bundled words outside the configured bounds are skipped rather than
    /// treated as malformed.
    fn load(&self) -> Result<Dictionary> {
        let words: Vec<String> = serde_json::from_str(EMBEDDED_DICTIONARY)?;
        Dictionary::from_words(
            words.into_iter().filter(|word| is_word(word, &self.config)),
            &self.config,
        )
    }

    fn describe(&self) -> String {
        "embedded dictionary".to_string()
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Pick a loader for `path` by extension: `.json` files use the JSON
/// array format, anything else is read as a plain word list.
pub fn loader_for_path(path: &Path, config: EngineConfig) -> Box<dyn DictionaryLoader> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Box::new(JsonFileLoader::new(path, config)),
        _ => Box::new(WordListLoader::new(path, config)),
    }
}

/// Load state of the dictionary as seen by the engine.
#[derive(Debug, Clone)]
pub enum DictionaryState {
    Loading,
    Ready(Arc<Dictionary>),
    Failed(Arc<LoadError>),
}

impl DictionaryState {
    pub fn from_result(result: Result<Dictionary>) -> Self {
        match result {
            Ok(dictionary) => DictionaryState::Ready(Arc::new(dictionary)),
            Err(err) => DictionaryState::Failed(Arc::new(err)),
        }
    }

    pub fn dictionary(&self) -> Option<&Arc<Dictionary>> {
        match self {
            DictionaryState::Ready(dictionary) => Some(dictionary),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, DictionaryState::Loading)
    }
}

/// A one-time background load.
#[derive(Debug)]
pub struct DictionaryHandle {
    receiver: Option<Receiver<Result<Dictionary>>>,
    state: DictionaryState,
}

impl DictionaryHandle {
    pub fn spawn(loader: Box<dyn DictionaryLoader>) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let source = loader.describe();
            let result = loader.load();
            match &result {
                Ok(dictionary) => info!("loaded {} words from {}", dictionary.len(), source),
                Err(err) => warn!("failed to load dictionary from {}: {}", source, err),
            }
            // The handle may have been dropped; nothing left to report to.
            let _ = sender.send(result);
        });
        Self {
            receiver: Some(receiver),
            state: DictionaryState::Loading,
        }
    }

    /// Check for completion without blocking.
    pub fn poll(&mut self) -> &DictionaryState {
        if let Some(receiver) = &self.receiver {
            match receiver.try_recv() {
                Ok(result) => self.resolve(result),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => self.resolve(Err(LoadError::Disconnected)),
            }
        }
        &self.state
    }

    /// Block until the load has resolved.
    pub fn wait(mut self) -> DictionaryState {
        if let Some(receiver) = self.receiver.take() {
            let result = receiver.recv().unwrap_or(Err(LoadError::Disconnected));
            self.state = DictionaryState::from_result(result);
        }
        self.state
    }

    fn resolve(&mut self, result: Result<Dictionary>) {
        self.receiver = None;
        self.state = DictionaryState::from_result(result);
    }
}
