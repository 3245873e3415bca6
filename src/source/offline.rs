//! Offline word source backed by a fixed word list

use super::{WordSource, WordSourceError};
use crate::core::Word;
use crate::wordlists::{TARGETS, loader};
use async_trait::async_trait;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use regex::Regex;
use std::path::Path;
use std::sync::{LazyLock, Mutex, PoisonError};

static WORD_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z]{5}$").expect("word shape pattern is valid"));

/// How guesses are checked without a dictionary service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Any five ASCII letters
    #[default]
    Shape,
    /// Only words in the source's list
    List,
}

/// Picks targets at random from a fixed list
pub struct OfflineWordSource {
    words: Vec<Word>,
    validation: Validation,
    rng: Mutex<StdRng>,
}

impl OfflineWordSource {
    /// Source over the embedded target list
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: loader::words_from_slice(TARGETS),
            validation: Validation::default(),
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Source over the given words
    ///
    /// # Errors
    /// Returns `EmptyWordList` if `words` is empty.
    pub fn from_words(words: Vec<Word>) -> Result<Self, WordSourceError> {
        if words.is_empty() {
            return Err(WordSourceError::EmptyWordList);
        }
        Ok(Self {
            words,
            validation: Validation::default(),
            rng: Mutex::new(StdRng::from_os_rng()),
        })
    }

    /// Source over a word list file, one word per line
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `EmptyWordList` if it holds no
    /// valid words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordSourceError> {
        let words = loader::load_from_file(path)?;
        Self::from_words(words)
    }

    #[must_use]
    pub const fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Make target selection reproducible
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    fn pick(&self) -> Option<Word> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.words.choose(&mut *rng).cloned()
    }
}

/// Check that `text` looks like a guessable word
#[must_use]
pub fn has_word_shape(text: &str) -> bool {
    WORD_SHAPE.is_match(text)
}

#[async_trait]
impl WordSource for OfflineWordSource {
    async fn fetch_target_word(&self) -> Result<Word, WordSourceError> {
        self.pick().ok_or(WordSourceError::EmptyWordList)
    }

    async fn is_valid_word(&self, word: &Word) -> Result<bool, WordSourceError> {
        Ok(match self.validation {
            Validation::Shape => has_word_shape(word.text()),
            Validation::List => self.words.contains(word),
        })
    }
}
