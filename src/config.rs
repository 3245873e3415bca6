//! Game configuration
//!
//! Collected from the command line and turned into a word source once at
//! startup.

use crate::core::Word;
use crate::source::{
    Fallback, OfflineWordSource, RemoteWordSource, SourceKind, Validation, WordSourceError,
};
use clap::ValueEnum;
use std::path::PathBuf;
use std::time::Duration;

/// Where target words come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceChoice {
    /// Built-in or custom word list only
    Offline,
    /// Public word APIs, falling back to the word list
    #[default]
    Remote,
}

/// How the word list validates guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ValidationMode {
    /// Any five letters
    #[default]
    Shape,
    /// Only words from the word list
    List,
}

impl From<ValidationMode> for Validation {
    fn from(mode: ValidationMode) -> Self {
        match mode {
            ValidationMode::Shape => Self::Shape,
            ValidationMode::List => Self::List,
        }
    }
}

/// Configuration for a run of the game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub source: SourceChoice,
    /// Per-request timeout for the remote source
    pub timeout: Duration,
    pub validation: ValidationMode,
    /// Custom word list replacing the embedded one
    pub wordlist: Option<PathBuf>,
    pub seed: Option<u64>,
    /// Always play this word; forces offline play
    pub target: Option<Word>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            source: SourceChoice::default(),
            timeout: Duration::from_secs(5),
            validation: ValidationMode::default(),
            wordlist: None,
            seed: None,
            target: None,
        }
    }
}

impl GameConfig {
    /// Construct the configured word source
    ///
    /// # Errors
    /// Fails if the custom word list cannot be read or is empty, or if the
    /// HTTP client cannot be built.
    pub fn build_source(&self) -> Result<SourceKind, WordSourceError> {
        let offline = self.offline_source()?;

        if self.target.is_some() || self.source == SourceChoice::Offline {
            return Ok(SourceKind::Offline(offline));
        }

        let remote = RemoteWordSource::new(self.timeout)?;
        let remote = match self.seed {
            Some(seed) => remote.with_seed(seed),
            None => remote,
        };
        Ok(SourceKind::Remote(Fallback::new(remote, offline)))
    }

    fn offline_source(&self) -> Result<OfflineWordSource, WordSourceError> {
        if let Some(target) = &self.target {
            return OfflineWordSource::from_words(vec![target.clone()]);
        }

        let source = match &self.wordlist {
            Some(path) => OfflineWordSource::from_file(path)?,
            None => OfflineWordSource::embedded(),
        }
        .with_validation(self.validation.into());

        Ok(match self.seed {
            Some(seed) => source.with_seed(seed),
            None => source,
        })
    }
}
