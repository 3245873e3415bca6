//! Word sources
//!
//! A word source picks target words and decides which guesses are real
//! words. The game only sees the [`WordSource`] trait; the concrete source is
//! chosen once at startup through [`SourceKind`].

mod fallback;
mod kind;
mod offline;
mod remote;

pub use fallback::Fallback;
pub use kind::SourceKind;
pub use offline::{OfflineWordSource, Validation};
pub use remote::RemoteWordSource;

use crate::core::Word;
use async_trait::async_trait;
use thiserror::Error;

/// Capability consumed by the game
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Pick a new target word
    async fn fetch_target_word(&self) -> Result<Word, WordSourceError>;

    /// Check whether `word` is an acceptable guess
    async fn is_valid_word(&self, word: &Word) -> Result<bool, WordSourceError>;
}

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("Word source returned no usable words")]
    EmptyResponse,
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("Word list is empty")]
    EmptyWordList,
}
