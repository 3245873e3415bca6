//! Runtime selection of a word source

use super::{Fallback, OfflineWordSource, RemoteWordSource, WordSource, WordSourceError};
use crate::core::Word;
use async_trait::async_trait;

/// Enum wrapper for all word source types
///
/// Allows runtime selection of the source while maintaining static dispatch.
pub enum SourceKind {
    /// Fixed word list only
    Offline(OfflineWordSource),
    /// Public APIs, degrading to a fixed word list
    Remote(Fallback<RemoteWordSource, OfflineWordSource>),
}

impl SourceKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Offline(_) => "offline",
            Self::Remote(_) => "remote",
        }
    }
}

#[async_trait]
impl WordSource for SourceKind {
    async fn fetch_target_word(&self) -> Result<Word, WordSourceError> {
        match self {
            Self::Offline(s) => s.fetch_target_word().await,
            Self::Remote(s) => s.fetch_target_word().await,
        }
    }

    async fn is_valid_word(&self, word: &Word) -> Result<bool, WordSourceError> {
        match self {
            Self::Offline(s) => s.is_valid_word(word).await,
            Self::Remote(s) => s.is_valid_word(word).await,
        }
    }
}
