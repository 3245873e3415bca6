//! Primary/fallback composition

use super::{WordSource, WordSourceError};
use crate::core::Word;
use async_trait::async_trait;

/// Asks `primary` first and quietly falls back to `fallback` when it fails
///
/// Failures are logged, never surfaced to the player.
pub struct Fallback<P, F> {
    primary: P,
    fallback: F,
}

impl<P: WordSource, F: WordSource> Fallback<P, F> {
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P: WordSource, F: WordSource> WordSource for Fallback<P, F> {
    async fn fetch_target_word(&self) -> Result<Word, WordSourceError> {
        match self.primary.fetch_target_word().await {
            Ok(word) => Ok(word),
            Err(e) => {
                log::warn!("Falling back to offline word list: {e}");
                self.fallback.fetch_target_word().await
            }
        }
    }

    async fn is_valid_word(&self, word: &Word) -> Result<bool, WordSourceError> {
        match self.primary.is_valid_word(word).await {
            Ok(valid) => Ok(valid),
            Err(e) => {
                log::warn!("Falling back to offline validation for {word}: {e}");
                self.fallback.is_valid_word(word).await
            }
        }
    }
}
