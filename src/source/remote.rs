//! Remote word source backed by public word APIs
//!
//! Targets come from the Datamuse word finder, validation from the free
//! dictionary API. Both are best effort; wrap this source in a
//! [`Fallback`](super::Fallback) so outages degrade to offline play.

use super::{WordSource, WordSourceError};
use crate::core::Word;
use async_trait::async_trait;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Up to 100 five-character words
pub const DATAMUSE_URL: &str = "https://api.datamuse.com/words?sp=?????&max=100";

/// Entries live at `<base>/<word>`
pub const DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Deserialize)]
struct DatamuseEntry {
    word: String,
}

pub struct RemoteWordSource {
    client: Client,
    words_url: String,
    dictionary_url: String,
    rng: Mutex<StdRng>,
}

impl RemoteWordSource {
    /// Create a source whose requests give up after `timeout`
    ///
    /// # Errors
    /// Returns `Http` if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, WordSourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            words_url: DATAMUSE_URL.to_string(),
            dictionary_url: DICTIONARY_URL.to_string(),
            rng: Mutex::new(StdRng::from_os_rng()),
        })
    }

    /// Point the source at different services
    #[must_use]
    pub fn with_endpoints(self, words_url: impl Into<String>, dictionary_url: impl Into<String>) -> Self {
        Self {
            words_url: words_url.into(),
            dictionary_url: dictionary_url.into(),
            ..self
        }
    }

    /// Make target selection reproducible
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    fn entry_url(&self, word: &Word) -> String {
        format!(
            "{}/{}",
            self.dictionary_url.trim_end_matches('/'),
            word.text().to_ascii_lowercase()
        )
    }
}

/// Keep the entries that are plain five-letter words
///
/// Datamuse pattern matches count characters, so hyphens and spaces slip in.
fn usable_words(entries: Vec<DatamuseEntry>) -> Vec<Word> {
    entries
        .into_iter()
        .filter_map(|entry| Word::new(entry.word).ok())
        .collect()
}

/// Map a dictionary lookup status to a verdict
///
/// Unknown words are a 404; any other failure means the service is not
/// answering the question.
fn verdict(status: StatusCode) -> Result<bool, WordSourceError> {
    if status.is_success() {
        Ok(true)
    } else if status == StatusCode::NOT_FOUND {
        Ok(false)
    } else {
        Err(WordSourceError::Status(status.as_u16()))
    }
}

#[async_trait]
impl WordSource for RemoteWordSource {
    async fn fetch_target_word(&self) -> Result<Word, WordSourceError> {
        let entries: Vec<DatamuseEntry> = self
            .client
            .get(&self.words_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let words = usable_words(entries);
        log::debug!("Datamuse returned {} usable words", words.len());

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        words
            .choose(&mut *rng)
            .cloned()
            .ok_or(WordSourceError::EmptyResponse)
    }

    async fn is_valid_word(&self, word: &Word) -> Result<bool, WordSourceError> {
        let response = self.client.get(self.entry_url(word)).send().await?;
        verdict(response.status())
    }
}
