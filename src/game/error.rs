//! Game errors and user-facing notices

use crate::core::Word;
use crate::source::WordSourceError;
use thiserror::Error;

/// Reasons an event was rejected
///
/// Every variant leaves the game state unchanged.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Please enter a 5-letter word")]
    IncompleteGuess,
    #[error("{0} is not a valid English word")]
    InvalidWord(Word),
    #[error("Row is already full")]
    RowFull,
    #[error("Nothing to erase")]
    NothingToErase,
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
    #[error("Game is over")]
    GameOver,
    #[error("Waiting for the word source")]
    Busy,
    #[error("No word loaded yet")]
    Loading,
    #[error("Completion does not match the request in flight")]
    StaleCompletion,
    #[error(transparent)]
    Source(#[from] WordSourceError),
}

/// A transient message for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: String,
}

impl GameError {
    /// The notice to show the player, if this rejection deserves one
    ///
    /// Ignored keystrokes (full row, finished game, busy) stay silent.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        let title = match self {
            Self::IncompleteGuess => "Incomplete word",
            Self::InvalidWord(_) => "Invalid word",
            Self::Source(_) => "Word source unavailable",
            _ => return None,
        };

        Some(Notice {
            title,
            description: self.to_string(),
        })
    }
}
