//! Core domain types for the game
//!
//! Pure, UI-independent types: words and per-letter guess evaluation.

mod evaluation;
mod word;

pub use evaluation::{EvaluationRow, LetterState, evaluate};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;
