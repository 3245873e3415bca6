//! Game session state machine
//!
//! One session covers one target word: a grid of `MAX_ATTEMPTS` rows of
//! `WORD_LENGTH` cells, the evaluation of every submitted row, the cursor and
//! the terminal status. Sessions are never reset in place; a restart builds a
//! new one.

use super::GameError;
use crate::core::{EvaluationRow, MAX_ATTEMPTS, WORD_LENGTH, Word, evaluate};

/// Letters typed so far; `None` is an empty cell
pub type GuessGrid = [[Option<char>; WORD_LENGTH]; MAX_ATTEMPTS];

/// Feedback for every row; unsubmitted rows are `EvaluationRow::EMPTY`
pub type EvaluationGrid = [EvaluationRow; MAX_ATTEMPTS];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    grid: GuessGrid,
    evaluations: EvaluationGrid,
    current_row: usize,
    current_col: usize,
    status: Status,
}

/// Read-only copy of a session for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: GuessGrid,
    pub evaluations: EvaluationGrid,
    pub current_row: usize,
    pub current_col: usize,
    pub status: Status,
    /// Only exposed once the game is lost
    pub target: Option<Word>,
    /// Only set once the game is won
    pub attempts: Option<usize>,
}

impl Session {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            grid: [[None; WORD_LENGTH]; MAX_ATTEMPTS],
            evaluations: [EvaluationRow::EMPTY; MAX_ATTEMPTS],
            current_row: 0,
            current_col: 0,
            status: Status::InProgress,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn grid(&self) -> &GuessGrid {
        &self.grid
    }

    #[must_use]
    pub const fn evaluations(&self) -> &EvaluationGrid {
        &self.evaluations
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Number of guesses it took, once won
    #[must_use]
    pub const fn attempts(&self) -> Option<usize> {
        match self.status {
            Status::Won => Some(self.current_row + 1),
            _ => None,
        }
    }

    /// The target word, once lost
    #[must_use]
    pub const fn revealed_target(&self) -> Option<&Word> {
        match self.status {
            Status::Lost => Some(&self.target),
            _ => None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            evaluations: self.evaluations,
            current_row: self.current_row,
            current_col: self.current_col,
            status: self.status,
            target: self.revealed_target().cloned(),
            attempts: self.attempts(),
        }
    }

    /// Write a letter into the next free cell of the current row
    ///
    /// # Errors
    /// `GameOver` once the game has ended, `InvalidLetter` for anything but
    /// A-Z, `RowFull` when the row already has `WORD_LENGTH` letters.
    pub fn type_letter(&mut self, c: char) -> Result<(), GameError> {
        self.ensure_in_progress()?;

        if !c.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(c));
        }
        if self.current_col >= WORD_LENGTH {
            return Err(GameError::RowFull);
        }

        self.grid[self.current_row][self.current_col] = Some(c.to_ascii_uppercase());
        self.current_col += 1;
        Ok(())
    }

    /// Clear the last letter of the current row
    ///
    /// # Errors
    /// `GameOver` once the game has ended, `NothingToErase` on an empty row.
    pub fn backspace(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;

        if self.current_col == 0 {
            return Err(GameError::NothingToErase);
        }

        self.current_col -= 1;
        self.grid[self.current_row][self.current_col] = None;
        Ok(())
    }

    /// The word assembled in the current row, ready for validation
    ///
    /// # Errors
    /// `GameOver` once the game has ended, `IncompleteGuess` if the row is not full.
    pub fn pending_guess(&self) -> Result<Word, GameError> {
        self.ensure_in_progress()?;

        if self.current_col != WORD_LENGTH {
            return Err(GameError::IncompleteGuess);
        }

        Word::from_cells(&self.grid[self.current_row]).ok_or(GameError::IncompleteGuess)
    }

    /// Evaluate a validated guess and advance the game
    ///
    /// `guess` must be the word currently in the row, as returned by
    /// [`pending_guess`](Self::pending_guess).
    ///
    /// # Errors
    /// Same as `pending_guess`, plus `StaleCompletion` if the row no longer
    /// holds `guess`.
    pub fn commit_guess(&mut self, guess: &Word) -> Result<Status, GameError> {
        if self.pending_guess()? != *guess {
            return Err(GameError::StaleCompletion);
        }

        let row = evaluate(guess, &self.target);
        self.evaluations[self.current_row] = row;

        if row.is_solved() {
            self.status = Status::Won;
            log::info!("Solved in {} attempts", self.current_row + 1);
        } else if self.current_row == MAX_ATTEMPTS - 1 {
            self.status = Status::Lost;
            log::info!("Out of attempts, the word was {}", self.target);
        } else {
            self.current_row += 1;
            self.current_col = 0;
        }

        Ok(self.status)
    }

    /// Validate and commit the current row in one step
    ///
    /// # Errors
    /// `IncompleteGuess`, `InvalidWord` when `is_valid` rejects the word, or
    /// `GameOver`. State is unchanged on error.
    pub fn submit(&mut self, is_valid: impl FnOnce(&Word) -> bool) -> Result<Status, GameError> {
        let guess = self.pending_guess()?;
        if !is_valid(&guess) {
            return Err(GameError::InvalidWord(guess));
        }
        self.commit_guess(&guess)
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
