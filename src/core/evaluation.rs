//! Guess evaluation
//!
//! Maps a guess and a target word to per-letter feedback:
//! - `Correct`: right letter, right position
//! - `Present`: letter in the target, wrong position
//! - `Absent`: letter not in the target (accounting for multiplicity)
//!
//! Rows that have not been submitted yet are all `Unevaluated`.

use super::{WORD_LENGTH, Word};

/// Feedback for a single letter cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    #[default]
    Unevaluated,
    Correct,
    Present,
    Absent,
}

impl LetterState {
    /// Share-text symbol for this state
    ///
    /// `Unevaluated` has no symbol.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::Correct => Some('🟩'),
            Self::Present => Some('🟨'),
            Self::Absent => Some('⬛'),
            Self::Unevaluated => None,
        }
    }
}

/// Feedback for one row of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EvaluationRow([LetterState; WORD_LENGTH]);

impl EvaluationRow {
    /// Row with every cell `Unevaluated`
    pub const EMPTY: Self = Self([LetterState::Unevaluated; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Check if this row holds feedback for a submitted guess
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.0.iter().any(|&s| s != LetterState::Unevaluated)
    }

    /// Count the cells in the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert the row to its emoji string, e.g. "⬛⬛🟨🟨🟩"
    ///
    /// Returns an empty string for an unevaluated row.
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().filter_map(|s| s.symbol()).collect()
    }
}

/// Evaluate `guess` against `target`
///
/// Two passes, so duplicate letters are handled the way players expect:
/// 1. Exact position matches are marked `Correct` and consumed from the target pool
/// 2. Remaining guess letters, left to right, consume one unmatched occurrence from
///    the pool and become `Present`, or `Absent` once the pool for that letter is empty
///
/// # Examples
/// ```
/// use wordly::core::{LetterState::*, Word, evaluate};
///
/// let guess = Word::new("grape").unwrap();
/// let target = Word::new("apple").unwrap();
///
/// assert_eq!(
///     evaluate(&guess, &target).states(),
///     &[Absent, Absent, Present, Present, Correct]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> EvaluationRow {
    let mut result = [LetterState::Absent; WORD_LENGTH];
    let mut available = target.char_counts();

    // Allow: Index needed to compare guess[i] with target[i] and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.chars()[i] == target.chars()[i] {
            result[i] = LetterState::Correct;
            if let Some(count) = available.get_mut(&guess.chars()[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == LetterState::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&guess.chars()[i])
            && *count > 0
        {
            result[i] = LetterState::Present;
            *count -= 1;
        }
    }

    EvaluationRow(result)
}

#[cfg(test)]
mod tests {
    use super::LetterState::{Absent, Correct, Present};
    use super::*;
    use proptest::prelude::*;

    fn eval(guess: &str, target: &str) -> EvaluationRow {
        evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    /// Correct + Present markings for `letter` in the row
    fn marked(row: &EvaluationRow, guess: &str, letter: u8) -> usize {
        guess
            .bytes()
            .zip(row.states())
            .filter(|&(b, &s)| b == letter && matches!(s, Correct | Present))
            .count()
    }

    #[test]
    fn evaluate_identical_words() {
        let row = eval("crane", "crane");
        assert!(row.is_solved());
        assert_eq!(row.count(Correct), 5);
    }

    #[test]
    fn evaluate_disjoint_words() {
        let row = eval("abcde", "fghij");
        assert_eq!(row.states(), &[Absent; 5]);
        assert!(!row.is_solved());
        assert!(row.is_evaluated());
    }

    #[test]
    fn evaluate_grape_against_apple() {
        let row = eval("grape", "apple");
        assert_eq!(row.states(), &[Absent, Absent, Present, Present, Correct]);
    }

    #[test]
    fn evaluate_duplicate_letters_respect_target_count() {
        // SPEED has two Es; ERASE has two Es, neither in an E position of SPEED
        let row = eval("erase", "speed");
        assert_eq!(row.states(), &[Present, Absent, Absent, Present, Present]);
        assert!(marked(&row, "ERASE", b'E') <= 2);
    }

    #[test]
    fn evaluate_green_consumes_before_yellow() {
        // ROBOT vs FLOOR: second O is green, first O still finds the other O
        let row = eval("robot", "floor");
        assert_eq!(row.states(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn evaluate_surplus_duplicates_are_absent() {
        // Only one L in PLANT: the left-most unmatched L gets it
        let row = eval("lolly", "plant");
        assert_eq!(row.states(), &[Present, Absent, Absent, Absent, Absent]);

        // An exact match wins over an earlier duplicate
        let row = eval("eerie", "crane");
        assert_eq!(row.states(), &[Absent, Absent, Present, Absent, Correct]);
    }

    #[test]
    fn evaluate_real_example() {
        let row = eval("crane", "slate");
        assert_eq!(row.states(), &[Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn evaluation_row_empty() {
        assert!(!EvaluationRow::EMPTY.is_evaluated());
        assert_eq!(EvaluationRow::default(), EvaluationRow::EMPTY);
        assert_eq!(EvaluationRow::EMPTY.to_emoji(), "");
    }

    #[test]
    fn evaluation_row_emoji() {
        let row = eval("grape", "apple");
        assert_eq!(row.to_emoji(), "⬛⬛🟨🟨🟩");
    }

    fn word_strategy() -> impl Strategy<Value = String> {
        "[A-Z]{5}"
    }

    proptest! {
        #[test]
        fn equal_words_are_all_correct(word in word_strategy()) {
            prop_assert!(eval(&word, &word).is_solved());
        }

        #[test]
        fn disjoint_words_are_all_absent(guess in "[A-M]{5}", target in "[N-Z]{5}") {
            prop_assert_eq!(eval(&guess, &target).count(Absent), 5);
        }

        #[test]
        fn marks_never_exceed_target_multiplicity(
            guess in word_strategy(),
            target in word_strategy(),
        ) {
            let row = eval(&guess, &target);
            for letter in b'A'..=b'Z' {
                let in_target = target.bytes().filter(|&b| b == letter).count();
                prop_assert!(marked(&row, &guess, letter) <= in_target);
            }
        }

        #[test]
        fn evaluation_is_repeatable(guess in word_strategy(), target in word_strategy()) {
            prop_assert_eq!(eval(&guess, &target), eval(&guess, &target));
        }
    }
}
