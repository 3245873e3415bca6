//! Formatting utilities for terminal output

use crate::core::{EvaluationRow, LetterState, WORD_LENGTH};
use colored::{ColoredString, Colorize};

/// Format one letter cell with its feedback color
#[must_use]
pub fn colored_cell(letter: Option<char>, state: LetterState) -> ColoredString {
    let Some(c) = letter else {
        return " · ".bright_black();
    };

    let cell = format!(" {c} ");
    match state {
        LetterState::Correct => cell.black().on_green().bold(),
        LetterState::Present => cell.black().on_yellow().bold(),
        LetterState::Absent => cell.white().on_bright_black().bold(),
        LetterState::Unevaluated => cell.white().bold(),
    }
}

/// Format a grid row as colored cells separated by spaces
#[must_use]
pub fn colored_row(letters: &[Option<char>; WORD_LENGTH], evaluation: &EvaluationRow) -> String {
    letters
        .iter()
        .zip(evaluation.states())
        .map(|(&letter, &state)| colored_cell(letter, state).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    #[test]
    fn empty_cell_is_a_dot() {
        colored::control::set_override(false);
        assert_eq!(colored_cell(None, LetterState::Unevaluated).to_string(), " · ");
    }

    #[test]
    fn row_text_without_color() {
        colored::control::set_override(false);
        let row = evaluate(&Word::new("grape").unwrap(), &Word::new("apple").unwrap());
        let letters = [Some('G'), Some('R'), Some('A'), Some('P'), Some('E')];
        assert_eq!(colored_row(&letters, &row), " G   R   A   P   E ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
