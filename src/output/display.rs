//! Display functions for the simple CLI

use super::formatters::{colored_row, create_progress_bar};
use crate::core::MAX_ATTEMPTS;
use crate::game::{Snapshot, Statistics, Status};
use crate::share::share_text;
use colored::Colorize;

/// Print the board up to and including the current row
pub fn print_board(snapshot: &Snapshot) {
    println!();
    for (row, (letters, evaluation)) in snapshot
        .grid
        .iter()
        .zip(snapshot.evaluations.iter())
        .enumerate()
    {
        if row > snapshot.current_row {
            break;
        }
        if evaluation.is_evaluated() {
            println!("  {}", colored_row(letters, evaluation));
        }
    }
    println!();
}

/// Print the result banner and share text of a finished game
pub fn print_result(snapshot: &Snapshot) {
    println!("{}", "═".repeat(50).bright_cyan());
    match snapshot.status {
        Status::InProgress => return,
        Status::Won => {
            let attempts = snapshot.attempts.unwrap_or(snapshot.current_row + 1);
            println!(
                "  {} Solved in {}/{MAX_ATTEMPTS}",
                "🎉".bold(),
                attempts.to_string().bright_cyan().bold()
            );
        }
        Status::Lost => {
            let target = snapshot
                .target
                .as_ref()
                .map_or_else(String::new, ToString::to_string);
            println!("  Out of guesses. The word was {}", target.bright_yellow().bold());
        }
    }
    println!("{}", "═".repeat(50).bright_cyan());

    if let Some(share) = share_text(snapshot) {
        println!("\n{share}\n");
    }
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "Statistics".bright_white().bold());
    println!(
        "  Played: {}  Won: {}  Win rate: {:.0}%",
        stats.games_played,
        stats.games_won,
        stats.win_rate()
    );

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return;
    }

    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        println!(
            "  {} {} {count}",
            i + 1,
            create_progress_bar(count as f64, max as f64, 20).green()
        );
    }
}
