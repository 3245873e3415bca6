//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is one guess or a command.

use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{Driver, Event, GameError, Outcome, Statistics};
use crate::output::{print_board, print_result, print_statistics};
use crate::source::WordSource;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or the first target word cannot be
/// fetched.
pub async fn run_simple<S: WordSource>(source: S) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                     Wordly                       ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!("Guess the hidden {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries.");
    println!(
        "  {} right spot   {} wrong spot   {} not in the word",
        " A ".black().on_green(),
        " A ".black().on_yellow(),
        " A ".white().on_bright_black()
    );
    println!("Commands: 'new' for a new word, 'quit' to exit\n");

    let mut driver = with_spinner("Fetching a word...", Driver::start(source)).await?;
    let mut stats = Statistics::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match driver.game().snapshot() {
            Some(snapshot) => prompt(&format!("Guess {}/{MAX_ATTEMPTS}", snapshot.current_row + 1))?,
            None => prompt("No word loaded, type 'new' to retry")?,
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim().to_lowercase();

        match line.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                restart(&mut driver).await;
                continue;
            }
            _ => {}
        }

        match with_spinner("Checking word...", play_line(&mut driver, &line)).await {
            Ok(Outcome::Submitted(status)) => {
                let Some(snapshot) = driver.game().snapshot() else {
                    continue;
                };
                print_board(&snapshot);

                if status.is_over() {
                    stats.record(&snapshot);
                    print_result(&snapshot);
                    print_statistics(&stats);

                    prompt("\nPlay again? (yes/no)")?;
                    match lines.next_line().await? {
                        Some(answer) if matches!(answer.trim(), "y" | "yes") => {
                            restart(&mut driver).await;
                        }
                        _ => break,
                    }
                }
            }
            Ok(_) => {}
            Err(err) => report(&err),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Enter `line` into the current row and submit it
///
/// Leftovers from a rejected guess are erased first.
///
/// # Errors
/// Any rejection from the game, including `RowFull` for words that are too
/// long and `InvalidLetter` for anything but A-Z.
pub async fn play_line<S: WordSource>(
    driver: &mut Driver<S>,
    line: &str,
) -> Result<Outcome, GameError> {
    let typed = driver
        .game()
        .session()
        .map_or(0, |session| session.current_col());
    for _ in 0..typed {
        driver.dispatch(Event::Backspace).await?;
    }

    for c in line.chars() {
        driver.dispatch(Event::TypeLetter(c)).await?;
    }
    driver.dispatch(Event::Submit).await
}

async fn restart<S: WordSource>(driver: &mut Driver<S>) {
    match with_spinner("Fetching a word...", driver.dispatch(Event::Restart)).await {
        Ok(_) => println!("\n🔄 New word ready!\n"),
        Err(err) => report(&err),
    }
}

fn report(err: &GameError) {
    match err.notice() {
        Some(notice) => println!("❌ {}: {}\n", notice.title.bold(), notice.description),
        None => match err {
            GameError::RowFull => println!("❌ Too many letters, words have {WORD_LENGTH}\n"),
            _ => println!("❌ {err}\n"),
        },
    }
}

/// Show a spinner while `future` runs
async fn with_spinner<F: Future>(message: &'static str, future: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let output = future.await;
    spinner.finish_and_clear();
    output
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}: ");
    io::stdout().flush()
}
