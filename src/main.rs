//! Wordly - CLI
//!
//! Five-letter word guessing game with TUI and simple CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;
use wordly::{
    commands::run_simple,
    config::{GameConfig, SourceChoice, ValidationMode},
    core::Word,
    interactive::{App, run_tui},
    logging::{LogTarget, init_logging},
};

#[derive(Parser)]
#[command(
    name = "wordly",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word source: remote (default, falls back to offline) or offline
    #[arg(long, global = true, value_enum, default_value_t = SourceChoice::Remote)]
    source: SourceChoice,

    /// Timeout in seconds for each remote request
    #[arg(long, global = true, default_value = "5")]
    timeout_secs: u64,

    /// Offline guess validation: shape (any five letters) or list
    #[arg(long, global = true, value_enum, default_value_t = ValidationMode::Shape)]
    validation: ValidationMode,

    /// Custom word list file, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Always play this word (offline)
    #[arg(long, global = true)]
    target: Option<Word>,

    /// Log level: error, warn (default), info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log file used in TUI mode
    #[arg(long, global = true, default_value = "wordly.log")]
    log_file: PathBuf,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            source: self.source,
            timeout: Duration::from_secs(self.timeout_secs),
            validation: self.validation,
            wordlist: self.wordlist.clone(),
            seed: self.seed,
            target: self.target.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let level = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    let log_target = match command {
        Commands::Play => LogTarget::File(cli.log_file.clone()),
        Commands::Simple => LogTarget::Stderr,
    };
    init_logging(level, &log_target)?;

    let source = cli.game_config().build_source()?;
    log::info!("Using {} word source", source.name());

    let runtime = tokio::runtime::Runtime::new()?;

    match command {
        Commands::Play => run_tui(App::new(source, runtime.handle().clone())),
        Commands::Simple => runtime.block_on(run_simple(source)),
    }
}
