//! Wordly
//!
//! A five-letter word guessing game with a terminal UI, a simple line-based
//! mode, and pluggable word sources (public word APIs or an offline list).
//!
//! # Quick Start
//!
//! ```rust
//! use wordly::core::{LetterState, Word, evaluate};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! let row = evaluate(&guess, &target);
//! assert_eq!(row.states()[2], LetterState::Correct);
//! println!("{}", row.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state machine and request coordination
pub mod game;

// Word sources
pub mod source;

// Word lists
pub mod wordlists;

// Share text
pub mod share;

// Runtime configuration
pub mod config;

// Logger setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
