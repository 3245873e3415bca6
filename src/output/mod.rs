//! Terminal output formatting
//!
//! Colored boards and summaries for the simple CLI.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_result, print_statistics};
