//! Command implementations

pub mod simple;

pub use simple::{play_line, run_simple};
