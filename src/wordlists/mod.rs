//! Word lists for offline play
//!
//! Provides the embedded target list compiled into the binary, plus loading of
//! custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{TARGETS, TARGETS_COUNT};
