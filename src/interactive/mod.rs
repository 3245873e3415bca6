//! Interactive TUI interface

pub mod app;
pub mod rendering;
pub mod typewriter;

pub use app::{App, run_tui};
