//! Game state machine and its coordination with a word source
//!
//! [`Session`] is the pure state machine for one game. [`Game`] wraps it with
//! the in-flight guard and generation counter needed when the word source is
//! asynchronous, and [`Driver`] resolves those requests inline.

mod coordinator;
mod driver;
mod error;
mod event;
mod session;
mod stats;

pub use coordinator::{Game, Request, Step};
pub use driver::{Driver, Outcome};
pub use error::{GameError, Notice};
pub use event::Event;
pub use session::{EvaluationGrid, GuessGrid, Session, Snapshot, Status};
pub use stats::Statistics;
