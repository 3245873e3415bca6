//! Inline request resolution
//!
//! The driver owns a [`Game`] and a [`WordSource`] and awaits every request
//! before returning, so events are handled strictly one at a time.

use super::{Event, Game, GameError, Request, Status, Step};
use crate::source::WordSource;

/// What a dispatched event ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A letter was typed or erased
    Edited,
    /// A guess was evaluated; carries the resulting status
    Submitted(Status),
    /// A new session was started
    Restarted,
}

pub struct Driver<S> {
    game: Game,
    source: S,
}

impl<S: WordSource> Driver<S> {
    /// Fetch a first target word and start playing
    ///
    /// # Errors
    /// Returns `GameError::Source` if no target word could be fetched.
    pub async fn start(source: S) -> Result<Self, GameError> {
        let (game, request) = Game::start();
        let mut driver = Self { game, source };
        driver.resolve(request).await?;
        Ok(driver)
    }

    pub const fn game(&self) -> &Game {
        &self.game
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Handle one event to completion
    ///
    /// # Errors
    /// Any rejection from the game; state is unchanged when this fails.
    pub async fn dispatch(&mut self, event: Event) -> Result<Outcome, GameError> {
        match self.game.handle(event)? {
            Step::Applied => Ok(Outcome::Edited),
            Step::Await(request) => self.resolve(request).await,
        }
    }

    async fn resolve(&mut self, request: Request) -> Result<Outcome, GameError> {
        match &request {
            Request::FetchTarget { .. } => {
                let target = self.source.fetch_target_word().await;
                self.game.complete_fetch(&request, target)?;
                Ok(Outcome::Restarted)
            }
            Request::Validate { guess, .. } => {
                let verdict = self.source.is_valid_word(guess).await;
                let status = self.game.complete_validation(&request, verdict)?;
                Ok(Outcome::Submitted(status))
            }
        }
    }
}
