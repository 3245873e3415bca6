//! Coordination between the state machine and an asynchronous word source
//!
//! `submit` and `restart` need an answer from the word source before they can
//! take effect. [`Game::handle`] turns them into a [`Request`]; the caller runs
//! the request however it likes and hands the result back through
//! [`Game::complete_validation`] or [`Game::complete_fetch`].
//!
//! At most one request is in flight. While it is, every event is rejected with
//! [`GameError::Busy`]. Requests carry the session generation, which is bumped
//! on every restart, so a completion for anything but the current request is
//! dropped as stale.

use super::{Event, GameError, Session, Snapshot, Status};
use crate::core::Word;
use crate::source::WordSourceError;

/// Work the caller must perform against the word source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchTarget { generation: u64 },
    Validate { generation: u64, guess: Word },
}

impl Request {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        match self {
            Self::FetchTarget { generation } | Self::Validate { generation, .. } => *generation,
        }
    }
}

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The event took effect immediately
    Applied,
    /// The event is waiting on the word source
    Await(Request),
}

/// A game: the current session plus the request in flight
#[derive(Debug)]
pub struct Game {
    session: Option<Session>,
    generation: u64,
    in_flight: Option<Request>,
}

impl Game {
    /// Start a game with no target yet
    ///
    /// Returns the fetch request for the first target word.
    #[must_use]
    pub fn start() -> (Self, Request) {
        let mut game = Self {
            session: None,
            generation: 0,
            in_flight: None,
        };
        let request = game.begin_restart();
        (game, request)
    }

    /// Start a game with a known target
    #[must_use]
    pub fn with_target(target: Word) -> Self {
        Self {
            session: Some(Session::new(target)),
            generation: 0,
            in_flight: None,
        }
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.session.as_ref().map(Session::snapshot)
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn in_flight(&self) -> Option<&Request> {
        self.in_flight.as_ref()
    }

    /// Check if a new target word is being fetched
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.in_flight, Some(Request::FetchTarget { .. }))
    }

    /// Handle one input event
    ///
    /// # Errors
    /// `Busy` while a request is in flight, `Loading` when there is no session
    /// to edit, and any rejection from the session itself.
    pub fn handle(&mut self, event: Event) -> Result<Step, GameError> {
        if self.in_flight.is_some() {
            return Err(GameError::Busy);
        }

        match event {
            Event::TypeLetter(c) => {
                self.session_mut()?.type_letter(c)?;
                Ok(Step::Applied)
            }
            Event::Backspace => {
                self.session_mut()?.backspace()?;
                Ok(Step::Applied)
            }
            Event::Submit => {
                let guess = self.session_mut()?.pending_guess()?;
                let request = Request::Validate {
                    generation: self.generation,
                    guess,
                };
                self.in_flight = Some(request.clone());
                Ok(Step::Await(request))
            }
            Event::Restart => Ok(Step::Await(self.begin_restart())),
        }
    }

    /// Apply the word source's verdict on a submitted guess
    ///
    /// # Errors
    /// `StaleCompletion` if `request` is not the one in flight, `InvalidWord`
    /// if the word was rejected, `Source` if the lookup failed. The session is
    /// unchanged in every error case.
    pub fn complete_validation(
        &mut self,
        request: &Request,
        verdict: Result<bool, WordSourceError>,
    ) -> Result<Status, GameError> {
        let Request::Validate { guess, .. } = request else {
            return Err(GameError::StaleCompletion);
        };
        self.finish(request)?;

        let valid = verdict?;
        log::debug!("Validation of {guess}: {valid}");
        if !valid {
            return Err(GameError::InvalidWord(guess.clone()));
        }

        self.session_mut()?.commit_guess(guess)
    }

    /// Install the target fetched for a restart
    ///
    /// # Errors
    /// `StaleCompletion` if `request` is not the one in flight, `Source` if
    /// the fetch failed. After a failed fetch there is no session until the
    /// next restart succeeds.
    pub fn complete_fetch(
        &mut self,
        request: &Request,
        target: Result<Word, WordSourceError>,
    ) -> Result<(), GameError> {
        if !matches!(request, Request::FetchTarget { .. }) {
            return Err(GameError::StaleCompletion);
        }
        self.finish(request)?;

        let target = target?;
        log::debug!("New target for generation {}: {target}", self.generation);
        self.session = Some(Session::new(target));
        Ok(())
    }

    fn begin_restart(&mut self) -> Request {
        self.generation += 1;
        self.session = None;
        log::info!("Starting game {}", self.generation);

        let request = Request::FetchTarget {
            generation: self.generation,
        };
        self.in_flight = Some(request.clone());
        request
    }

    fn finish(&mut self, request: &Request) -> Result<(), GameError> {
        if self.in_flight.as_ref() == Some(request) {
            self.in_flight = None;
            Ok(())
        } else {
            log::debug!(
                "Dropping stale completion for generation {} (current {})",
                request.generation(),
                self.generation
            );
            Err(GameError::StaleCompletion)
        }
    }

    fn session_mut(&mut self) -> Result<&mut Session, GameError> {
        self.session.as_mut().ok_or(GameError::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn type_word(game: &mut Game, text: &str) {
        for c in text.chars() {
            assert_eq!(game.handle(Event::TypeLetter(c)).unwrap(), Step::Applied);
        }
    }

    fn submit(game: &mut Game) -> Request {
        match game.handle(Event::Submit).unwrap() {
            Step::Await(request) => request,
            Step::Applied => panic!("submit must wait for validation"),
        }
    }

    #[test]
    fn start_waits_for_first_target() {
        let (mut game, request) = Game::start();
        assert!(game.is_loading());
        assert!(game.snapshot().is_none());
        assert_eq!(request, Request::FetchTarget { generation: 1 });

        assert!(matches!(
            game.handle(Event::TypeLetter('A')),
            Err(GameError::Busy)
        ));

        game.complete_fetch(&request, Ok(word("apple"))).unwrap();
        assert!(!game.is_loading());
        assert_eq!(game.snapshot().unwrap().status, Status::InProgress);
    }

    #[test]
    fn submit_flows_through_validation() {
        let mut game = Game::with_target(word("apple"));
        type_word(&mut game, "grape");

        let request = submit(&mut game);
        assert_eq!(
            request,
            Request::Validate {
                generation: 0,
                guess: word("grape")
            }
        );

        let status = game.complete_validation(&request, Ok(true)).unwrap();
        assert_eq!(status, Status::InProgress);
        assert_eq!(game.session().unwrap().current_row(), 1);
    }

    #[test]
    fn everything_is_busy_while_validating() {
        let mut game = Game::with_target(word("apple"));
        type_word(&mut game, "grape");
        let request = submit(&mut game);
        let before = game.snapshot();

        for event in [
            Event::TypeLetter('X'),
            Event::Backspace,
            Event::Submit,
            Event::Restart,
        ] {
            assert!(matches!(game.handle(event), Err(GameError::Busy)));
        }
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.generation(), 0);

        game.complete_validation(&request, Ok(true)).unwrap();
        assert!(game.in_flight().is_none());
    }

    #[test]
    fn rejected_word_leaves_row_editable() {
        let mut game = Game::with_target(word("apple"));
        type_word(&mut game, "xqzvk");
        let request = submit(&mut game);

        let err = game.complete_validation(&request, Ok(false)).unwrap_err();
        assert!(matches!(err, GameError::InvalidWord(_)));
        assert!(game.in_flight().is_none());

        assert_eq!(game.handle(Event::Backspace).unwrap(), Step::Applied);
        assert_eq!(game.session().unwrap().current_col(), 4);
    }

    #[test]
    fn source_failure_is_non_fatal() {
        let mut game = Game::with_target(word("apple"));
        type_word(&mut game, "grape");
        let request = submit(&mut game);

        let err = game
            .complete_validation(&request, Err(WordSourceError::EmptyResponse))
            .unwrap_err();
        assert!(matches!(err, GameError::Source(_)));
        assert!(err.notice().is_some());
        assert!(!game.session().unwrap().evaluations()[0].is_evaluated());
    }

    #[test]
    fn incomplete_submit_sends_no_request() {
        let mut game = Game::with_target(word("apple"));
        type_word(&mut game, "gr");
        assert!(matches!(
            game.handle(Event::Submit),
            Err(GameError::IncompleteGuess)
        ));
        assert!(game.in_flight().is_none());
    }

    #[test]
    fn restart_discards_previous_grid() {
        let mut game = Game::with_target(word("apple"));
        type_word(&mut game, "grape");
        let request = submit(&mut game);
        game.complete_validation(&request, Ok(true)).unwrap();
        type_word(&mut game, "cr");

        let Step::Await(fetch) = game.handle(Event::Restart).unwrap() else {
            panic!("restart must fetch a new word");
        };
        assert_eq!(fetch.generation(), 1);
        assert!(game.session().is_none());

        game.complete_fetch(&fetch, Ok(word("crane"))).unwrap();
        let snapshot = game.snapshot().unwrap();
        assert!(snapshot.grid.iter().flatten().all(Option::is_none));
        assert!(snapshot.evaluations.iter().all(|r| !r.is_evaluated()));
        assert_eq!((snapshot.current_row, snapshot.current_col), (0, 0));
        assert_eq!(game.session().unwrap().target().text(), "CRANE");
    }

    #[test]
    fn stale_completions_are_dropped() {
        let (mut game, first) = Game::start();
        game.complete_fetch(&first, Ok(word("apple"))).unwrap();

        // Completing the same fetch twice
        assert!(matches!(
            game.complete_fetch(&first, Ok(word("crane"))),
            Err(GameError::StaleCompletion)
        ));

        let Step::Await(second) = game.handle(Event::Restart).unwrap() else {
            panic!("restart must fetch a new word");
        };

        // A completion tagged with an older generation
        assert!(matches!(
            game.complete_fetch(&first, Ok(word("crane"))),
            Err(GameError::StaleCompletion)
        ));
        assert!(game.is_loading());

        game.complete_fetch(&second, Ok(word("slate"))).unwrap();
        assert_eq!(game.session().unwrap().target().text(), "SLATE");
    }

    #[test]
    fn mismatched_completion_kind_is_stale() {
        let (mut game, fetch) = Game::start();
        assert!(matches!(
            game.complete_validation(&fetch, Ok(true)),
            Err(GameError::StaleCompletion)
        ));
        assert!(game.is_loading());
    }

    #[test]
    fn failed_fetch_allows_retry() {
        let (mut game, request) = Game::start();
        let err = game
            .complete_fetch(&request, Err(WordSourceError::EmptyWordList))
            .unwrap_err();
        assert!(matches!(err, GameError::Source(_)));
        assert!(!game.is_loading());
        assert!(matches!(
            game.handle(Event::TypeLetter('A')),
            Err(GameError::Loading)
        ));

        let Step::Await(retry) = game.handle(Event::Restart).unwrap() else {
            panic!("restart must fetch a new word");
        };
        game.complete_fetch(&retry, Ok(word("apple"))).unwrap();
        assert!(game.session().is_some());
    }

    #[test]
    fn finished_game_still_restarts() {
        let mut game = Game::with_target(word("apple"));
        type_word(&mut game, "apple");
        let request = submit(&mut game);
        assert_eq!(
            game.complete_validation(&request, Ok(true)).unwrap(),
            Status::Won
        );

        assert!(matches!(
            game.handle(Event::TypeLetter('A')),
            Err(GameError::GameOver)
        ));
        assert!(matches!(
            game.handle(Event::Restart),
            Ok(Step::Await(Request::FetchTarget { generation: 1 }))
        ));
    }
}
