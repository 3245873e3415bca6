//! TUI application state and logic
//!
//! Word source requests run as tokio tasks; their results come back over a
//! channel that the event loop drains between frames.

use super::typewriter::Typewriter;
use crate::core::{MAX_ATTEMPTS, Word};
use crate::game::{Event, Game, GameError, Request, Statistics, Status, Step};
use crate::share::{GAME_NAME, share_text};
use crate::source::{WordSource, WordSourceError};
use anyhow::Result;
use crossterm::{
    event::{
        self as term, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

const SUBTITLE: &str = "Guess the hidden five-letter word";
const TICK: Duration = Duration::from_millis(50);
const MAX_MESSAGES: usize = 5;

/// Result of a word source request, paired with the request it answers
enum Completion {
    Fetched(Result<Word, WordSourceError>),
    Validated(Result<bool, WordSourceError>),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<S> {
    pub game: Game,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_help: bool,
    pub should_quit: bool,
    pub header: Typewriter,
    pub started: Instant,
    source: Arc<S>,
    runtime: Handle,
    tx: UnboundedSender<(Request, Completion)>,
    rx: UnboundedReceiver<(Request, Completion)>,
}

impl<S: WordSource + 'static> App<S> {
    /// Create the app and start fetching the first target word
    ///
    /// Requests are spawned on `runtime`.
    #[must_use]
    pub fn new(source: S, runtime: Handle) -> Self {
        let (game, request) = Game::start();
        let (tx, rx) = unbounded_channel();

        let app = Self {
            game,
            messages: Vec::new(),
            stats: Statistics::default(),
            show_help: true,
            should_quit: false,
            header: Typewriter::new(GAME_NAME, SUBTITLE),
            started: Instant::now(),
            source: Arc::new(source),
            runtime,
            tx,
            rx,
        };
        app.spawn(request);
        app
    }

    /// Feed one game event through the coordinator
    pub fn dispatch(&mut self, event: Event) {
        match self.game.handle(event) {
            Ok(Step::Applied) => {}
            Ok(Step::Await(request)) => self.spawn(request),
            Err(err) => self.report(&err),
        }
    }

    /// Apply every completion that has arrived so far
    pub fn poll_completions(&mut self) {
        while let Ok((request, completion)) = self.rx.try_recv() {
            match completion {
                Completion::Fetched(target) => {
                    match self.game.complete_fetch(&request, target) {
                        Ok(()) => self.add_message("New word ready. Good luck!", MessageStyle::Info),
                        Err(err) => self.report(&err),
                    }
                }
                Completion::Validated(verdict) => {
                    match self.game.complete_validation(&request, verdict) {
                        Ok(status) => self.on_submitted(status),
                        Err(err) => self.report(&err),
                    }
                }
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        if ctrl {
            if key.code == KeyCode::Char('n') {
                self.dispatch(Event::Restart);
            }
            return;
        }

        if self.is_over() {
            match key.code {
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.dispatch(Event::Restart),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        let event = match key.code {
            KeyCode::Enter => Some(Event::Submit),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Char(c) => Event::from_key(c.encode_utf8(&mut [0; 4])),
            _ => None,
        };
        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    fn spawn(&self, request: Request) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let completion = match &request {
                Request::FetchTarget { .. } => {
                    Completion::Fetched(source.fetch_target_word().await)
                }
                Request::Validate { guess, .. } => {
                    Completion::Validated(source.is_valid_word(guess).await)
                }
            };
            // The receiver is gone once the app quits
            let _ = tx.send((request, completion));
        });
    }

    fn on_submitted(&mut self, status: Status) {
        let Some(snapshot) = self.game.snapshot() else {
            return;
        };
        self.stats.record(&snapshot);

        match status {
            Status::InProgress => {}
            Status::Won => {
                let attempts = snapshot.attempts.unwrap_or(snapshot.current_row + 1);
                let celebration = match attempts {
                    1 => "Hole in one!",
                    2 => "Magnificent!",
                    3 => "Splendid!",
                    4 => "Great job!",
                    5 => "Nice work!",
                    _ => "Phew!",
                };
                self.add_message(
                    format!("{celebration} Solved in {attempts}/{MAX_ATTEMPTS}"),
                    MessageStyle::Success,
                );
            }
            Status::Lost => {
                let target = snapshot
                    .target
                    .as_ref()
                    .map_or_else(String::new, ToString::to_string);
                self.add_message(format!("The word was {target}"), MessageStyle::Error);
            }
        }
    }

    fn report(&mut self, err: &GameError) {
        match err.notice() {
            Some(notice) => {
                self.add_message(
                    format!("{}: {}", notice.title, notice.description),
                    MessageStyle::Error,
                );
            }
            None => log::trace!("Ignored input: {err}"),
        }
    }
}

impl<S> App<S> {
    /// Check if the current session has ended
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game
            .session()
            .is_some_and(|session| session.status().is_over())
    }

    /// Share text for the finished game
    #[must_use]
    pub fn share(&self) -> Option<String> {
        self.game.snapshot().as_ref().and_then(share_text)
    }

    pub fn add_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource + 'static>(app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource + 'static,
{
    loop {
        app.poll_completions();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll with a timeout so the header animation and completions keep moving
        if term::poll(TICK)?
            && let term::Event::Key(key) = term::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::OfflineWordSource;
    use crate::wordlists::loader::words_from_slice;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Let spawned requests run, then apply their results
    async fn settle<S: WordSource + 'static>(app: &mut App<S>) {
        for _ in 0..100 {
            app.poll_completions();
            if app.game.in_flight().is_none() {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("request never completed");
    }

    async fn app_for(target: &str) -> App<OfflineWordSource> {
        let source = OfflineWordSource::from_words(words_from_slice(&[target])).unwrap();
        let mut app = App::new(source, Handle::current());
        settle(&mut app).await;
        app
    }

    async fn enter(app: &mut App<OfflineWordSource>, word: &str) {
        for c in word.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Enter));
        settle(app).await;
    }

    #[tokio::test]
    async fn starts_with_help_and_a_session() {
        let mut app = app_for("apple").await;
        assert!(app.show_help);
        assert!(app.game.session().is_some());

        // First key only dismisses the help overlay
        app.handle_key(press(KeyCode::Char('g')));
        assert!(!app.show_help);
        assert_eq!(app.game.session().map(|s| s.current_col()), Some(0));
    }

    #[tokio::test]
    async fn typing_and_submitting() {
        let mut app = app_for("apple").await;
        app.show_help = false;

        enter(&mut app, "grape").await;
        let session = app.game.session().unwrap();
        assert_eq!(session.current_row(), 1);
        assert!(session.evaluations()[0].is_evaluated());
        assert!(app.share().is_none());

        enter(&mut app, "apple").await;
        assert!(app.is_over());
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert!(app.share().unwrap().starts_with("Wordly 2/6"));
    }

    #[tokio::test]
    async fn incomplete_guess_shows_notice() {
        let mut app = app_for("apple").await;
        app.show_help = false;

        enter(&mut app, "gra").await;
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.starts_with("Incomplete word"));
    }

    #[tokio::test]
    async fn game_over_keys() {
        let mut app = app_for("apple").await;
        app.show_help = false;
        enter(&mut app, "apple").await;

        // Letters do nothing once the game is over
        app.handle_key(press(KeyCode::Char('x')));
        assert!(app.is_over());

        app.handle_key(press(KeyCode::Char('n')));
        assert!(app.game.is_loading());
        settle(&mut app).await;
        assert!(!app.is_over());
        assert_eq!(app.game.generation(), 2);

        enter(&mut app, "apple").await;
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn ctrl_n_restarts_mid_game() {
        let mut app = app_for("apple").await;
        app.show_help = false;
        app.handle_key(press(KeyCode::Char('c')));

        app.handle_key(ctrl('n'));
        settle(&mut app).await;
        assert_eq!(app.game.generation(), 2);
        assert_eq!(app.game.session().map(|s| s.current_col()), Some(0));
    }

    #[tokio::test]
    async fn quit_keys() {
        let mut app = app_for("apple").await;
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = app_for("apple").await;
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let source = OfflineWordSource::from_words(words_from_slice(&["apple"])).unwrap();
        let mut app = App::new(source, runtime.handle().clone());
        for i in 0..8 {
            app.add_message(format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 3");
    }
}
