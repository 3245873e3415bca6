//! Typewriter animation for the TUI header

use std::time::Duration;

const TITLE_STEP: Duration = Duration::from_millis(150);
const SUBTITLE_PAUSE: Duration = Duration::from_millis(500);
const SUBTITLE_STEP: Duration = Duration::from_millis(50);

/// Reveals a title, then a subtitle, one character at a time
#[derive(Debug, Clone)]
pub struct Typewriter {
    title: &'static str,
    subtitle: &'static str,
}

impl Typewriter {
    #[must_use]
    pub const fn new(title: &'static str, subtitle: &'static str) -> Self {
        Self { title, subtitle }
    }

    /// Visible title text after `elapsed`
    #[must_use]
    pub fn title_at(&self, elapsed: Duration) -> &'static str {
        prefix(self.title, steps(elapsed, TITLE_STEP))
    }

    /// Visible subtitle text after `elapsed`
    ///
    /// Empty until the title is complete and the pause has passed.
    #[must_use]
    pub fn subtitle_at(&self, elapsed: Duration) -> &'static str {
        match elapsed.checked_sub(self.subtitle_start()) {
            Some(since) => prefix(self.subtitle, steps(since, SUBTITLE_STEP)),
            None => "",
        }
    }

    /// Check if both lines are fully shown
    #[must_use]
    pub fn is_done(&self, elapsed: Duration) -> bool {
        self.subtitle_at(elapsed).len() == self.subtitle.len()
    }

    fn subtitle_start(&self) -> Duration {
        TITLE_STEP * char_count(self.title) + SUBTITLE_PAUSE
    }
}

fn char_count(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}

fn steps(elapsed: Duration, step: Duration) -> usize {
    usize::try_from(elapsed.as_millis() / step.as_millis()).unwrap_or(usize::MAX)
}

/// First `n` characters of `text`
fn prefix(text: &str, n: usize) -> &str {
    text.char_indices()
        .nth(n)
        .map_or(text, |(end, _)| &text[..end])
}
