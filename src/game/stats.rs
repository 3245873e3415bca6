//! In-memory statistics across the games of one run

use super::{Snapshot, Status};
use crate::core::MAX_ATTEMPTS;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Index `i` counts games won in `i + 1` guesses
    pub guess_distribution: [usize; MAX_ATTEMPTS],
}

impl Statistics {
    /// Record a finished game
    ///
    /// Games still in progress are ignored.
    pub fn record(&mut self, snapshot: &Snapshot) {
        match snapshot.status {
            Status::InProgress => {}
            Status::Lost => self.games_played += 1,
            Status::Won => {
                self.games_played += 1;
                self.games_won += 1;
                if let Some(attempts) = snapshot.attempts {
                    self.guess_distribution[attempts - 1] += 1;
                }
            }
        }
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
