//! Share-text export
//!
//! Produces the spoiler-free summary players paste elsewhere:
//!
//! ```text
//! Wordly 2/6
//!
//! ⬛⬛🟨🟨🟩
//! 🟩🟩🟩🟩🟩
//! ```

use crate::core::MAX_ATTEMPTS;
use crate::game::{Snapshot, Status};

/// Name shown in the share header
pub const GAME_NAME: &str = "Wordly";

/// Build the share text for a finished game
///
/// Returns `None` while the game is still in progress.
#[must_use]
pub fn share_text(snapshot: &Snapshot) -> Option<String> {
    let score = match snapshot.status {
        Status::InProgress => return None,
        Status::Won => snapshot.attempts?.to_string(),
        Status::Lost => "X".to_string(),
    };

    let rows: Vec<String> = snapshot
        .evaluations
        .iter()
        .filter(|row| row.is_evaluated())
        .map(|row| row.to_emoji())
        .collect();

    Some(format!(
        "{GAME_NAME} {score}/{MAX_ATTEMPTS}\n\n{}",
        rows.join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Session;

    fn play(target: &str, guesses: &[&str]) -> Snapshot {
        let mut session = Session::new(Word::new(target).unwrap());
        for guess in guesses {
            for c in guess.chars() {
                session.type_letter(c).unwrap();
            }
            session.submit(|_| true).unwrap();
        }
        session.snapshot()
    }

    #[test]
    fn won_game() {
        let text = share_text(&play("apple", &["grape", "apple"])).unwrap();
        assert_eq!(text, "Wordly 2/6\n\n⬛⬛🟨🟨🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn lost_game() {
        let text = share_text(&play("apple", &["crown"; MAX_ATTEMPTS])).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Wordly X/6"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.filter(|l| *l == "⬛⬛⬛⬛⬛").count(), MAX_ATTEMPTS);
        assert!(!text.contains("APPLE"));
    }

    #[test]
    fn in_progress_has_no_share_text() {
        assert!(share_text(&play("apple", &["grape"])).is_none());
    }
}
