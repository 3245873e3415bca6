//! Input events accepted by the state machine

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    TypeLetter(char),
    Backspace,
    Submit,
    Restart,
}

impl Event {
    /// Map a key name from the input layer to an event
    ///
    /// Accepts `"Enter"`, `"Backspace"` and single ASCII letters. Everything
    /// else is ignored.
    ///
    /// # Examples
    /// ```
    /// use wordly::game::Event;
    ///
    /// assert_eq!(Event::from_key("q"), Some(Event::TypeLetter('Q')));
    /// assert_eq!(Event::from_key("Enter"), Some(Event::Submit));
    /// assert_eq!(Event::from_key("Shift"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Submit),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(Self::TypeLetter(c.to_ascii_uppercase()))
                    }
                    _ => None,
                }
            }
        }
    }
}
