//! Game errors and the alert shown to the player

use crate::core::WordLength;
use crate::wordlists::ListError;
use std::fmt;

/// Reason a submitted guess was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWord {
    TooShort,
    TooLong,
    NotInDictionary,
}

impl InvalidWord {
    /// Player-facing explanation
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooShort => "Your guess is shorter than the Wordle.",
            Self::TooLong => "Your guess is longer than the Wordle.",
            Self::NotInDictionary => "Your guess is not a real word.",
        }
    }
}

impl fmt::Display for InvalidWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Error type for game engine operations
#[derive(Debug)]
pub enum GameError {
    /// Word list for the requested length is missing or unreadable
    Load(ListError),
    /// Requested length is outside 1-22
    InvalidLength(usize),
    /// Guess was rejected
    InvalidWord(InvalidWord),
    /// Library has no word to draw a target from
    EmptyLibrary(WordLength),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(err) => write!(f, "Failed to load word list: {err}"),
            Self::InvalidLength(length) => write!(
                f,
                "Word length must be between {} and {}, got {length}",
                WordLength::MIN,
                WordLength::MAX
            ),
            Self::InvalidWord(reason) => write!(f, "Invalid word: {reason}"),
            Self::EmptyLibrary(length) => {
                write!(f, "Word list for {length}-letter words is empty")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ListError> for GameError {
    fn from(err: ListError) -> Self {
        Self::Load(err)
    }
}

impl From<InvalidWord> for GameError {
    fn from(reason: InvalidWord) -> Self {
        Self::InvalidWord(reason)
    }
}

/// Message shown to the player until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Alert revealing the target after a lost round
    #[must_use]
    pub fn loss(target: &str) -> Self {
        Self::new("You Lose", format!("The wordle was {target}."))
    }
}

impl From<InvalidWord> for Alert {
    fn from(reason: InvalidWord) -> Self {
        Self::new("Invalid Word", reason.message())
    }
}

impl From<&GameError> for Alert {
    fn from(err: &GameError) -> Self {
        match err {
            GameError::InvalidWord(reason) => Self::from(*reason),
            GameError::Load(_) | GameError::EmptyLibrary(_) => {
                Self::new("Word List Unavailable", err.to_string())
            }
            GameError::InvalidLength(_) => Self::new("Invalid Length", err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn invalid_word_alerts() {
        assert_eq!(
            Alert::from(InvalidWord::TooShort),
            Alert::new("Invalid Word", "Your guess is shorter than the Wordle.")
        );
        assert_eq!(
            Alert::from(InvalidWord::TooLong).message,
            "Your guess is longer than the Wordle."
        );
        assert_eq!(
            Alert::from(InvalidWord::NotInDictionary).message,
            "Your guess is not a real word."
        );
    }

    #[test]
    fn loss_alert_reveals_target() {
        let alert = Alert::loss("apple");
        assert_eq!(alert.title, "You Lose");
        assert_eq!(alert.message, "The wordle was apple.");
    }

    #[test]
    fn load_error_keeps_source() {
        let err = GameError::from(ListError::Missing(WordLength::new(9).unwrap()));
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "Failed to load word list: No word list for 9-letter words"
        );
    }

    #[test]
    fn invalid_length_message() {
        let err = GameError::InvalidLength(30);
        assert_eq!(
            err.to_string(),
            "Word length must be between 1 and 22, got 30"
        );
        assert_eq!(Alert::from(&err).title, "Invalid Length");
    }
}
