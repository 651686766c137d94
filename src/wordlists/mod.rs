//! Word lists for the game
//!
//! A [`WordListProvider`] hands out the raw newline-separated list for a word
//! length. Lists can come from the binary itself, a directory on disk, or
//! memory.

mod embedded;
pub mod loader;

use crate::core::WordLength;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub use embedded::{EmbeddedLists, LISTS};
pub use loader::{DirectoryLists, StaticLists, parse_word_list};

/// Source of length-specific word lists
pub trait WordListProvider {
    /// Full text of the list for `length`, one word per line
    ///
    /// # Errors
    ///
    /// Returns a `ListError` if no list exists for `length` or it cannot be read.
    fn word_list(&self, length: WordLength) -> Result<String, ListError>;
}

impl<P: WordListProvider + ?Sized> WordListProvider for Box<P> {
    fn word_list(&self, length: WordLength) -> Result<String, ListError> {
        (**self).word_list(length)
    }
}

/// Word lengths `provider` can start a game with
///
/// A length counts only if its list loads and holds at least one word.
#[must_use]
pub fn available_lengths<P: WordListProvider + ?Sized>(provider: &P) -> Vec<WordLength> {
    WordLength::RANGE
        .filter_map(WordLength::new)
        .filter(|&length| {
            provider
                .word_list(length)
                .is_ok_and(|text| !parse_word_list(&text, length).is_empty())
        })
        .collect()
}

/// Error type for word list lookups
#[derive(Debug)]
pub enum ListError {
    /// No list is available for this length
    Missing(WordLength),
    /// The list exists but could not be read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(length) => write!(f, "No word list for {length}-letter words"),
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Missing(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}
