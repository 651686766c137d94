//! Word list loading utilities
//!
//! Providers that read lists from disk or memory, and the parser that turns a
//! list into a [`WordLibrary`].

use super::{ListError, WordListProvider};
use crate::core::{WordLength, WordLibrary};
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Parse newline-separated list text into a library
///
/// Empty lines and lines of the wrong length are skipped.
///
/// # Examples
/// ```
/// use word_games::core::WordLength;
/// use word_games::wordlists::parse_word_list;
///
/// let length = WordLength::new(5).unwrap();
/// let library = parse_word_list("apple\n\ngrape\nmango\n", length);
/// assert_eq!(library.len(), 3);
/// ```
#[must_use]
pub fn parse_word_list(text: &str, length: WordLength) -> WordLibrary {
    WordLibrary::new(length, text.lines())
}

/// Provider reading `<dir>/<length>.txt`
#[derive(Debug, Clone)]
pub struct DirectoryLists {
    dir: PathBuf,
}

impl DirectoryLists {
    #[must_use]
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the list for `length`
    #[must_use]
    pub fn path_for(&self, length: WordLength) -> PathBuf {
        self.dir.join(format!("{length}.txt"))
    }
}

impl WordListProvider for DirectoryLists {
    fn word_list(&self, length: WordLength) -> Result<String, ListError> {
        let path = self.path_for(length);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ListError::Missing(length),
            _ => ListError::Io { path, source },
        })
    }
}

/// In-memory provider
///
/// # Examples
/// ```
/// use word_games::core::WordLength;
/// use word_games::wordlists::{StaticLists, WordListProvider};
///
/// let lists = StaticLists::new().with_list(3, "cat\ndog\n");
/// let three = WordLength::new(3).unwrap();
/// assert_eq!(lists.word_list(three).unwrap(), "cat\ndog\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticLists {
    lists: FxHashMap<usize, String>,
}

impl StaticLists {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the list text for a word length
    #[must_use]
    pub fn with_list(mut self, length: usize, text: impl Into<String>) -> Self {
        self.lists.insert(length, text.into());
        self
    }

    /// Register a list from individual words
    #[must_use]
    pub fn with_words(self, length: usize, words: &[&str]) -> Self {
        self.with_list(length, words.join("\n"))
    }
}

impl WordListProvider for StaticLists {
    fn word_list(&self, length: WordLength) -> Result<String, ListError> {
        self.lists
            .get(&length.get())
            .cloned()
            .ok_or(ListError::Missing(length))
    }
}
