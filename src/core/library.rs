//! Word library for a single word length

use super::WordLength;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Immutable set of lowercase words sharing one length
///
/// Keeps a hash set for membership checks and a sorted snapshot of the same
/// words for random selection, since the set has no stable order to index.
#[derive(Debug, Clone)]
pub struct WordLibrary {
    length: WordLength,
    words: FxHashSet<String>,
    ordered: Vec<String>,
}

impl WordLibrary {
    /// Build a library from candidate words
    ///
    /// Words are trimmed and lowercased. Empty entries and entries whose
    /// character count differs from `length` are skipped, and duplicates
    /// collapse.
    ///
    /// # Examples
    /// ```
    /// use word_games::core::{WordLength, WordLibrary};
    ///
    /// let length = WordLength::new(5).unwrap();
    /// let library = WordLibrary::new(length, ["Apple", "grape", "apple", "fig", ""]);
    ///
    /// assert_eq!(library.len(), 2);
    /// assert!(library.contains("apple"));
    /// assert!(!library.contains("fig"));
    /// ```
    pub fn new<I, S>(length: WordLength, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim().to_lowercase();
                (!word.is_empty() && word.chars().count() == length.get()).then_some(word)
            })
            .collect();

        let mut ordered: Vec<String> = words.iter().cloned().collect();
        ordered.sort_unstable();

        Self {
            length,
            words,
            ordered,
        }
    }

    /// Length every word in the library has
    #[inline]
    #[must_use]
    pub const fn length(&self) -> WordLength {
        self.length
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Check whether `word` is in the library
    ///
    /// Expects an already-normalized (lowercase, trimmed) word.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Words in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Pick a word uniformly at random
    ///
    /// Returns `None` if the library is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.ordered.choose(rng).map(String::as_str)
    }
}
