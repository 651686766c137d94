//! Target word length
//!
//! A validated word length in the playable range 1-22.

use std::fmt;
use std::ops::RangeInclusive;

/// Word length used for a round
///
/// Always within [`WordLength::RANGE`]. Construct with [`WordLength::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordLength(usize);

impl WordLength {
    /// Shortest playable word
    pub const MIN: usize = 1;

    /// Longest playable word
    pub const MAX: usize = 22;

    /// Inclusive range of playable lengths
    pub const RANGE: RangeInclusive<usize> = Self::MIN..=Self::MAX;

    /// Length used when nothing else is configured
    pub const DEFAULT: Self = Self(7);

    /// Validate a raw length
    ///
    /// Returns `None` when `length` is outside [`WordLength::RANGE`].
    ///
    /// # Examples
    /// ```
    /// use word_games::core::WordLength;
    ///
    /// assert_eq!(WordLength::new(5).map(WordLength::get), Some(5));
    /// assert!(WordLength::new(0).is_none());
    /// assert!(WordLength::new(23).is_none());
    /// ```
    #[must_use]
    pub fn new(length: usize) -> Option<Self> {
        Self::RANGE.contains(&length).then_some(Self(length))
    }

    /// Get the raw length
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Next length up, or `None` at the maximum
    #[must_use]
    pub fn increment(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// Next length down, or `None` at the minimum
    #[must_use]
    pub fn decrement(self) -> Option<Self> {
        self.0.checked_sub(1).and_then(Self::new)
    }
}

impl Default for WordLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
