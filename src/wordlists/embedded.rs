//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

use super::{ListError, WordListProvider};
use crate::core::WordLength;

// Include generated word list table from build script
include!(concat!(env!("OUT_DIR"), "/lists.rs"));

/// Provider backed by the lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLists;

impl EmbeddedLists {
    /// Lengths that have an embedded list
    pub fn lengths() -> impl Iterator<Item = usize> {
        LISTS.iter().map(|&(n, _)| n)
    }
}

impl WordListProvider for EmbeddedLists {
    fn word_list(&self, length: WordLength) -> Result<String, ListError> {
        LISTS
            .iter()
            .find(|&&(n, _)| n == length.get())
            .map(|&(_, text)| text.to_string())
            .ok_or(ListError::Missing(length))
    }
}
