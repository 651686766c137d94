//! Core domain types for the word game
//!
//! Word lengths, word libraries and per-letter feedback. Everything here is
//! pure and independent of any front-end.

mod feedback;
mod length;
mod library;

pub use feedback::{Feedback, LetterFeedback, compute_letter_feedback};
pub use length::WordLength;
pub use library::WordLibrary;
