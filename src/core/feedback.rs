//! Per-letter feedback for a guess
//!
//! Each letter of a guess is classified against the target:
//! - Correct: same letter at the same position
//! - Present: letter appears somewhere else in the target
//! - Absent: letter does not appear in the target
//!
//! Unlike classic Wordle, `Present` is not limited by how many times the letter
//! occurs in the target. Guessing "speed" against "crepe" marks both E's, even
//! though only the second one is in place.

use std::iter::FusedIterator;
use std::str::Chars;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter in the correct position (green)
    Correct,
    /// Letter in the target, wrong position (yellow)
    Present,
    /// Letter not in the target
    Absent,
}

impl Feedback {
    /// Square emoji for this classification
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Lazy feedback sequence for one guess
///
/// Yields `(letter, feedback)` for each letter of the guess. Nothing is cached:
/// the sequence is computed while iterating, and cloning it before consuming
/// gives a fresh pass over the same guess.
#[derive(Debug, Clone)]
pub struct LetterFeedback<'a> {
    guess: Chars<'a>,
    aligned: Chars<'a>,
    target: &'a str,
}

/// Compute feedback for `guess` against `target`
///
/// Pure: the same inputs always yield the same sequence.
///
/// # Examples
/// ```
/// use word_games::core::{Feedback, compute_letter_feedback};
///
/// let feedback: Vec<Feedback> = compute_letter_feedback("grape", "apple")
///     .map(|(_, fb)| fb)
///     .collect();
///
/// assert_eq!(
///     feedback,
///     [
///         Feedback::Absent,
///         Feedback::Absent,
///         Feedback::Present,
///         Feedback::Present,
///         Feedback::Correct,
///     ]
/// );
/// ```
#[must_use]
pub fn compute_letter_feedback<'a>(guess: &'a str, target: &'a str) -> LetterFeedback<'a> {
    LetterFeedback {
        guess: guess.chars(),
        aligned: target.chars(),
        target,
    }
}

impl Iterator for LetterFeedback<'_> {
    type Item = (char, Feedback);

    fn next(&mut self) -> Option<Self::Item> {
        let letter = self.guess.next()?;
        let feedback = if self.aligned.next() == Some(letter) {
            Feedback::Correct
        } else if self.target.contains(letter) {
            Feedback::Present
        } else {
            Feedback::Absent
        };
        Some((letter, feedback))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.guess.size_hint()
    }
}

impl FusedIterator for LetterFeedback<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(guess: &str, target: &str) -> Vec<Feedback> {
        compute_letter_feedback(guess, target)
            .map(|(_, fb)| fb)
            .collect()
    }

    #[test]
    fn all_correct() {
        assert!(
            classify("crane", "crane")
                .iter()
                .all(|&fb| fb == Feedback::Correct)
        );
    }

    #[test]
    fn all_absent() {
        assert!(
            classify("quick", "dream")
                .iter()
                .all(|&fb| fb == Feedback::Absent)
        );
    }

    #[test]
    fn grape_against_apple() {
        use Feedback::{Absent, Correct, Present};
        assert_eq!(
            classify("grape", "apple"),
            [Absent, Absent, Present, Present, Correct]
        );
    }

    #[test]
    fn repeated_letter_marked_present_every_time() {
        // "apple" has a single 'e' but both guessed e's light up
        use Feedback::{Absent, Correct, Present};
        assert_eq!(
            classify("geese", "apple"),
            [Absent, Present, Present, Absent, Correct]
        );
    }

    #[test]
    fn yields_guess_letters_in_order() {
        let letters: String = compute_letter_feedback("mango", "apple")
            .map(|(letter, _)| letter)
            .collect();
        assert_eq!(letters, "mango");
    }

    #[test]
    fn single_letter_words() {
        assert_eq!(classify("a", "a"), [Feedback::Correct]);
        assert_eq!(classify("b", "a"), [Feedback::Absent]);
    }

    #[test]
    fn clone_restarts_sequence() {
        let feedback = compute_letter_feedback("grape", "apple");
        let first: Vec<_> = feedback.clone().collect();
        let second: Vec<_> = feedback.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn pure_across_calls() {
        assert_eq!(classify("robot", "floor"), classify("robot", "floor"));
    }

    #[test]
    fn emoji_mapping() {
        assert_eq!(Feedback::Correct.to_emoji(), '🟩');
        assert_eq!(Feedback::Present.to_emoji(), '🟨');
        assert_eq!(Feedback::Absent.to_emoji(), '⬜');
    }
}
