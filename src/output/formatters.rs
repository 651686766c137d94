//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback};
use crate::game::Alert;
use colored::Colorize;

/// Format a feedback sequence as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: LetterFeedback<'_>) -> String {
    feedback.map(|(_, fb)| fb.to_emoji()).collect()
}

/// Format a guess with each letter colored by its feedback
///
/// Green for correct, yellow for present, plain for absent.
#[must_use]
pub fn colorize_guess(feedback: LetterFeedback<'_>) -> String {
    feedback
        .map(|(letter, fb)| {
            let letter = letter.to_uppercase().to_string();
            match fb {
                Feedback::Correct => letter.green().bold().to_string(),
                Feedback::Present => letter.yellow().bold().to_string(),
                Feedback::Absent => letter,
            }
        })
        .collect()
}

/// Format an alert as a single line
#[must_use]
pub fn format_alert(alert: &Alert) -> String {
    format!("{} {}", format!("{}:", alert.title).red().bold(), alert.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compute_letter_feedback;

    #[test]
    fn emoji_for_grape_against_apple() {
        let emoji = feedback_to_emoji(compute_letter_feedback("grape", "apple"));
        assert_eq!(emoji, "⬜⬜🟨🟨🟩");
    }

    #[test]
    fn emoji_all_correct() {
        let emoji = feedback_to_emoji(compute_letter_feedback("crane", "crane"));
        assert_eq!(emoji, "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn colorized_guess_keeps_letters() {
        colored::control::set_override(false);
        let row = colorize_guess(compute_letter_feedback("grape", "apple"));
        assert_eq!(row, "GRAPE");
    }

    #[test]
    fn alert_line_contains_title_and_message() {
        let line = format_alert(&Alert::loss("apple"));
        assert!(line.contains("You Lose"));
        assert!(line.contains("The wordle was apple."));
    }
}
