//! Terminal output formatting
//!
//! Colored and emoji renderings of guesses for the line-based front-end.

pub mod formatters;

pub use formatters::{colorize_guess, feedback_to_emoji, format_alert};
