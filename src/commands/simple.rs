//! Simple line-based CLI mode
//!
//! Text-based front-end without the TUI: one guess or command per line.

use crate::game::{Game, GuessOutcome};
use crate::output::{colorize_guess, feedback_to_emoji, format_alert};
use crate::wordlists::WordListProvider;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    NewWord,
    Length(usize),
    /// `:length` without an argument
    LengthUsage,
    BadLength(String),
    Quit,
}

impl Command {
    /// Parse a line; anything not starting with ':' is a guess
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let mut parts = trimmed.split_whitespace();
        match parts.next() {
            Some(":quit" | ":q" | ":exit") => Self::Quit,
            Some(":new" | ":n") => Self::NewWord,
            Some(":length" | ":l") => match parts.next() {
                Some(arg) => arg
                    .parse()
                    .map_or_else(|_| Self::BadLength(arg.to_string()), Self::Length),
                None => Self::LengthUsage,
            },
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the simple CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<P: WordListProvider, R: Rng>(game: &mut Game<P, R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(game, stdin.lock(), stdout.lock())
}

/// Drive a game from `input`, writing everything to `output`
///
/// Stops on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<P, R, I, O>(game: &mut Game<P, R>, mut input: I, mut output: O) -> Result<()>
where
    P: WordListProvider,
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(
        output,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        output,
        "║                    Wordle - Simple Mode                      ║"
    )?;
    writeln!(
        output,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(
        output,
        "Green letters are in the right place, yellow ones are elsewhere in the word."
    )?;
    writeln!(
        output,
        "Commands: ':new' for a new word, ':length N' to change length, ':quit' to exit\n"
    )?;

    loop {
        print_status(game, &mut output)?;
        write!(output, "Guess: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match Command::parse(&line) {
            Command::Quit => break,
            Command::NewWord => {
                if game.start_new_round().is_ok() {
                    writeln!(output, "\n🔄 New word!\n")?;
                }
            }
            Command::Length(length) => {
                if game.set_word_length(length).is_ok() {
                    writeln!(output, "\n🔄 Now playing {length}-letter words\n")?;
                }
            }
            Command::LengthUsage => {
                writeln!(output, "usage: :length N\n")?;
            }
            Command::BadLength(arg) => {
                writeln!(output, "❌ '{arg}' is not a number\n")?;
            }
            Command::Guess(raw) => {
                game.update_current_guess(raw);
                match game.submit_current_guess()? {
                    GuessOutcome::Won { points } => {
                        writeln!(
                            output,
                            "\n{} {}\n",
                            "🎉 Solved!".bright_green().bold(),
                            format!("+{points} points").bright_cyan()
                        )?;
                    }
                    GuessOutcome::Continue => print_history(game, &mut output)?,
                    GuessOutcome::Ignored
                    | GuessOutcome::Rejected(_)
                    | GuessOutcome::Lost { .. } => {}
                }
            }
        }

        if let Some(alert) = game.dismiss_alert() {
            writeln!(output, "{}\n", format_alert(&alert))?;
        }
    }

    writeln!(output, "👋 Thanks for playing! Final score: {}", game.session().score())?;
    Ok(())
}

fn print_status<P, R, O: Write>(game: &Game<P, R>, output: &mut O) -> io::Result<()> {
    let session = game.session();
    let stats = session.stats();
    writeln!(output, "{}", "─".repeat(60).cyan())?;
    writeln!(
        output,
        "Length: {} | Attempts left: {} | Score: {} | Won: {} Lost: {}",
        session.word_length(),
        session.attempts_remaining(),
        session.score(),
        stats.rounds_won,
        stats.rounds_lost
    )?;
    writeln!(output, "{}", "─".repeat(60).cyan())
}

fn print_history<P, R, O: Write>(game: &Game<P, R>, output: &mut O) -> io::Result<()> {
    writeln!(output)?;
    for (i, (_, feedback)) in game.feedback_rows().enumerate() {
        writeln!(
            output,
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            colorize_guess(feedback.clone()),
            feedback_to_emoji(feedback)
        )?;
    }
    writeln!(output)
}
