//! Word Games - CLI
//!
//! Wordle with configurable word length, in TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use word_games::{
    commands::run_simple,
    core::WordLength,
    game::{Game, GameConfig},
    interactive::{App, run_tui},
    wordlists::{DirectoryLists, EmbeddedLists, WordListProvider, available_lengths},
};

#[derive(Parser)]
#[command(
    name = "word_games",
    about = "Wordle with any word length from 1 to 22 letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length (1-22)
    #[arg(short, long, global = true, default_value = "7", value_parser = parse_length)]
    length: WordLength,

    /// Attempt limit: a round is lost once more guesses than this are made
    #[arg(long, global = true, default_value = "5", value_parser = parse_limit)]
    limit: usize,

    /// Word lists: 'embedded' (default) or a directory holding <length>.txt files
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Seed for reproducible target words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// List the word lengths playable with the selected word lists
    Lengths,
}

fn parse_length(s: &str) -> Result<WordLength, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    WordLength::new(n).ok_or_else(|| {
        format!(
            "length must be between {} and {}",
            WordLength::MIN,
            WordLength::MAX
        )
    })
}

fn parse_limit(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Pick the word list provider based on the -w flag
fn load_provider(words: &str) -> Box<dyn WordListProvider> {
    match words {
        "embedded" => Box::new(EmbeddedLists),
        dir => Box::new(DirectoryLists::new(dir)),
    }
}

/// Set up tracing
///
/// Logs go to `log_file` when given. Without one they go to stderr, except in
/// TUI mode where they would draw over the screen and are dropped instead.
fn init_tracing(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let (writer, ansi) = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None if tui => (BoxMakeWriter::new(io::sink), false),
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(writer)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(ansi)
            .with_writer(writer)
            .compact()
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_tracing(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let provider = load_provider(&cli.words);

    if matches!(command, Commands::Lengths) {
        let lengths: Vec<String> = available_lengths(&provider)
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("Word lists ({}): {}", cli.words, lengths.join(", "));
        return Ok(());
    }

    let config = GameConfig {
        word_length: cli.length,
        attempt_limit: cli.limit,
    };
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let mut game = Game::with_rng(provider, config, rng)
        .with_context(|| format!("failed to start a {}-letter game", cli.length))?;

    match command {
        Commands::Play => run_tui(App::new(game)),
        Commands::Simple => run_simple(&mut game),
        Commands::Lengths => Ok(()),
    }
}
