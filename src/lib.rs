//! Word Games
//!
//! A Wordle variant with a configurable word length (1-22 letters), played in
//! the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use word_games::core::WordLength;
//! use word_games::game::{Game, GameConfig, GuessOutcome};
//! use word_games::wordlists::EmbeddedLists;
//!
//! let config = GameConfig {
//!     word_length: WordLength::new(5).unwrap(),
//!     ..GameConfig::default()
//! };
//! let mut game = Game::new(EmbeddedLists, config)?;
//!
//! let outcome = game.submit_guess("zzzzz")?;
//! assert!(matches!(outcome, GuessOutcome::Rejected(_)));
//! assert_eq!(game.alert().unwrap().title, "Invalid Word");
//! # Ok::<(), word_games::game::GameError>(())
//! ```

// Core domain types
pub mod core;

// Game engine and session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
