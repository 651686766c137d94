//! Game engine and session state
//!
//! The engine is a synchronous state machine: every action runs to completion
//! before returning, and front-ends only read its state between actions.

mod engine;
mod error;
mod session;

pub use engine::{Game, GuessOutcome};
pub use error::{Alert, GameError, InvalidWord};
pub use session::{GameConfig, GameSession, Statistics};
