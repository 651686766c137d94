//! Command implementations

pub mod simple;

pub use simple::{Command, play, run_simple};
