//! Mutable state for the round in progress

use crate::core::WordLength;

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: WordLength,
    /// The round is lost once the history grows past this many guesses
    pub attempt_limit: usize,
}

impl GameConfig {
    pub const DEFAULT_ATTEMPT_LIMIT: usize = 5;
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WordLength::DEFAULT,
            attempt_limit: Self::DEFAULT_ATTEMPT_LIMIT,
        }
    }
}

/// Rounds finished this session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_won: usize,
    pub rounds_lost: usize,
}

impl Statistics {
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_won + self.rounds_lost
    }
}

/// Session state
///
/// `score` and `stats` carry across rounds; everything else is reset when a
/// new round begins.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(super) target: String,
    pub(super) current_guess: String,
    /// Most recent guess first
    pub(super) history: Vec<String>,
    pub(super) attempt_limit: usize,
    pub(super) score: usize,
    pub(super) word_length: WordLength,
    pub(super) stats: Statistics,
}

impl GameSession {
    pub(super) fn new(config: GameConfig, target: String) -> Self {
        Self {
            target,
            current_guess: String::new(),
            history: Vec::new(),
            attempt_limit: config.attempt_limit,
            score: 0,
            word_length: config.word_length,
            stats: Statistics::default(),
        }
    }

    pub(super) fn begin_round(&mut self, target: String) {
        self.target = target;
        self.current_guess.clear();
        self.history.clear();
    }

    pub(super) fn record_guess(&mut self, guess: String) {
        self.history.insert(0, guess);
    }

    pub(super) fn is_won(&self) -> bool {
        self.history.contains(&self.target)
    }

    pub(super) fn is_lost(&self) -> bool {
        self.history.len() > self.attempt_limit
    }

    /// Guesses left before the round is lost
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        (self.attempt_limit + 1).saturating_sub(self.history.len())
    }

    #[must_use]
    pub fn target_word(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    /// Guesses this round, most recent first
    #[must_use]
    pub fn attempt_history(&self) -> &[String] {
        &self.history
    }

    #[must_use]
    pub const fn attempt_limit(&self) -> usize {
        self.attempt_limit
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn word_length(&self) -> WordLength {
        self.word_length
    }

    #[must_use]
    pub const fn stats(&self) -> Statistics {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(GameConfig::default(), "apple".to_string())
    }

    #[test]
    fn history_is_most_recent_first() {
        let mut s = session();
        s.record_guess("grape".into());
        s.record_guess("mango".into());
        assert_eq!(s.attempt_history(), ["mango", "grape"]);
    }

    #[test]
    fn begin_round_clears_round_state_only() {
        let mut s = session();
        s.current_guess.push_str("gra");
        s.record_guess("grape".into());
        s.score = 10;
        s.stats.rounds_won = 2;

        s.begin_round("mango".into());

        assert_eq!(s.target_word(), "mango");
        assert!(s.current_guess().is_empty());
        assert!(s.attempt_history().is_empty());
        assert_eq!(s.score(), 10);
        assert_eq!(s.stats().rounds_won, 2);
    }

    #[test]
    fn lost_after_limit_exceeded() {
        let mut s = session();
        for _ in 0..5 {
            s.record_guess("grape".into());
        }
        assert!(!s.is_lost());
        assert_eq!(s.attempts_remaining(), 1);

        s.record_guess("grape".into());
        assert!(s.is_lost());
        assert_eq!(s.attempts_remaining(), 0);
    }

    #[test]
    fn won_when_history_holds_target() {
        let mut s = session();
        s.record_guess("grape".into());
        assert!(!s.is_won());
        s.record_guess("apple".into());
        assert!(s.is_won());
    }

    #[test]
    fn rounds_played_sums_outcomes() {
        let stats = Statistics {
            rounds_won: 3,
            rounds_lost: 2,
        };
        assert_eq!(stats.rounds_played(), 5);
    }
}
