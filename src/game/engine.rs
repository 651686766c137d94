//! Game engine
//!
//! Owns the word library, the session and the alert slot. Front-ends dispatch
//! actions to a [`Game`] and render what it exposes.

use super::error::{Alert, GameError, InvalidWord};
use super::session::{GameConfig, GameSession};
use crate::core::{LetterFeedback, WordLength, WordLibrary, compute_letter_feedback};
use crate::wordlists::{WordListProvider, parse_word_list};
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, info, warn};

/// What a submission did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Nothing was typed
    Ignored,
    /// Guess refused; history untouched
    Rejected(InvalidWord),
    /// Guess recorded, round still running
    Continue,
    /// Target found; a new round has started
    Won { points: usize },
    /// Attempts exhausted; a new round has started
    Lost { target: String },
}

/// Word game engine
///
/// # Examples
/// ```
/// use word_games::game::{Game, GameConfig, GuessOutcome};
/// use word_games::core::WordLength;
/// use word_games::wordlists::StaticLists;
///
/// let lists = StaticLists::new().with_words(5, &["apple"]);
/// let config = GameConfig {
///     word_length: WordLength::new(5).unwrap(),
///     ..GameConfig::default()
/// };
/// let mut game = Game::new(lists, config)?;
///
/// game.update_current_guess("Apple ");
/// assert_eq!(game.submit_current_guess()?, GuessOutcome::Won { points: 5 });
/// assert_eq!(game.session().score(), 5);
/// # Ok::<(), word_games::game::GameError>(())
/// ```
pub struct Game<P, R = ThreadRng> {
    provider: P,
    library: WordLibrary,
    session: GameSession,
    alert: Option<Alert>,
    rng: R,
}

impl<P: WordListProvider> Game<P> {
    /// Load the configured length and start the first round
    ///
    /// # Errors
    ///
    /// Returns `GameError::Load` if no list exists for the configured length,
    /// or `GameError::EmptyLibrary` if the list holds no usable word.
    pub fn new(provider: P, config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(provider, config, rand::rng())
    }
}

impl<P: WordListProvider, R: Rng> Game<P, R> {
    /// Same as [`Game::new`] with a caller-supplied RNG
    ///
    /// # Errors
    ///
    /// See [`Game::new`].
    pub fn with_rng(provider: P, config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        let library = load_library(&provider, config.word_length)?;
        let target = choose_target(&library, &mut rng)?;

        info!(
            length = config.word_length.get(),
            attempt_limit = config.attempt_limit,
            "game started"
        );

        Ok(Self {
            provider,
            library,
            session: GameSession::new(config, target),
            alert: None,
            rng,
        })
    }

    /// Load the library for `length` and start a new round
    ///
    /// On failure the previous library and round are kept and an alert is raised.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Load` or `GameError::EmptyLibrary`.
    pub fn initialize(&mut self, length: WordLength) -> Result<(), GameError> {
        let loaded = load_library(&self.provider, length).and_then(|library| {
            let target = choose_target(&library, &mut self.rng)?;
            Ok((library, target))
        });
        let (library, target) = self.report(loaded)?;

        self.library = library;
        self.session.word_length = length;
        self.session.begin_round(target);
        debug!(length = length.get(), "round started");
        Ok(())
    }

    /// Change the word length and reload
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidLength` if `length` is outside 1-22, or any
    /// error from [`Game::initialize`].
    pub fn set_word_length(&mut self, length: usize) -> Result<(), GameError> {
        let length = self.report(WordLength::new(length).ok_or(GameError::InvalidLength(length)))?;
        self.initialize(length)
    }

    /// Draw a fresh target and clear the round
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyLibrary` if the library has no words.
    pub fn start_new_round(&mut self) -> Result<(), GameError> {
        let target = choose_target(&self.library, &mut self.rng);
        let target = self.report(target)?;
        self.session.begin_round(target);
        debug!(length = self.library.length().get(), "round started");
        Ok(())
    }

    /// Replace the in-progress input
    pub fn update_current_guess(&mut self, text: impl Into<String>) {
        self.session.current_guess = text.into();
    }

    /// Submit whatever is in the current guess
    ///
    /// # Errors
    ///
    /// See [`Game::submit_guess`].
    pub fn submit_current_guess(&mut self) -> Result<GuessOutcome, GameError> {
        let raw = std::mem::take(&mut self.session.current_guess);
        self.submit_guess(&raw)
    }

    /// Normalize, validate and record a guess
    ///
    /// The current guess is cleared whether or not the guess is accepted.
    /// Rejections and losses raise an alert; empty input does not.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyLibrary` if a finished round cannot be
    /// replaced with a new one.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GameError> {
        self.session.current_guess.clear();

        let guess = raw.trim().to_lowercase();
        if guess.is_empty() {
            return Ok(GuessOutcome::Ignored);
        }

        if let Err(reason) = self.validate(&guess) {
            debug!(guess = %guess, ?reason, "guess rejected");
            self.alert = Some(reason.into());
            return Ok(GuessOutcome::Rejected(reason));
        }

        debug!(guess = %guess, "guess accepted");
        self.session.record_guess(guess);

        if self.session.is_won() {
            let points = self.session.target.chars().count();
            self.session.score += points;
            self.session.stats.rounds_won += 1;
            info!(
                word = %self.session.target,
                points,
                score = self.session.score,
                "round won"
            );
            self.start_new_round()?;
            return Ok(GuessOutcome::Won { points });
        }

        if self.session.is_lost() {
            let target = self.session.target.clone();
            self.session.stats.rounds_lost += 1;
            info!(word = %target, "round lost");
            self.alert = Some(Alert::loss(&target));
            self.start_new_round()?;
            return Ok(GuessOutcome::Lost { target });
        }

        Ok(GuessOutcome::Continue)
    }

    fn validate(&self, guess: &str) -> Result<(), InvalidWord> {
        let len = guess.chars().count();
        let target_len = self.session.target.chars().count();

        if len < target_len {
            Err(InvalidWord::TooShort)
        } else if len > target_len {
            Err(InvalidWord::TooLong)
        } else if !self.library.contains(guess) {
            Err(InvalidWord::NotInDictionary)
        } else {
            Ok(())
        }
    }

    fn report<T>(&mut self, result: Result<T, GameError>) -> Result<T, GameError> {
        if let Err(err) = &result {
            self.alert = Some(err.into());
        }
        result
    }
}

impl<P, R> Game<P, R> {
    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn library(&self) -> &WordLibrary {
        &self.library
    }

    /// Alert waiting to be acknowledged
    #[must_use]
    pub const fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Acknowledge the pending alert
    pub fn dismiss_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    /// Feedback for `guess` against the current target
    #[must_use]
    pub fn letter_feedback<'a>(&'a self, guess: &'a str) -> LetterFeedback<'a> {
        compute_letter_feedback(guess, &self.session.target)
    }

    /// Each guess this round with its feedback, oldest first
    pub fn feedback_rows(&self) -> impl Iterator<Item = (&str, LetterFeedback<'_>)> {
        self.session
            .history
            .iter()
            .rev()
            .map(move |guess| (guess.as_str(), self.letter_feedback(guess)))
    }
}

fn load_library<P: WordListProvider>(
    provider: &P,
    length: WordLength,
) -> Result<WordLibrary, GameError> {
    let text = provider.word_list(length).inspect_err(|err| {
        warn!(length = length.get(), error = %err, "word list unavailable");
    })?;
    let library = parse_word_list(&text, length);
    info!(
        length = length.get(),
        words = library.len(),
        "word library loaded"
    );
    Ok(library)
}

fn choose_target<R: Rng + ?Sized>(
    library: &WordLibrary,
    rng: &mut R,
) -> Result<String, GameError> {
    library
        .choose(rng)
        .map(str::to_string)
        .ok_or(GameError::EmptyLibrary(library.length()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::wordlists::StaticLists;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lists() -> StaticLists {
        StaticLists::new()
            .with_words(5, &["apple", "grape", "mango", "lemon", "melon", "peach"])
            .with_words(3, &["cat", "dog"])
    }

    fn config(length: usize, attempt_limit: usize) -> GameConfig {
        GameConfig {
            word_length: WordLength::new(length).unwrap(),
            attempt_limit,
        }
    }

    fn game() -> Game<StaticLists, StdRng> {
        Game::with_rng(lists(), config(5, 5), StdRng::seed_from_u64(7)).unwrap()
    }

    /// Any library word other than the target
    fn wrong_word<P: WordListProvider, R: Rng>(game: &Game<P, R>) -> String {
        let target = game.session().target_word();
        game.library()
            .iter()
            .find(|&w| w != target)
            .unwrap()
            .to_string()
    }

    #[test]
    fn new_game_draws_target_from_library() {
        let game = game();
        assert!(game.library().contains(game.session().target_word()));
        assert_eq!(game.session().word_length().get(), 5);
        assert!(game.alert().is_none());
    }

    #[test]
    fn new_game_fails_for_missing_list() {
        let result = Game::with_rng(lists(), config(9, 5), StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(GameError::Load(_))));
    }

    #[test]
    fn new_game_fails_for_empty_list() {
        let lists = StaticLists::new().with_list(5, "\n\n");
        let result = Game::with_rng(lists, config(5, 5), StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(GameError::EmptyLibrary(_))));
    }

    #[test]
    fn empty_submission_is_ignored() {
        let mut game = game();
        for raw in ["", "   ", "\t\n"] {
            game.update_current_guess(raw);
            assert_eq!(game.submit_current_guess().unwrap(), GuessOutcome::Ignored);
        }
        assert!(game.session().attempt_history().is_empty());
        assert!(game.alert().is_none());
    }

    #[test]
    fn rejection_order() {
        let mut game = game();

        assert_eq!(
            game.submit_guess("app").unwrap(),
            GuessOutcome::Rejected(InvalidWord::TooShort)
        );
        assert_eq!(
            game.submit_guess("apples").unwrap(),
            GuessOutcome::Rejected(InvalidWord::TooLong)
        );
        assert_eq!(
            game.submit_guess("zzzzz").unwrap(),
            GuessOutcome::Rejected(InvalidWord::NotInDictionary)
        );
        assert!(game.session().attempt_history().is_empty());
    }

    #[test]
    fn rejection_raises_alert_and_clears_input() {
        let mut game = game();
        game.update_current_guess("zzzzz");
        game.submit_current_guess().unwrap();

        assert!(game.session().current_guess().is_empty());
        assert_eq!(
            game.alert(),
            Some(&Alert::new("Invalid Word", "Your guess is not a real word."))
        );
    }

    #[test]
    fn newer_alert_overwrites_pending_one() {
        let mut game = game();
        game.submit_guess("ab").unwrap();
        game.submit_guess("abcdefg").unwrap();
        assert_eq!(
            game.dismiss_alert().unwrap().message,
            "Your guess is longer than the Wordle."
        );
        assert!(game.alert().is_none());
    }

    #[test]
    fn input_is_normalized() {
        let mut game = game();
        let wrong = wrong_word(&game);
        let outcome = game
            .submit_guess(&format!("  {}  ", wrong.to_uppercase()))
            .unwrap();
        assert_eq!(outcome, GuessOutcome::Continue);
        assert_eq!(game.session().attempt_history(), [wrong]);
    }

    #[test]
    fn winning_adds_length_to_score_and_resets() {
        let mut game = game();
        let wrong = wrong_word(&game);
        game.submit_guess(&wrong).unwrap();

        let target = game.session().target_word().to_string();
        assert_eq!(
            game.submit_guess(&target).unwrap(),
            GuessOutcome::Won { points: 5 }
        );
        assert_eq!(game.session().score(), 5);
        assert_eq!(game.session().stats().rounds_won, 1);
        assert!(game.session().attempt_history().is_empty());
        assert!(game.alert().is_none());
    }

    #[test]
    fn losing_after_limit_plus_one_guesses() {
        let mut game = Game::with_rng(lists(), config(5, 2), StdRng::seed_from_u64(3)).unwrap();
        let target = game.session().target_word().to_string();
        let wrong = wrong_word(&game);

        assert_eq!(game.submit_guess(&wrong).unwrap(), GuessOutcome::Continue);
        assert_eq!(game.submit_guess(&wrong).unwrap(), GuessOutcome::Continue);
        assert_eq!(
            game.submit_guess(&wrong).unwrap(),
            GuessOutcome::Lost {
                target: target.clone()
            }
        );

        let alert = game.alert().unwrap();
        assert_eq!(alert.title, "You Lose");
        assert!(alert.message.contains(&target));
        assert!(game.session().attempt_history().is_empty());
        assert_eq!(game.session().score(), 0);
        assert_eq!(game.session().stats().rounds_lost, 1);
    }

    #[test]
    fn set_word_length_reloads() {
        let mut game = game();
        game.submit_guess(&wrong_word(&game)).unwrap();

        game.set_word_length(3).unwrap();

        assert_eq!(game.session().word_length().get(), 3);
        assert_eq!(game.session().target_word().chars().count(), 3);
        assert!(game.session().attempt_history().is_empty());
    }

    #[test]
    fn set_word_length_out_of_range() {
        let mut game = game();
        assert!(matches!(
            game.set_word_length(0),
            Err(GameError::InvalidLength(0))
        ));
        assert!(matches!(
            game.set_word_length(23),
            Err(GameError::InvalidLength(23))
        ));
        assert_eq!(game.alert().unwrap().title, "Invalid Length");
        assert_eq!(game.session().word_length().get(), 5);
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let mut game = game();
        let wrong = wrong_word(&game);
        game.submit_guess(&wrong).unwrap();
        let target = game.session().target_word().to_string();

        assert!(matches!(game.set_word_length(9), Err(GameError::Load(_))));

        assert_eq!(game.session().word_length().get(), 5);
        assert_eq!(game.session().target_word(), target);
        assert_eq!(game.session().attempt_history(), [wrong]);
        assert_eq!(game.library().length().get(), 5);
        assert_eq!(game.alert().unwrap().title, "Word List Unavailable");
    }

    #[test]
    fn start_new_round_clears_round() {
        let mut game = game();
        game.submit_guess(&wrong_word(&game)).unwrap();
        game.update_current_guess("half");

        game.start_new_round().unwrap();

        assert!(game.session().attempt_history().is_empty());
        assert!(game.session().current_guess().is_empty());
    }

    #[test]
    fn feedback_rows_oldest_first() {
        let mut game = game();
        let target = game.session().target_word().to_string();
        let others: Vec<String> = game
            .library()
            .iter()
            .filter(|&w| w != target)
            .take(2)
            .map(str::to_string)
            .collect();
        for guess in &others {
            game.submit_guess(guess).unwrap();
        }

        let rows: Vec<&str> = game.feedback_rows().map(|(guess, _)| guess).collect();
        assert_eq!(rows, [others[0].as_str(), others[1].as_str()]);

        for (guess, feedback) in game.feedback_rows() {
            assert_eq!(feedback.count(), guess.chars().count());
        }
    }

    #[test]
    fn letter_feedback_uses_target() {
        let game = game();
        let target = game.session().target_word().to_string();
        assert!(
            game.letter_feedback(&target)
                .all(|(_, fb)| fb == Feedback::Correct)
        );
    }
}
