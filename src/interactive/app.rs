//! TUI application state and logic

use crate::game::{Game, GuessOutcome};
use crate::wordlists::WordListProvider;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<P, R> {
    pub game: Game<P, R>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
}

impl<P: WordListProvider, R: Rng> App<P, R> {
    #[must_use]
    pub fn new(game: Game<P, R>) -> Self {
        Self {
            game,
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Green = right spot, yellow = elsewhere in the word.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Apply one key press
    ///
    /// While an alert is showing, only dismissing it or quitting is possible.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.game.alert().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.game.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.new_word(),
            KeyCode::Left => self.step_length(false),
            KeyCode::Right => self.step_length(true),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut guess = self.game.session().current_guess().to_string();
                guess.push(c);
                self.game.update_current_guess(guess);
            }
            KeyCode::Backspace => {
                let mut guess = self.game.session().current_guess().to_string();
                guess.pop();
                self.game.update_current_guess(guess);
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.game.submit_current_guess() {
            Ok(GuessOutcome::Won { points }) => {
                self.add_message(
                    &format!("🎉 Solved! +{points} points. New word ready."),
                    MessageStyle::Success,
                );
            }
            Ok(GuessOutcome::Lost { .. }) => {
                self.add_message("New word ready.", MessageStyle::Info);
            }
            Ok(GuessOutcome::Continue) => {
                let left = self.game.session().attempts_remaining();
                self.add_message(&format!("{left} attempts left"), MessageStyle::Info);
            }
            // Rejections and errors are shown through the alert
            Ok(GuessOutcome::Ignored | GuessOutcome::Rejected(_)) | Err(_) => {}
        }
    }

    pub fn new_word(&mut self) {
        if self.game.start_new_round().is_ok() {
            self.add_message("New word ready.", MessageStyle::Info);
        }
    }

    /// Move the word length one step, staying inside 1-22
    pub fn step_length(&mut self, up: bool) {
        let current = self.game.session().word_length();
        let next = if up {
            current.increment()
        } else {
            current.decrement()
        };

        if let Some(next) = next
            && self.game.set_word_length(next.get()).is_ok()
        {
            self.add_message(
                &format!("Now playing {next}-letter words"),
                MessageStyle::Info,
            );
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: WordListProvider, R: Rng>(app: App<P, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, P, R>(terminal: &mut Terminal<B>, mut app: App<P, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    P: WordListProvider,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
