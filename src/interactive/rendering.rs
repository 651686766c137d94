//! TUI rendering with ratatui
//!
//! Single-screen layout for the game: input, length stepper, guess history
//! and a modal alert.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, LetterFeedback, WordLength};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<P, R>(f: &mut Frame, app: &App<P, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Guess input
            Constraint::Length(3), // Length stepper
            Constraint::Min(8),    // History and messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
    render_length(f, app, chunks[2]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Guesses
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[3]);

    render_history(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[4]);

    // Alert goes on top of everything else
    render_alert(f, app);
}

fn render_header<P, R>(f: &mut Frame, app: &App<P, R>, area: Rect) {
    let score = app.game.session().score();
    let mut spans = vec![Span::styled(
        "🎯 WORDLE",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if score > 0 {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("Score {score}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<P, R>(f: &mut Frame, app: &App<P, R>, area: Rect) {
    let input = Paragraph::new(app.game.session().current_guess())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter your word | Enter: submit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_length<P, R>(f: &mut Frame, app: &App<P, R>, area: Rect) {
    let length = app.game.session().word_length();
    let arrow_style = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let line = Line::from(vec![
        Span::raw(format!("Wordle Length: {length}  ")),
        Span::styled("◀", arrow_style(length.get() > WordLength::MIN)),
        Span::raw(" "),
        Span::styled("▶", arrow_style(length.get() < WordLength::MAX)),
        Span::styled(
            "   Tab: get new word",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let stepper = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(stepper, area);
}

fn feedback_line(feedback: LetterFeedback<'_>) -> Line<'static> {
    let spans: Vec<Span> = feedback
        .map(|(letter, fb)| {
            let style = match fb {
                Feedback::Correct => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Feedback::Present => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                Feedback::Absent => Style::default(),
            };
            Span::styled(format!("{} ", letter.to_uppercase()), style)
        })
        .collect();
    Line::from(spans)
}

fn render_history<P, R>(f: &mut Frame, app: &App<P, R>, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .feedback_rows()
        .map(|(_, feedback)| ListItem::new(feedback_line(feedback)))
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(history, area);
}

fn render_messages<P, R>(f: &mut Frame, app: &App<P, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<P, R>(f: &mut Frame, app: &App<P, R>, area: Rect) {
    let session = app.game.session();
    let stats = session.stats();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let attempts = Paragraph::new(format!("Attempts left: {}", session.attempts_remaining()))
        .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let record = Paragraph::new(format!(
        "Won: {} | Lost: {}",
        stats.rounds_won, stats.rounds_lost
    ))
    .alignment(Alignment::Center);
    f.render_widget(record, chunks[1]);

    let help = Paragraph::new("Esc: Quit | ←/→: Length | Tab: New Word")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_alert<P, R>(f: &mut Frame, app: &App<P, R>) {
    let Some(alert) = app.game.alert() else {
        return;
    };

    let area = centered(f.area(), 50, 7);
    let content = vec![
        Line::from(alert.message.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
