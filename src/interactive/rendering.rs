//! TUI rendering with ratatui
//!
//! Board grid, on-screen keyboard, messages and statistics.

use super::app::{App, MessageStyle, PendingCall};
use crate::core::{Classification, WORD_LENGTH};
use crate::game::{MAX_ROWS, Outcome, Phase};
use crate::source::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(16),    // Main content
            Constraint::Length(3),  // Input hint
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORD MASTERS")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background color for a classified tile
fn class_color(class: Classification) -> Color {
    match class {
        Classification::Exact => Color::Green,
        Classification::Present => ORANGE,
        Classification::Absent => Color::Red,
        Classification::Invalid => Color::DarkGray,
    }
}

fn tile(letter: Option<u8>, class: Option<Classification>) -> Span<'static> {
    let text = format!(" {} ", letter.map_or('·', char::from));
    match class {
        Some(class) => Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(class_color(class))
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn render_board<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let board = app.session.board();
    let mut lines = vec![Line::from("")];

    for row in 0..MAX_ROWS {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        if let Some(scored) = board.rows().get(row) {
            for (&letter, &class) in scored.guess.chars().iter().zip(scored.feedback.classes()) {
                spans.push(tile(Some(letter), Some(class)));
                spans.push(Span::raw(" "));
            }
        } else if let Some(rejected) = board.rejected().filter(|_| row == board.rows().len()) {
            // Gray until the next key replays the last row
            for (&letter, &class) in rejected.guess.chars().iter().zip(rejected.feedback.classes()) {
                spans.push(tile(Some(letter), Some(class)));
                spans.push(Span::raw(" "));
            }
        } else if row == board.rows().len() && board.outcome() == Outcome::InProgress {
            for col in 0..WORD_LENGTH {
                spans.push(tile(board.current_letters().get(col).copied(), None));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(tile(None, None));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match board.phase() {
        Phase::Validating => " Board (checking...) ",
        Phase::ValidationFailed { .. } => " Board (check failed) ",
        _ => " Board ",
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_side_panel<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Keyboard
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keyboard(f, &app.session.board().letter_hints(), chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, hints: &FxHashMap<u8, Classification>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let style = hints.get(&letter).map_or_else(
                        || Style::default().fg(Color::White),
                        |&class| Style::default().fg(Color::Black).bg(class_color(class)),
                    );
                    Span::styled(format!(" {} ", letter as char), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let board = app.session.board();
    let (title, color) = match (board.outcome(), board.phase()) {
        (Outcome::Won, _) => (" 🎉 CONGRATULATIONS! 🎉 | Enter: new game | q: quit ", Color::Green),
        (Outcome::Lost, _) => (" Out of guesses | Enter: new game | q: quit ", Color::Red),
        (_, Phase::ValidationFailed { .. }) => (" Word service unreachable | Enter: retry ", Color::Red),
        _ if app.pending.is_some() => (" Checking word... ", Color::Cyan),
        _ => (" Type your guess (A-Z) ", Color::Yellow),
    };

    let content = match (&app.pending, board.phase()) {
        (Some(PendingCall::Retry), _) => "retrying...".to_string(),
        (_, Phase::Lost) => format!("The word was {}", board.secret()),
        _ => String::from_utf8_lossy(board.current_letters()).into_owned(),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: WordSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let board = app.session.board();
    let stats = app.session.stats();

    let row_text = format!(
        "Row: {}/{MAX_ROWS}",
        (board.rows().len() + 1).min(MAX_ROWS)
    );
    f.render_widget(Paragraph::new(row_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let distribution: String = stats.guess_distribution[1..]
        .iter()
        .enumerate()
        .map(|(i, count)| format!("{}:{count} ", i + 1))
        .collect();
    f.render_widget(
        Paragraph::new(distribution.trim_end().to_string()).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("Esc: Quit | Enter: Retry/New game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
