//! TUI application state and logic

use crate::game::{Effect, Outcome, Phase, Session};
use crate::source::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: WordSource> {
    pub session: Session<S>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// Oracle call queued by the last key, run after the next redraw
    pub pending: Option<PendingCall>,
}

/// Oracle work waiting for the screen to show that it is in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingCall {
    /// Validation requested by a completed row
    Validate(Effect),
    /// Second attempt after a network failure
    Retry,
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
    Error,
}

impl<S: WordSource> App<S> {
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            messages: vec![
                Message {
                    text: "Welcome! Guess the five-letter word in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters; a row is checked as soon as it is full.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            pending: None,
        }
    }

    /// Whether the current game has finished
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.session.board().outcome().is_terminal()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                if self.game_over() {
                    self.new_game();
                } else if matches!(
                    self.session.board().phase(),
                    Phase::ValidationFailed { .. }
                ) {
                    self.add_message("Retrying...", MessageStyle::Info);
                    self.pending = Some(PendingCall::Retry);
                }
            }
            KeyCode::Char('q') if self.game_over() => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                let effect = self.session.press(c);
                if let Effect::ValidateRow { ref guess, .. } = effect {
                    self.add_message(&format!("Checking {guess}..."), MessageStyle::Info);
                    self.pending = Some(PendingCall::Validate(effect));
                } else {
                    self.handle_effect(&effect);
                }
            }
            _ => {}
        }
    }

    /// Run the oracle call queued by the last key press, if any
    pub fn resolve_pending(&mut self) {
        let effect = match self.pending.take() {
            Some(PendingCall::Validate(effect)) => self.session.resolve(effect),
            Some(PendingCall::Retry) => self.session.retry(),
            None => return,
        };
        self.handle_effect(&effect);
    }

    fn handle_effect(&mut self, effect: &Effect) {
        match effect {
            Effect::RowScored {
                feedback, outcome, ..
            } => {
                if feedback.is_invalid() {
                    self.add_message("Not in the word list!", MessageStyle::Error);
                }
                match outcome {
                    Outcome::Won => {
                        let rows = self.session.board().rows().len();
                        let celebration = match rows {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message(
                            "Press Enter for a new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    Outcome::Lost => {
                        let secret = self.session.board().secret().text().to_string();
                        self.add_message(
                            &format!("Out of guesses! The word was {secret}."),
                            MessageStyle::Error,
                        );
                        self.add_message(
                            "Press Enter for a new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    Outcome::InProgress => {}
                }
            }
            Effect::ValidationFailed { reason, .. } => {
                self.add_message(
                    &format!("Could not check the word: {reason}"),
                    MessageStyle::Error,
                );
                self.add_message("Press Enter to retry.", MessageStyle::Info);
            }
            Effect::Reset => {
                self.add_message("New game started!", MessageStyle::Info);
            }
            Effect::Ignored | Effect::LetterAccepted { .. } | Effect::ValidateRow { .. } => {}
        }
    }

    pub fn new_game(&mut self) {
        self.pending = None;
        match self.session.reset() {
            Ok(effect) => {
                self.messages.clear();
                self.handle_effect(&effect);
            }
            Err(e) => {
                self.add_message(
                    &format!("Could not start a new game: {}", e.user_message()),
                    MessageStyle::Error,
                );
            }
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
pub fn run_tui<S: WordSource>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Redraw first so "Checking..." is visible while the oracle answers
        if app.pending.is_some() {
            app.resolve_pending();
            continue;
        }

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResetPolicy;
    use crate::core::Word;
    use crate::source::DictionarySource;

    fn app() -> App<DictionarySource> {
        // Single-word list: the secret is ALLOW and every other guess is invalid
        let source = DictionarySource::new(vec![Word::new("allow").unwrap()], Some(1)).unwrap();
        App::new(Session::start(source, ResetPolicy::Reuse).unwrap())
    }

    fn type_keys(app: &mut App<DictionarySource>, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn full_row_is_queued_until_resolved() {
        let mut app = app();
        type_keys(&mut app, "llama");
        assert!(matches!(app.pending, Some(PendingCall::Validate(_))));
        assert!(app.session.board().rows().is_empty());

        app.resolve_pending();
        assert!(app.pending.is_none());
        assert_eq!(app.session.board().rows().len(), 1);
    }

    #[test]
    fn invalid_word_shows_message() {
        let mut app = app();
        type_keys(&mut app, "xxxxx");
        app.resolve_pending();
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Error && m.text.contains("word list"))
        );
    }

    #[test]
    fn win_then_enter_starts_new_game() {
        let mut app = app();
        type_keys(&mut app, "allow");
        app.resolve_pending();
        assert!(app.game_over());
        assert_eq!(app.session.stats().games_won, 1);

        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(!app.game_over());
        assert!(app.session.board().rows().is_empty());
    }

    #[test]
    fn q_only_quits_after_game_over() {
        let mut app = app();
        type_keys(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.session.board().current_letters(), b"Q");

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
