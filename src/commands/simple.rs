//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Every character of a line is fed to the
//! board as a key press, so a row can be typed in one go or in pieces.

use crate::core::Word;
use crate::error::Result as GameResult;
use crate::game::{Effect, Outcome, Phase, Session};
use crate::output::{print_board, print_effect, print_statistics};
use crate::source::WordSource;
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::io::{self, Write};
use std::time::Duration;

/// Word source decorator showing a spinner while the oracle is busy
pub struct SpinnerSource<S> {
    inner: S,
}

impl<S> SpinnerSource<S> {
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: WordSource> WordSource for SpinnerSource<S> {
    fn fetch_daily_word(&self) -> GameResult<Word> {
        with_spinner("Fetching the word of the day...", || {
            self.inner.fetch_daily_word()
        })
    }

    fn validate(&self, word: &Word) -> GameResult<bool> {
        with_spinner(format!("Checking {word}..."), || self.inner.validate(word))
    }
}

fn with_spinner<T>(message: impl Into<Cow<'static, str>>, f: impl FnOnce() -> T) -> T {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    let result = f();
    pb.finish_and_clear();
    result
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or a new secret cannot be fetched
/// when starting over.
pub fn run_simple<S: WordSource>(session: &mut Session<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Word Masters - Line Mode      ║");
    println!("╚══════════════════════════════════════╝\n");

    println!("Guess the five-letter word in six tries.");
    println!("  {} right letter, right spot", " G ".black().on_green());
    println!("  {} right letter, wrong spot", " Y ".black().on_yellow());
    println!("  {} letter not in the word", " - ".white().on_red());
    println!("  {} not a word, try another\n", " ? ".white().on_bright_black());
    println!("Commands: ':retry' after a network error, ':new' to start over, ':stats', ':quit'\n");

    print_board(session.board());

    loop {
        let input = get_user_input("Guess")?;

        match input.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":new" | ":n" => {
                let effect = session.reset().context("could not start a new game")?;
                print_effect(&effect, session.board());
            }
            ":retry" | ":r" => {
                let effect = session.retry();
                if effect == Effect::Ignored {
                    println!("Nothing to retry.");
                }
                print_effect(&effect, session.board());
            }
            ":stats" => {
                print_statistics(session.stats());
                continue;
            }
            line => {
                let (effects, unread) = feed_line(session, line);
                for effect in &effects {
                    print_effect(effect, session.board());
                }
                if unread > 0 {
                    println!("Ignored {unread} extra character(s) after the row.");
                }
                let stuck = effects.iter().all(|e| *e == Effect::Ignored);
                if stuck && matches!(session.board().phase(), Phase::ValidationFailed { .. }) {
                    println!("The row is waiting for a check. Type ':retry' to try again.");
                }
            }
        }

        print_board(session.board());

        if session.board().outcome() != Outcome::InProgress {
            print_statistics(session.stats());
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    let effect = session.reset().context("could not start a new game")?;
                    print_effect(&effect, session.board());
                    print_board(session.board());
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Feed one input line to the board, one key per character
///
/// Stops once the row is scored or its check fails; returns the effects and
/// how many characters were left unread.
fn feed_line<S: WordSource>(session: &mut Session<S>, line: &str) -> (Vec<Effect>, usize) {
    let mut effects = Vec::new();
    let mut keys = line.chars();
    for key in keys.by_ref() {
        let effect = session.type_key(key);
        let settled = matches!(
            effect,
            Effect::RowScored { .. } | Effect::ValidationFailed { .. }
        );
        effects.push(effect);
        if settled {
            break;
        }
    }
    (effects, keys.count())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        anyhow::bail!("input closed");
    }

    Ok(input.trim().to_string())
}
