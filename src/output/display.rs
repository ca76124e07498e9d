//! Display functions for game state and command results

use super::formatters::{create_progress_bar, pending_row, row_tiles};
use crate::core::{Classification, Feedback, WORD_LENGTH, Word};
use crate::game::{Board, Effect, MAX_ROWS, Outcome, Statistics};
use colored::Colorize;

/// Print every scored row plus the row being filled
pub fn print_board(board: &Board) {
    println!("{}", "─".repeat(40).cyan());
    for (i, row) in board.rows().iter().enumerate() {
        println!(
            "  {} {}",
            (i + 1).to_string().bright_black(),
            row_tiles(&row.guess, &row.feedback)
        );
    }
    if board.outcome() == Outcome::InProgress {
        if let Some(rejected) = board.rejected() {
            println!(
                "  {} {}",
                "✗".bright_black(),
                row_tiles(&rejected.guess, &rejected.feedback)
            );
        }
        println!(
            "  {} {}",
            (board.rows().len() + 1).to_string().bright_black(),
            pending_row(board.current_letters(), WORD_LENGTH)
        );
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print what a transition means to the player
pub fn print_effect(effect: &Effect, board: &Board) {
    match effect {
        Effect::RowScored {
            feedback, outcome, ..
        } => {
            if feedback.is_invalid() {
                println!("{}", "Not in the word list.".bright_black());
            }
            match outcome {
                Outcome::Won => {
                    println!("\n{}", "═".repeat(40).bright_cyan());
                    println!("{}", "  🎉 Bravo! You found it!".bright_green().bold());
                    println!(
                        "  Solved in {} {}",
                        board.rows().len().to_string().bright_cyan().bold(),
                        if board.rows().len() == 1 { "guess" } else { "guesses" }
                    );
                    println!("{}", "═".repeat(40).bright_cyan());
                }
                Outcome::Lost => {
                    println!(
                        "\n{} The word was {}.",
                        "❌ Out of guesses!".red().bold(),
                        board.secret().text().bright_yellow().bold()
                    );
                }
                Outcome::InProgress => {
                    println!("{} guesses left", MAX_ROWS - board.rows().len());
                }
            }
        }
        Effect::ValidationFailed { reason, .. } => {
            println!("{} {reason}", "⚠ Could not check the word:".yellow().bold());
            println!("Type ':retry' to try again.");
        }
        Effect::Reset => println!("\n🔄 New game started!\n"),
        Effect::Ignored | Effect::LetterAccepted { .. } | Effect::ValidateRow { .. } => {}
    }
}

/// Print the feedback for one secret/guess pair
pub fn print_score(secret: &Word, guess: &Word, feedback: &Feedback) {
    println!(
        "{} vs {}",
        guess.text().bright_white().bold(),
        secret.text().bright_yellow().bold()
    );
    println!("{}", row_tiles(guess, feedback));
    println!(
        "{}  ({feedback}: {} exact, {} present)",
        feedback.to_emoji(),
        feedback.count(Classification::Exact),
        feedback.count(Classification::Present)
    );
}

/// Print win statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Games played:  {}", stats.total_games);
    println!(
        "   Win rate:      {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );

    let max = stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);
    for rows in 1..=MAX_ROWS {
        let count = stats.guess_distribution[rows];
        let bar = create_progress_bar(count as f64, max as f64, 20);
        println!("   {rows}: {} {count}", bar.green());
    }
}
