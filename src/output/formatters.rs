//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, class: Classification) -> ColoredString {
    let tile = format!(" {letter} ");
    match class {
        Classification::Exact => tile.black().on_green().bold(),
        Classification::Present => tile.black().on_yellow().bold(),
        Classification::Absent => tile.white().on_red().bold(),
        Classification::Invalid => tile.white().on_bright_black(),
    }
}

/// Render a scored row as colored tiles
#[must_use]
pub fn row_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.classes())
        .map(|(&letter, &class)| letter_tile(letter as char, class).to_string())
        .collect()
}

/// Render the unfinished row, padding empty slots
#[must_use]
pub fn pending_row(letters: &[u8], width: usize) -> String {
    (0..width)
        .map(|i| {
            letters
                .get(i)
                .map_or_else(|| "[ ]".to_string(), |&l| format!("[{}]", l as char))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_row_pads_empty_slots() {
        assert_eq!(pending_row(b"LL", 5), "[L][L][ ][ ][ ]");
        assert_eq!(pending_row(b"", 2), "[ ][ ]");
    }

    #[test]
    fn row_tiles_contain_letters() {
        colored::control::set_override(false);
        let guess = Word::new("llama").unwrap();
        let feedback = Feedback::parse("YGY--").unwrap();
        assert_eq!(row_tiles(&guess, &feedback), " L  L  A  M  A ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
