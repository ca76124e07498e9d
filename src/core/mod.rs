//! Core domain types for the game
//!
//! Words and the guess evaluator. Everything here is pure and free of I/O.

mod feedback;
mod word;

pub use feedback::{Classification, Feedback, evaluate, evaluate_str};
pub use word::{WORD_LENGTH, Word, WordError};
