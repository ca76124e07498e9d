//! Terminal output formatting
//!
//! Display utilities for the line front-end and the score command.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_effect, print_score, print_statistics};
