//! Word Masters
//!
//! A five-letter word guessing game: six tries, each guess checked against a
//! word oracle and colored letter by letter.
//!
//! # Quick Start
//!
//! ```rust
//! use word_masters::core::{Word, evaluate};
//!
//! let secret = Word::new("speed").unwrap();
//! let guess = Word::new("erase").unwrap();
//!
//! // Each secret letter is matched at most once
//! let feedback = evaluate(&secret, &guess);
//! assert_eq!(feedback.to_string(), "Y--YY");
//! ```

// Core domain types
pub mod core;

// Turn state machine and session driver
pub mod game;

// Word oracle
pub mod source;

// Runtime configuration
pub mod config;

// Error types
pub mod error;

// Logging setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
