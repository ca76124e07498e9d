//! Error types for the game and its word oracle.

use thiserror::Error;

use crate::core::WordError;

/// Errors surfaced to the caller of a game session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    /// Word oracle unreachable, timed out, answered with a non-success
    /// status, or sent a body that could not be decoded.
    #[error("network error: {0}")]
    Network(String),

    /// Input that is not a five-letter word.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] WordError),

    /// Local word list could not be read or holds no usable words.
    #[error("dictionary error: {0}")]
    Dictionary(String),
}

impl GameError {
    /// Returns a short message suitable for display in a front-end.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the word service. Check your connection and retry.",
            Self::InvalidInput(_) => "Guesses must be exactly five letters.",
            Self::Dictionary(_) => "The word list could not be loaded.",
        }
    }

    /// Returns whether the failed operation may succeed if attempted again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for GameError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
