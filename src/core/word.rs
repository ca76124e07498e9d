//! Five-letter word representation
//!
//! A Word is the unit both the secret and every completed guess row are made of.
//! Letters are normalized to uppercase on construction so all comparisons are
//! case-insensitive.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for strings that cannot be a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_masters::core::Word;
    ///
    /// let word = Word::new("allow").unwrap();
    /// assert_eq!(word.text(), "ALLOW");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = text.to_ascii_uppercase();
        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Build a word from exactly five already-collected letters
    ///
    /// # Errors
    /// Returns `WordError` if the letters are not five ASCII letters.
    pub fn from_letters(letters: &[u8]) -> Result<Self, WordError> {
        if letters.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(letters.len()));
        }
        let text = std::str::from_utf8(letters).map_err(|_| WordError::NonAscii)?;
        Self::new(text)
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as an uppercase byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("ALLOW").unwrap();
        assert_eq!(word.text(), "ALLOW");
        assert_eq!(word.chars(), b"ALLOW");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("llama").unwrap();
        assert_eq!(word.text(), "LLAMA");

        let word2 = Word::new("LlAmA").unwrap();
        assert_eq!(word2.text(), "LLAMA");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  crane\n").unwrap();
        assert_eq!(word.text(), "CRANE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cr ne").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
        assert!(matches!(Word::new("crañe"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_from_letters() {
        let word = Word::from_letters(b"speed").unwrap();
        assert_eq!(word.text(), "SPEED");

        assert!(matches!(
            Word::from_letters(b"spe"),
            Err(WordError::InvalidLength(3))
        ));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "erase".parse().unwrap();
        assert_eq!(format!("{word}"), "ERASE");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
