//! Word oracle
//!
//! Supplies the secret word and answers whether a guess is a real word.
//! The game only depends on the [`WordSource`] trait; the remote HTTP service
//! and a local dictionary file are the two provided implementations.

pub mod dictionary;
pub mod http;

pub use dictionary::DictionarySource;
pub use http::HttpWordSource;

use crate::core::Word;
use crate::error::Result;

/// Oracle consulted by a game session
pub trait WordSource {
    /// Fetch the secret word for a new game
    ///
    /// # Errors
    ///
    /// Returns `GameError::Network` if the oracle cannot be reached and
    /// `GameError::InvalidInput` if it answers with something that is not a
    /// five-letter word.
    fn fetch_daily_word(&self) -> Result<Word>;

    /// Check whether `word` is in the oracle's dictionary
    ///
    /// # Errors
    ///
    /// Returns `GameError::Network` if no answer could be obtained. A word
    /// that is simply not in the dictionary is `Ok(false)`.
    fn validate(&self, word: &Word) -> Result<bool>;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn fetch_daily_word(&self) -> Result<Word> {
        (**self).fetch_daily_word()
    }

    fn validate(&self, word: &Word) -> Result<bool> {
        (**self).validate(word)
    }
}
