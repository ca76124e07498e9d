//! Offline word oracle backed by a word list file
//!
//! One word per line; blank lines and entries that are not five ASCII
//! letters are skipped. The secret is drawn at random from the list and
//! validation is plain membership.

use super::WordSource;
use crate::core::Word;
use crate::error::{GameError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Word oracle that never touches the network
pub struct DictionarySource {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
    rng: RefCell<StdRng>,
}

impl DictionarySource {
    /// Build a source from a list of words
    ///
    /// Pass a seed for a reproducible sequence of secrets.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Dictionary` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use word_masters::core::Word;
    /// use word_masters::source::{DictionarySource, WordSource};
    ///
    /// let words = vec![Word::new("crane").unwrap()];
    /// let source = DictionarySource::new(words, Some(7)).unwrap();
    ///
    /// assert_eq!(source.fetch_daily_word().unwrap().text(), "CRANE");
    /// ```
    pub fn new(words: Vec<Word>, seed: Option<u64>) -> Result<Self> {
        if words.is_empty() {
            return Err(GameError::Dictionary("word list is empty".to_string()));
        }

        let lookup = words.iter().cloned().collect();
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(Self {
            words,
            lookup,
            rng: RefCell::new(rng),
        })
    }

    /// Load a word list from a file
    ///
    /// # Errors
    ///
    /// Returns `GameError::Dictionary` if the file cannot be read or holds no
    /// valid words.
    pub fn from_file<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| GameError::Dictionary(format!("{}: {e}", path.display())))?;

        let words = parse_word_list(&content);
        info!(path = %path.display(), count = words.len(), "loaded word list");
        Self::new(words, seed)
    }
}

impl WordSource for DictionarySource {
    fn fetch_daily_word(&self) -> Result<Word> {
        let mut rng = self.rng.borrow_mut();
        let word = self
            .words
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| GameError::Dictionary("word list is empty".to_string()))?;
        debug!("picked secret from word list");
        Ok(word)
    }

    fn validate(&self, word: &Word) -> Result<bool> {
        Ok(self.lookup.contains(word))
    }
}

/// Parse a newline-separated word list, skipping invalid entries
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}
