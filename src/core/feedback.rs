//! Guess evaluation and per-letter feedback
//!
//! Each completed row is classified letter by letter:
//! - Exact   = letter in the correct position (green)
//! - Present = letter in the secret, wrong position (orange)
//! - Absent  = letter not available in the secret (red)
//! - Invalid = the whole row is not a dictionary word (gray)

use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// Classification of a single letter position in a completed row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// Row was rejected by the dictionary; overrides every letter
    Invalid,
    Absent,
    Present,
    Exact,
}

impl Classification {
    /// Single-character code used by the line front-end
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::Invalid => '?',
        }
    }

    /// Emoji tile for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟧',
            Self::Absent => '🟥',
            Self::Invalid => '⬜',
        }
    }
}

/// Feedback for one completed row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LENGTH]);

impl Feedback {
    /// Every letter in the right place
    pub const PERFECT: Self = Self([Classification::Exact; WORD_LENGTH]);

    /// Row rejected by the dictionary
    pub const INVALID: Self = Self([Classification::Invalid; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(classes: [Classification; WORD_LENGTH]) -> Self {
        Self(classes)
    }

    /// Per-position classifications
    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.0.contains(&Classification::Invalid)
    }

    #[must_use]
    pub fn count(&self, class: Classification) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Convert feedback to an emoji string like "🟩🟧🟥🟩🟥"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }

    /// Parse feedback from codes like "GY-G?" (or the emoji tiles)
    ///
    /// # Examples
    /// ```
    /// use word_masters::core::{Classification, Feedback};
    ///
    /// let fb = Feedback::parse("GY-GY").unwrap();
    /// assert_eq!(fb.classes()[1], Classification::Present);
    /// assert_eq!(Feedback::parse(&fb.to_emoji()), Some(fb));
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut classes = [Classification::Absent; WORD_LENGTH];
        for (slot, ch) in classes.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Classification::Exact,
                'Y' | 'y' | '🟧' | '🟨' => Classification::Present,
                '-' | '_' | '🟥' => Classification::Absent,
                '?' | '⬜' => Classification::Invalid,
                _ => return None,
            };
        }
        Some(Self(classes))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.0 {
            write!(f, "{}", class.code())?;
        }
        Ok(())
    }
}

/// Classify `guess` against `secret`
///
/// Implements the two-pass duplicate-letter rules:
/// 1. Exact pass: matching positions are marked and removed from both working copies
/// 2. Partial pass: each remaining guess letter consumes the leftmost unused
///    occurrence in the secret, or is marked absent
///
/// # Examples
/// ```
/// use word_masters::core::{Classification::*, Word, evaluate};
///
/// let secret = Word::new("allow").unwrap();
/// let guess = Word::new("llama").unwrap();
///
/// assert_eq!(
///     evaluate(&secret, &guess).classes(),
///     &[Present, Exact, Present, Absent, Absent]
/// );
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Feedback {
    let mut result = [Classification::Absent; WORD_LENGTH];
    let mut secret_left: [Option<u8>; WORD_LENGTH] = (*secret.chars()).map(Some);
    let mut guess_left: [Option<u8>; WORD_LENGTH] = (*guess.chars()).map(Some);

    // Exact pass
    // Allow: index needed to clear both working copies in step
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess_left[i] == secret_left[i] {
            result[i] = Classification::Exact;
            guess_left[i] = None;
            secret_left[i] = None;
        }
    }

    // Partial pass, leftmost unused occurrence wins
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        let Some(letter) = guess_left[i] else {
            continue;
        };
        if let Some(j) = secret_left.iter().position(|&s| s == Some(letter)) {
            result[i] = Classification::Present;
            secret_left[j] = None;
        }
    }

    Feedback(result)
}

/// Classify two raw strings, checking both are 5-letter words first
///
/// # Errors
/// Returns `WordError` if either string is not exactly five ASCII letters.
pub fn evaluate_str(secret: &str, guess: &str) -> Result<Feedback, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    Ok(evaluate(&secret, &guess))
}
