//! One-shot scoring command
//!
//! Classifies a guess against a given secret without any oracle involved.

use crate::core::{Feedback, Word, evaluate};
use crate::error::Result;

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if either word is not five ASCII letters.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = evaluate(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    #[test]
    fn scores_duplicates() {
        let result = score_guess("allow", "llama").unwrap();
        assert_eq!(result.feedback.to_string(), "YGY--");
        assert_eq!(result.guess.text(), "LLAMA");
    }

    #[test]
    fn rejects_short_guess() {
        assert!(matches!(
            score_guess("allow", "llam"),
            Err(GameError::InvalidInput(_))
        ));
    }
}
