//! Turn state machine
//!
//! `Board` holds everything about one game and advances only through
//! [`Board::apply`]. The reducer never performs I/O: when a row is complete it
//! returns [`Effect::ValidateRow`] and waits for a [`Event::Verdict`] carrying
//! the oracle's answer.

use crate::core::{Classification, Feedback, WORD_LENGTH, Word, evaluate};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Number of guess rows on the board
pub const MAX_ROWS: usize = 6;

/// Overall result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Where the board is within the current turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Accepting letters for the current row
    Filling,
    /// Row complete, waiting for the oracle's verdict
    Validating,
    /// Oracle could not be reached; the row is kept for a retry
    ValidationFailed { reason: String },
    Won,
    Lost,
}

/// Oracle answer for a completed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
    /// Validation did not complete (network failure or timeout)
    Unavailable(String),
}

/// Inputs to the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Raw key press; only ASCII letters are accepted
    Key(char),
    /// Oracle answer for the row with the given index
    Verdict { row: usize, verdict: Verdict },
    /// Ask again after a failed validation
    Retry,
    Reset,
}

/// What a transition produced, for the driver and the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Event had no effect on the board
    Ignored,
    LetterAccepted {
        row: usize,
        col: usize,
        letter: char,
    },
    /// Row is complete and must be checked against the dictionary
    ValidateRow { row: usize, guess: Word },
    RowScored {
        row: usize,
        feedback: Feedback,
        outcome: Outcome,
    },
    ValidationFailed { row: usize, reason: String },
    Reset,
}

/// A completed and frozen guess row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRow {
    pub guess: Word,
    pub feedback: Feedback,
}

impl ScoredRow {
    /// Row was rejected as a non-word
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.feedback.is_invalid()
    }
}

/// Game state for one secret word
#[derive(Debug, Clone)]
pub struct Board {
    secret: Word,
    rows: Vec<ScoredRow>,
    /// Last-row guess the oracle rejected; shown until the next key
    rejected: Option<ScoredRow>,
    letters: Vec<u8>,
    phase: Phase,
}

impl Board {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            rows: Vec::with_capacity(MAX_ROWS),
            rejected: None,
            letters: Vec::with_capacity(WORD_LENGTH),
            phase: Phase::Filling,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Index of the row being filled (0-based)
    ///
    /// Stays on the last row once the board is full.
    #[must_use]
    pub fn row(&self) -> usize {
        self.rows.len().min(MAX_ROWS - 1)
    }

    /// Index of the next letter slot in the current row
    #[must_use]
    pub fn col(&self) -> usize {
        self.letters.len()
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn current_letters(&self) -> &[u8] {
        &self.letters
    }

    #[must_use]
    pub fn rows(&self) -> &[ScoredRow] {
        &self.rows
    }

    /// Rejected guess on the last row, which does not use up the row
    #[must_use]
    pub const fn rejected(&self) -> Option<&ScoredRow> {
        self.rejected.as_ref()
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Won => Outcome::Won,
            Phase::Lost => Outcome::Lost,
            _ => Outcome::InProgress,
        }
    }

    /// Whether a letter key would currently be accepted
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::Filling && self.letters.len() < WORD_LENGTH
    }

    /// Best classification seen for each letter across scored rows
    ///
    /// Invalid rows carry no information and are skipped.
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, Classification> {
        let mut hints: FxHashMap<u8, Classification> = FxHashMap::default();
        for row in self.rows.iter().filter(|r| !r.is_invalid()) {
            for (&letter, &class) in row.guess.chars().iter().zip(row.feedback.classes()) {
                let best = hints.entry(letter).or_insert(class);
                *best = (*best).max(class);
            }
        }
        hints
    }

    /// Advance the state machine by one event
    pub fn apply(&mut self, event: Event) -> Effect {
        trace!(?event, phase = ?self.phase, "applying event");
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Verdict { row, verdict } => self.on_verdict(row, verdict),
            Event::Retry => self.on_retry(),
            Event::Reset => {
                self.rows.clear();
                self.rejected = None;
                self.letters.clear();
                self.phase = Phase::Filling;
                debug!("board reset");
                Effect::Reset
            }
        }
    }

    fn on_key(&mut self, key: char) -> Effect {
        if !key.is_ascii_alphabetic() || !self.accepts_input() {
            return Effect::Ignored;
        }

        let letter = key.to_ascii_uppercase();
        self.rejected = None;
        let row = self.rows.len();
        let col = self.letters.len();
        self.letters.push(letter as u8);

        if self.letters.len() < WORD_LENGTH {
            return Effect::LetterAccepted { row, col, letter };
        }

        match self.pending_guess() {
            Some(guess) => {
                self.phase = Phase::Validating;
                debug!(row, guess = %guess, "row complete");
                Effect::ValidateRow { row, guess }
            }
            // Unreachable in practice: only ASCII letters are ever pushed
            None => {
                self.letters.pop();
                Effect::Ignored
            }
        }
    }

    fn on_verdict(&mut self, row: usize, verdict: Verdict) -> Effect {
        if self.phase != Phase::Validating || row != self.rows.len() {
            debug!(row, "ignoring stale verdict");
            return Effect::Ignored;
        }
        let Some(guess) = self.pending_guess() else {
            return Effect::Ignored;
        };

        let feedback = match verdict {
            Verdict::Valid => evaluate(&self.secret, &guess),
            Verdict::Invalid => Feedback::INVALID,
            Verdict::Unavailable(reason) => {
                self.phase = Phase::ValidationFailed {
                    reason: reason.clone(),
                };
                return Effect::ValidationFailed { row, reason };
            }
        };

        let scored = ScoredRow { guess, feedback };
        self.letters.clear();

        if feedback.is_invalid() {
            // Invalid rows never end the game; on the last row the row is reused
            if self.rows.len() + 1 < MAX_ROWS {
                self.rows.push(scored);
            } else {
                self.rejected = Some(scored);
            }
            self.phase = Phase::Filling;
        } else {
            let won = feedback.is_perfect();
            self.rows.push(scored);
            self.phase = if won {
                Phase::Won
            } else if self.rows.len() == MAX_ROWS {
                Phase::Lost
            } else {
                Phase::Filling
            };
        }

        let outcome = self.outcome();
        debug!(row, %feedback, ?outcome, "row scored");
        Effect::RowScored {
            row,
            feedback,
            outcome,
        }
    }

    fn on_retry(&mut self) -> Effect {
        if !matches!(self.phase, Phase::ValidationFailed { .. }) {
            return Effect::Ignored;
        }
        let Some(guess) = self.pending_guess() else {
            return Effect::Ignored;
        };
        self.phase = Phase::Validating;
        Effect::ValidateRow {
            row: self.rows.len(),
            guess,
        }
    }

    fn pending_guess(&self) -> Option<Word> {
        Word::from_letters(&self.letters).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(secret: &str) -> Board {
        Board::new(Word::new(secret).unwrap())
    }

    /// Type a full row and answer the validation request
    fn play_row(board: &mut Board, guess: &str, verdict: Verdict) -> Effect {
        let mut last = Effect::Ignored;
        for key in guess.chars() {
            last = board.apply(Event::Key(key));
        }
        let Effect::ValidateRow { row, .. } = last else {
            panic!("row did not complete: {last:?}");
        };
        board.apply(Event::Verdict { row, verdict })
    }

    #[test]
    fn letters_fill_current_row() {
        let mut b = board("allow");
        assert_eq!(
            b.apply(Event::Key('l')),
            Effect::LetterAccepted {
                row: 0,
                col: 0,
                letter: 'L'
            }
        );
        assert_eq!(b.col(), 1);
        assert_eq!(b.current_letters(), b"L");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut b = board("allow");
        for key in ['1', ' ', '!', '\n', 'é'] {
            assert_eq!(b.apply(Event::Key(key)), Effect::Ignored);
        }
        assert_eq!(b.col(), 0);
    }

    #[test]
    fn fifth_letter_requests_validation() {
        let mut b = board("allow");
        for key in "llam".chars() {
            b.apply(Event::Key(key));
        }
        let effect = b.apply(Event::Key('a'));
        assert_eq!(
            effect,
            Effect::ValidateRow {
                row: 0,
                guess: Word::new("llama").unwrap()
            }
        );
        assert_eq!(b.phase(), &Phase::Validating);
    }

    #[test]
    fn keys_ignored_while_validating() {
        let mut b = board("allow");
        for key in "llama".chars() {
            b.apply(Event::Key(key));
        }
        assert_eq!(b.apply(Event::Key('x')), Effect::Ignored);
        assert_eq!(b.current_letters(), b"LLAMA");
    }

    #[test]
    fn valid_row_is_scored_and_advances() {
        let mut b = board("allow");
        let effect = play_row(&mut b, "llama", Verdict::Valid);
        assert_eq!(
            effect,
            Effect::RowScored {
                row: 0,
                feedback: Feedback::parse("YGY--").unwrap(),
                outcome: Outcome::InProgress,
            }
        );
        assert_eq!(b.row(), 1);
        assert_eq!(b.col(), 0);
        assert_eq!(b.rows().len(), 1);
        assert!(b.accepts_input());
    }

    #[test]
    fn duplicate_verdict_is_ignored() {
        let mut b = board("allow");
        play_row(&mut b, "llama", Verdict::Valid);
        let again = b.apply(Event::Verdict {
            row: 0,
            verdict: Verdict::Valid,
        });
        assert_eq!(again, Effect::Ignored);
        assert_eq!(b.rows().len(), 1);
    }

    #[test]
    fn verdict_without_pending_row_is_ignored() {
        let mut b = board("allow");
        let effect = b.apply(Event::Verdict {
            row: 0,
            verdict: Verdict::Valid,
        });
        assert_eq!(effect, Effect::Ignored);
        assert!(b.rows().is_empty());
    }

    #[test]
    fn exact_match_wins_and_blocks_input() {
        let mut b = board("allow");
        play_row(&mut b, "llama", Verdict::Valid);
        let effect = play_row(&mut b, "Allow", Verdict::Valid);
        assert_eq!(
            effect,
            Effect::RowScored {
                row: 1,
                feedback: Feedback::PERFECT,
                outcome: Outcome::Won,
            }
        );
        assert_eq!(b.outcome(), Outcome::Won);
        assert_eq!(b.apply(Event::Key('a')), Effect::Ignored);
        assert_eq!(b.col(), 0);
    }

    #[test]
    fn six_misses_lose() {
        let mut b = board("allow");
        for _ in 0..5 {
            play_row(&mut b, "crane", Verdict::Valid);
            assert_eq!(b.outcome(), Outcome::InProgress);
        }
        let effect = play_row(&mut b, "crane", Verdict::Valid);
        assert!(matches!(
            effect,
            Effect::RowScored {
                row: 5,
                outcome: Outcome::Lost,
                ..
            }
        ));
        assert_eq!(b.phase(), &Phase::Lost);
        assert_eq!(b.apply(Event::Key('a')), Effect::Ignored);
    }

    #[test]
    fn win_on_last_row() {
        let mut b = board("allow");
        for _ in 0..5 {
            play_row(&mut b, "crane", Verdict::Valid);
        }
        play_row(&mut b, "allow", Verdict::Valid);
        assert_eq!(b.outcome(), Outcome::Won);
    }

    #[test]
    fn invalid_row_is_gray_and_never_wins() {
        let mut b = board("allow");
        let effect = play_row(&mut b, "xxxxx", Verdict::Invalid);
        assert_eq!(
            effect,
            Effect::RowScored {
                row: 0,
                feedback: Feedback::INVALID,
                outcome: Outcome::InProgress,
            }
        );

        // Even the secret itself cannot win if the oracle rejects it
        let effect = play_row(&mut b, "allow", Verdict::Invalid);
        assert!(matches!(
            effect,
            Effect::RowScored {
                outcome: Outcome::InProgress,
                ..
            }
        ));
        assert_eq!(b.row(), 2);
    }

    #[test]
    fn invalid_last_row_does_not_lose() {
        let mut b = board("allow");
        for _ in 0..5 {
            play_row(&mut b, "crane", Verdict::Valid);
        }

        let effect = play_row(&mut b, "zzzzz", Verdict::Invalid);
        assert_eq!(
            effect,
            Effect::RowScored {
                row: 5,
                feedback: Feedback::INVALID,
                outcome: Outcome::InProgress,
            }
        );
        assert_eq!(b.outcome(), Outcome::InProgress);
        assert_eq!(b.phase(), &Phase::Filling);
        assert_eq!(b.rows().len(), 5);
        assert_eq!(b.row(), 5);
        assert!(b.current_letters().is_empty());
        assert_eq!(b.rejected().map(|r| r.guess.text()), Some("ZZZZZ"));

        // The next key clears the rejected guess and the row is played again
        assert!(matches!(
            b.apply(Event::Key('a')),
            Effect::LetterAccepted { row: 5, col: 0, .. }
        ));
        assert!(b.rejected().is_none());
        for key in "llow".chars() {
            b.apply(Event::Key(key));
        }
        b.apply(Event::Verdict {
            row: 5,
            verdict: Verdict::Valid,
        });
        assert_eq!(b.outcome(), Outcome::Won);
    }

    #[test]
    fn network_failure_keeps_row_for_retry() {
        let mut b = board("allow");
        let effect = play_row(&mut b, "llama", Verdict::Unavailable("timeout".into()));
        assert_eq!(
            effect,
            Effect::ValidationFailed {
                row: 0,
                reason: "timeout".into()
            }
        );
        assert!(b.rows().is_empty());
        assert_eq!(b.current_letters(), b"LLAMA");
        assert_eq!(b.outcome(), Outcome::InProgress);
        assert_eq!(b.apply(Event::Key('x')), Effect::Ignored);

        let retry = b.apply(Event::Retry);
        assert_eq!(
            retry,
            Effect::ValidateRow {
                row: 0,
                guess: Word::new("llama").unwrap()
            }
        );
        b.apply(Event::Verdict {
            row: 0,
            verdict: Verdict::Valid,
        });
        assert_eq!(b.rows().len(), 1);
    }

    #[test]
    fn retry_outside_failure_is_ignored() {
        let mut b = board("allow");
        assert_eq!(b.apply(Event::Retry), Effect::Ignored);
    }

    #[test]
    fn reset_clears_everything() {
        let mut b = board("allow");
        play_row(&mut b, "allow", Verdict::Valid);
        assert_eq!(b.outcome(), Outcome::Won);

        assert_eq!(b.apply(Event::Reset), Effect::Reset);
        assert_eq!(b.row(), 0);
        assert_eq!(b.col(), 0);
        assert!(b.rows().is_empty());
        assert_eq!(b.outcome(), Outcome::InProgress);
        assert!(b.accepts_input());
        assert_eq!(b.secret().text(), "ALLOW");
    }

    #[test]
    fn letter_hints_keep_best_classification() {
        let mut b = board("allow");
        play_row(&mut b, "llama", Verdict::Valid);
        play_row(&mut b, "zzzzz", Verdict::Invalid);

        let hints = b.letter_hints();
        assert_eq!(hints.get(&b'L'), Some(&Classification::Exact));
        assert_eq!(hints.get(&b'A'), Some(&Classification::Present));
        assert_eq!(hints.get(&b'M'), Some(&Classification::Absent));
        assert_eq!(hints.get(&b'Z'), None);
    }
}
