//! Game session driver
//!
//! Couples a [`Board`] with a [`WordSource`]: fetches the secret, performs the
//! oracle calls the board asks for and feeds the verdicts back in.

use super::board::{Board, Effect, Event, Outcome, Verdict};
use super::stats::Statistics;
use crate::config::ResetPolicy;
use crate::error::Result;
use crate::source::WordSource;
use tracing::{info, warn};

/// One player's session against a word oracle
pub struct Session<S: WordSource> {
    source: S,
    board: Board,
    reset_policy: ResetPolicy,
    stats: Statistics,
}

impl<S: WordSource> Session<S> {
    /// Fetch the secret and start the first game
    ///
    /// # Errors
    ///
    /// Returns the oracle's error if no secret could be obtained; a session
    /// never starts without one.
    pub fn start(source: S, reset_policy: ResetPolicy) -> Result<Self> {
        let secret = source.fetch_daily_word()?;
        info!("new game started");

        Ok(Self {
            source,
            board: Board::new(secret),
            reset_policy,
            stats: Statistics::default(),
        })
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Apply a key press without contacting the oracle
    ///
    /// A returned [`Effect::ValidateRow`] must be passed to [`Session::resolve`].
    pub fn press(&mut self, key: char) -> Effect {
        self.board.apply(Event::Key(key))
    }

    /// Perform the oracle call requested by `effect`, if any
    ///
    /// Other effects are returned unchanged. A failed call becomes
    /// [`Effect::ValidationFailed`] and never counts as an invalid word.
    pub fn resolve(&mut self, effect: Effect) -> Effect {
        let Effect::ValidateRow { row, guess } = effect else {
            return effect;
        };

        let verdict = match self.source.validate(&guess) {
            Ok(true) => Verdict::Valid,
            Ok(false) => Verdict::Invalid,
            Err(e) => {
                warn!(row, "validation unavailable: {e}");
                Verdict::Unavailable(e.to_string())
            }
        };

        let effect = self.board.apply(Event::Verdict { row, verdict });
        if let Effect::RowScored { outcome, .. } = &effect
            && outcome.is_terminal()
        {
            self.stats.record(*outcome, self.board.rows().len());
            match outcome {
                Outcome::Won => info!(rows = self.board.rows().len(), "game won"),
                _ => info!(secret = %self.board.secret(), "game lost"),
            }
        }
        effect
    }

    /// Press a key and run any validation it triggers
    pub fn type_key(&mut self, key: char) -> Effect {
        let effect = self.press(key);
        self.resolve(effect)
    }

    /// Retry validation of the current row after a network failure
    pub fn retry(&mut self) -> Effect {
        let effect = self.board.apply(Event::Retry);
        self.resolve(effect)
    }

    /// Start over according to the reset policy
    ///
    /// # Errors
    ///
    /// With [`ResetPolicy::Refetch`], returns the oracle's error if no new
    /// secret could be fetched; the current board is left untouched.
    pub fn reset(&mut self) -> Result<Effect> {
        match self.reset_policy {
            ResetPolicy::Reuse => Ok(self.board.apply(Event::Reset)),
            ResetPolicy::Refetch => {
                let secret = self.source.fetch_daily_word()?;
                self.board = Board::new(secret);
                info!("new game started with a fresh secret");
                Ok(Effect::Reset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};
    use crate::error::GameError;
    use crate::game::board::Phase;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Oracle answering from queues; validation defaults to "valid"
    #[derive(Default)]
    struct ScriptedSource {
        secrets: RefCell<VecDeque<Result<Word>>>,
        verdicts: RefCell<VecDeque<Result<bool>>>,
        validations: RefCell<usize>,
    }

    impl ScriptedSource {
        fn with_secrets(secrets: &[&str]) -> Self {
            let source = Self::default();
            for s in secrets {
                source
                    .secrets
                    .borrow_mut()
                    .push_back(Ok(Word::new(s).unwrap()));
            }
            source
        }

        fn then_validate(self, answer: Result<bool>) -> Self {
            self.verdicts.borrow_mut().push_back(answer);
            self
        }
    }

    impl WordSource for ScriptedSource {
        fn fetch_daily_word(&self) -> Result<Word> {
            self.secrets
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(GameError::Network("no more secrets".into())))
        }

        fn validate(&self, _word: &Word) -> Result<bool> {
            *self.validations.borrow_mut() += 1;
            self.verdicts.borrow_mut().pop_front().unwrap_or(Ok(true))
        }
    }

    fn type_word<S: WordSource>(session: &mut Session<S>, word: &str) -> Effect {
        let mut last = Effect::Ignored;
        for key in word.chars() {
            last = session.type_key(key);
        }
        last
    }

    #[test]
    fn start_fails_without_secret() {
        let result = Session::start(ScriptedSource::default(), ResetPolicy::Reuse);
        assert!(matches!(result, Err(GameError::Network(_))));
    }

    #[test]
    fn completed_row_is_validated_and_scored() {
        let source = ScriptedSource::with_secrets(&["allow"]);
        let mut session = Session::start(source, ResetPolicy::Reuse).unwrap();

        let effect = type_word(&mut session, "llama");
        assert_eq!(
            effect,
            Effect::RowScored {
                row: 0,
                feedback: Feedback::parse("YGY--").unwrap(),
                outcome: Outcome::InProgress,
            }
        );
        assert_eq!(*session.source().validations.borrow(), 1);
    }

    #[test]
    fn press_alone_does_not_validate() {
        let source = ScriptedSource::with_secrets(&["allow"]);
        let mut session = Session::start(source, ResetPolicy::Reuse).unwrap();

        let mut last = Effect::Ignored;
        for key in "llama".chars() {
            last = session.press(key);
        }
        assert!(matches!(last, Effect::ValidateRow { row: 0, .. }));
        assert_eq!(*session.source().validations.borrow(), 0);

        let scored = session.resolve(last);
        assert!(matches!(scored, Effect::RowScored { row: 0, .. }));
    }

    #[test]
    fn invalid_word_is_gray() {
        let source = ScriptedSource::with_secrets(&["allow"]).then_validate(Ok(false));
        let mut session = Session::start(source, ResetPolicy::Reuse).unwrap();

        let effect = type_word(&mut session, "xyzzy");
        assert_eq!(
            effect,
            Effect::RowScored {
                row: 0,
                feedback: Feedback::INVALID,
                outcome: Outcome::InProgress,
            }
        );
        assert_eq!(session.board().row(), 1);
    }

    #[test]
    fn network_failure_is_distinct_from_invalid() {
        let source = ScriptedSource::with_secrets(&["allow"])
            .then_validate(Err(GameError::Network("connection reset".into())));
        let mut session = Session::start(source, ResetPolicy::Reuse).unwrap();

        let effect = type_word(&mut session, "allow");
        assert!(matches!(
            effect,
            Effect::ValidationFailed { row: 0, ref reason } if reason.contains("connection reset")
        ));
        assert!(matches!(
            session.board().phase(),
            Phase::ValidationFailed { .. }
        ));
        assert!(session.board().rows().is_empty());

        // Retry succeeds with the default "valid" answer and wins
        let effect = session.retry();
        assert_eq!(
            effect,
            Effect::RowScored {
                row: 0,
                feedback: Feedback::PERFECT,
                outcome: Outcome::Won,
            }
        );
        assert_eq!(session.stats().games_won, 1);
        assert_eq!(session.stats().guess_distribution[1], 1);
    }

    #[test]
    fn loss_is_recorded() {
        let source = ScriptedSource::with_secrets(&["allow"]);
        let mut session = Session::start(source, ResetPolicy::Reuse).unwrap();
        for _ in 0..6 {
            type_word(&mut session, "crane");
        }
        assert_eq!(session.board().outcome(), Outcome::Lost);
        assert_eq!(session.stats().total_games, 1);
        assert_eq!(session.stats().games_won, 0);
    }

    #[test]
    fn reset_reuses_secret() {
        let source = ScriptedSource::with_secrets(&["allow"]);
        let mut session = Session::start(source, ResetPolicy::Reuse).unwrap();
        type_word(&mut session, "allow");
        assert_eq!(session.board().outcome(), Outcome::Won);

        assert_eq!(session.reset().unwrap(), Effect::Reset);
        assert_eq!(session.board().secret().text(), "ALLOW");
        assert_eq!(session.board().outcome(), Outcome::InProgress);
        assert!(session.board().accepts_input());
        assert_eq!(session.stats().total_games, 1);
    }

    #[test]
    fn reset_refetches_secret() {
        let source = ScriptedSource::with_secrets(&["allow", "speed"]);
        let mut session = Session::start(source, ResetPolicy::Refetch).unwrap();
        type_word(&mut session, "crane");

        session.reset().unwrap();
        assert_eq!(session.board().secret().text(), "SPEED");
        assert!(session.board().rows().is_empty());
    }

    #[test]
    fn failed_refetch_keeps_board() {
        let source = ScriptedSource::with_secrets(&["allow"]);
        let mut session = Session::start(source, ResetPolicy::Refetch).unwrap();
        type_word(&mut session, "crane");

        assert!(session.reset().is_err());
        assert_eq!(session.board().secret().text(), "ALLOW");
        assert_eq!(session.board().rows().len(), 1);
    }
}
