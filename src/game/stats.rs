//! Win statistics across games in one session

use super::board::{MAX_ROWS, Outcome};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of rows used (index 0 unused)
    pub guess_distribution: [usize; MAX_ROWS + 1],
}

impl Statistics {
    /// Record a finished game
    ///
    /// `rows_used` is ignored for losses. Unfinished games are not recorded.
    pub fn record(&mut self, outcome: Outcome, rows_used: usize) {
        match outcome {
            Outcome::InProgress => {}
            Outcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(rows_used) {
                    *slot += 1;
                }
            }
            Outcome::Lost => self.total_games += 1,
        }
    }

    /// Percentage of games won (0-100)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
