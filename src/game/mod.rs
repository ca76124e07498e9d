//! Turn state machine and the session that drives it

mod board;
mod session;
mod stats;

pub use board::{Board, Effect, Event, MAX_ROWS, Outcome, Phase, ScoredRow, Verdict};
pub use session::Session;
pub use stats::Statistics;
