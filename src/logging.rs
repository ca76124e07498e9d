//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `warn`: oracle failures (default)
//! - `info`: game start and outcome
//! - `debug`: oracle requests, row completion and scoring
//! - `trace`: every event applied to the board
//!
//! `RUST_LOG` overrides the level chosen on the command line.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Configuration for logging behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Maximum level written.
    pub level: LevelFilter,
    /// Optional log file. When unset, logs go to stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Map `-v`/`-q` counts to a level.
    ///
    /// - `-q`: off
    /// - default: warn
    /// - `-v`: info, `-vv`: debug, `-vvv`: trace
    #[must_use]
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            LevelFilter::OFF
        } else {
            match verbose {
                0 => LevelFilter::WARN,
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        };
        Self {
            level,
            ..Default::default()
        }
    }

    /// Set the log file path (writes to stderr when None).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Full-screen front-ends own the terminal: without a log file, stay silent.
    #[must_use]
    pub fn for_fullscreen(mut self) -> Self {
        if self.log_file.is_none() {
            self.level = LevelFilter::OFF;
        }
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.level.into())
            .from_env_lossy()
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(false);

    let result = if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        builder.with_writer(io::stderr).without_time().try_init()
    };

    result.map_err(|e| io::Error::other(e.to_string()))
}
