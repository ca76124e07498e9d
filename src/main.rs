//! Word Masters - CLI
//!
//! Five-letter word guessing game with TUI and line modes.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use word_masters::{
    commands::{SpinnerSource, run_simple, score_guess},
    config::{Config, DEFAULT_API_URL, HttpConfig, ResetPolicy, SourceConfig},
    game::Session,
    logging::{LogConfig, init_logging},
    output::{print_score, print_statistics},
    source::WordSource,
};

#[derive(Parser)]
#[command(
    name = "word_masters",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play offline against a word list file (one word per line)
    #[arg(short, long, global = true, env = "WORD_MASTERS_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Base URL of the words API
    #[arg(long, global = true, env = "WORD_MASTERS_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Timeout for each words API request, in seconds
    #[arg(long, global = true, default_value = "10")]
    timeout_secs: u64,

    /// Fetch a new secret when starting over instead of reusing the current one
    #[arg(long, global = true)]
    refetch_on_reset: bool,

    /// Seed for picking secrets from a word list
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Disable log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Write logs to a file (required to see logs in play mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without TUI
    Simple,

    /// Show the feedback a guess would get against a secret
    Score {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        let source = match &self.dictionary {
            Some(path) => SourceConfig::Dictionary {
                path: path.clone(),
                seed: self.seed,
            },
            None => SourceConfig::Http(HttpConfig::from_base_url(
                &self.api_url,
                Duration::from_secs(self.timeout_secs),
            )),
        };
        let reset_policy = if self.refetch_on_reset {
            ResetPolicy::Refetch
        } else {
            ResetPolicy::Reuse
        };
        Config {
            source,
            reset_policy,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    let mut log_config =
        LogConfig::from_verbosity(cli.verbose, cli.quiet).with_log_file(cli.log_file.clone());
    if matches!(command, Commands::Play) {
        log_config = log_config.for_fullscreen();
    }
    init_logging(&log_config).context("failed to initialize logging")?;

    match command {
        Commands::Play => run_play_command(&cli.config()),
        Commands::Simple => run_simple_command(&cli.config()),
        Commands::Score { secret, guess } => run_score_command(secret, guess),
    }
}

fn start_session<S: WordSource>(source: S, config: &Config) -> Result<Session<S>> {
    Session::start(source, config.reset_policy).context("could not fetch the word of the day")
}

fn run_play_command(config: &Config) -> Result<()> {
    use word_masters::interactive::{App, run_tui};

    let source = config.build_source()?;
    let session = start_session(source, config)?;
    run_tui(App::new(session))
}

fn run_simple_command(config: &Config) -> Result<()> {
    let source = SpinnerSource::new(config.build_source()?);
    let mut session = start_session(source, config)?;
    run_simple(&mut session)?;
    print_statistics(session.stats());
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess)?;
    print_score(&result.secret, &result.guess, &result.feedback);
    Ok(())
}
