//! Runtime configuration
//!
//! Chooses the word oracle and the reset behaviour. Defaults point at the
//! public words API.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::source::{DictionarySource, HttpWordSource, WordSource};

/// Default base URL of the words API
pub const DEFAULT_API_URL: &str = "https://words.dev-apis.com";

/// Default per-request timeout for oracle calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoints and timeout for the remote words API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub daily_url: String,
    pub validate_url: String,
    pub timeout: Duration,
}

impl HttpConfig {
    /// Derive both endpoints from a base URL
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use word_masters::config::HttpConfig;
    ///
    /// let config = HttpConfig::from_base_url("http://localhost:8080/", Duration::from_secs(2));
    /// assert_eq!(config.validate_url, "http://localhost:8080/validate-word");
    /// ```
    #[must_use]
    pub fn from_base_url(base: &str, timeout: Duration) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            daily_url: format!("{base}/word-of-the-day?random=1"),
            validate_url: format!("{base}/validate-word"),
            timeout,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::from_base_url(DEFAULT_API_URL, DEFAULT_TIMEOUT)
    }
}

/// Which oracle supplies and validates words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Http(HttpConfig),
    Dictionary { path: PathBuf, seed: Option<u64> },
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Http(HttpConfig::default())
    }
}

/// What happens to the secret when a game is reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Keep playing against the same secret
    #[default]
    Reuse,
    /// Ask the oracle for a new secret
    Refetch,
}

/// Full game configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub source: SourceConfig,
    pub reset_policy: ResetPolicy,
}

impl Config {
    /// Build the configured word oracle
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created or the word list
    /// cannot be loaded.
    pub fn build_source(&self) -> Result<Box<dyn WordSource>> {
        let source: Box<dyn WordSource> = match &self.source {
            SourceConfig::Http(http) => Box::new(HttpWordSource::new(http)?),
            SourceConfig::Dictionary { path, seed } => {
                Box::new(DictionarySource::from_file(path, *seed)?)
            }
        };
        Ok(source)
    }
}
