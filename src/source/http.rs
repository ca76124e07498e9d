//! Remote word service client.
//!
//! Talks to a words API exposing a word-of-the-day endpoint and a
//! validation endpoint. Every request carries the client timeout; expiry is
//! reported as a network error like any other transport failure.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::WordSource;
use crate::config::HttpConfig;
use crate::core::Word;
use crate::error::{GameError, Result};

/// Body returned by the word-of-the-day endpoint.
#[derive(Debug, Deserialize)]
struct DailyWordResponse {
    word: String,
}

/// Body sent to the validation endpoint.
#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    word: &'a str,
}

/// Body returned by the validation endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    valid_word: bool,
}

/// Word oracle backed by the remote words API.
pub struct HttpWordSource {
    client: Client,
    daily_url: String,
    validate_url: String,
}

impl HttpWordSource {
    /// Create a client for the configured endpoints.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Network` if the HTTP client cannot be built.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(Duration::from_secs(5)))
            .build()?;

        Ok(Self {
            client,
            daily_url: config.daily_url.clone(),
            validate_url: config.validate_url.clone(),
        })
    }

    fn user_agent() -> String {
        format!("word_masters/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl WordSource for HttpWordSource {
    fn fetch_daily_word(&self) -> Result<Word> {
        debug!(url = %self.daily_url, "fetching word of the day");

        let response = self
            .client
            .get(&self.daily_url)
            .header(USER_AGENT, Self::user_agent())
            .header(ACCEPT, "application/json")
            .send()
            .inspect_err(|e| warn!("word of the day request failed: {e}"))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!(status, "word of the day request rejected");
            return Err(GameError::Network(format!(
                "word of the day request failed with status {status}"
            )));
        }

        let body: DailyWordResponse = response.json()?;
        Ok(Word::new(&body.word)?)
    }

    fn validate(&self, word: &Word) -> Result<bool> {
        debug!(url = %self.validate_url, word = %word, "validating word");

        let response = self
            .client
            .post(&self.validate_url)
            .header(USER_AGENT, Self::user_agent())
            .json(&ValidateRequest { word: word.text() })
            .send()
            .inspect_err(|e| warn!("validation request failed: {e}"))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!(status, "validation request rejected");
            return Err(GameError::Network(format!(
                "validation request failed with status {status}"
            )));
        }

        let body: ValidateResponse = response.json()?;
        debug!(word = %word, valid = body.valid_word, "validation answered");
        Ok(body.valid_word)
    }
}
