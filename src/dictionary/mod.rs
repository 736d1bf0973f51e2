//! Dictionary word validation
//!
//! Checks whether a word is a real English word via the free
//! [dictionaryapi.dev](https://dictionaryapi.dev) lookup service.
//!
//! The validator deliberately collapses every failure mode — non-2xx status,
//! malformed body, timeout, network error — into `false`. A caller cannot
//! distinguish "not a word" from "service unreachable". That conflation is a
//! known limitation accepted for a casual game, not a defect: the lookup
//! never errors out of a session.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Asynchronous word validation seam
///
/// Game sessions depend on this trait rather than a concrete HTTP client so
/// tests can substitute a stub.
#[async_trait]
pub trait Validator: Send + Sync {
    /// True if the word is a real dictionary word; never errors.
    async fn is_valid_word(&self, word: &str) -> bool;
}

/// Dictionary client configuration
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// Base URL override, mainly for tests (default: dictionaryapi.dev)
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// HTTP client for the dictionary lookup service
pub struct DictionaryClient {
    client: Client,
    base_url: String,
}

/// A single definition entry in the lookup response
///
/// The service returns a JSON array of these on success; only the presence of
/// entries matters to the games.
#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    #[serde(default)]
    #[allow(dead_code)]
    word: String,
}

impl DictionaryClient {
    /// Create a new dictionary client
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: DictionaryConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { client, base_url })
    }

    async fn lookup(&self, word: &str) -> bool {
        let url = format!("{}/{}", self.base_url, word);

        debug!("dictionary lookup: word='{}'", word);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("dictionary lookup failed for '{}': {}", word, e);
                return false;
            }
        };

        if !response.status().is_success() {
            debug!(
                "dictionary lookup for '{}' returned status {}",
                word,
                response.status()
            );
            return false;
        }

        match response.json::<Vec<DictionaryEntry>>().await {
            Ok(entries) => !entries.is_empty(),
            Err(e) => {
                debug!("dictionary response for '{}' did not parse: {}", word, e);
                false
            }
        }
    }
}

#[async_trait]
impl Validator for DictionaryClient {
    async fn is_valid_word(&self, word: &str) -> bool {
        self.lookup(word).await
    }
}
