//! Client for the remote word API.
//!
//! Two endpoints are used:
//! - `GET <base>/?word=<word>` looks up one word (404 when it is not included)
//! - `POST <base>/add` adds a JSON array of words
//!
//! Each call is exactly one request. There are no timeouts, retries or
//! request deduplication; concurrent callers each get their own response.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::models::WordLookupResult;

/// Word API errors.
#[derive(Debug, thiserror::Error)]
pub enum WordApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Word not included: {word}")]
    NotFound { word: String },
}

struct WordApiInner {
    client: Client,
    base_url: String,
}

/// Word API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct WordApiClient {
    inner: Arc<WordApiInner>,
}

impl WordApiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            inner: Arc::new(WordApiInner {
                client: Client::new(),
                base_url,
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Look up a single word.
    pub async fn lookup(&self, word: &str) -> Result<WordLookupResult, WordApiError> {
        let url = format!("{}/", self.inner.base_url);

        let resp = self
            .inner
            .client
            .get(&url)
            .query(&[("word", word)])
            .send()
            .await
            .map_err(|e| WordApiError::Network(e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(WordApiError::NotFound {
                word: word.to_string(),
            });
        }

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(WordApiError::Backend { status, message });
        }

        resp.json()
            .await
            .map_err(|e| WordApiError::Parse(e.to_string()))
    }

    /// Submit new words. Each element is sent exactly as given.
    pub async fn add_words(&self, words: &[Value]) -> Result<(), WordApiError> {
        let url = format!("{}/add", self.inner.base_url);

        let resp = self
            .inner
            .client
            .post(&url)
            .json(words)
            .send()
            .await
            .map_err(|e| WordApiError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(WordApiError::Backend { status, message });
        }

        Ok(())
    }
}
