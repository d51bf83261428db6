//! Runtime configuration read from environment variables

use std::path::PathBuf;

use thiserror::Error;

/// Word API used when `WORD_API_URL` is not set.
pub const DEFAULT_WORD_API_URL: &str = "https://wordapi.modujobs.tech";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("cannot resolve working directory: {0}")]
    WorkingDir(#[from] std::io::Error),
}

/// Server configuration.
///
/// Env vars:
/// - HOST: bind address (default `0.0.0.0`)
/// - PORT: bind port (default `3000`)
/// - QA_DIR: Q&A markdown directory (default `./qa`)
/// - WORD_API_URL: remote word API base URL
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub qa_dir: PathBuf,
    pub word_api_url: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        let qa_dir = match lookup("QA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => qa_core::default_qa_dir()?,
        };

        let word_api_url =
            lookup("WORD_API_URL").unwrap_or_else(|| DEFAULT_WORD_API_URL.to_string());

        Ok(Self {
            host,
            port,
            qa_dir,
            word_api_url,
        })
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
