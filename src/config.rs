//! Process-wide configuration.
//!
//! Resolved once at startup and handed to the [`Gateway`](crate::gateway::Gateway).
//! Nothing mutates it afterwards.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Environment variable holding the Rocketlane API key
pub const API_KEY_ENV: &str = "ROCKETLANE_API_KEY";
/// Environment variable overriding the upstream base URL
pub const BASE_URL_ENV: &str = "ROCKETLANE_BASE_URL";
/// Environment variable overriding the per-call timeout (seconds)
pub const TIMEOUT_ENV: &str = "ROCKETLANE_TIMEOUT_SECS";

/// Public Rocketlane REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.rocketlane.com/api/1.0";
/// Per-call timeout applied to every upstream request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upstream connection settings
#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent in the `api-key` header. `None` when unset or blank.
    pub api_key: Option<String>,
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Fixed timeout for each outbound call
    pub timeout: Duration,
}

impl Config {
    /// Build the configuration.
    ///
    /// Priority for base URL and timeout:
    /// 1. Explicit parameter (CLI flag)
    /// 2. Environment variable
    /// 3. Built-in default
    pub fn new(base_url: Option<String>, timeout_secs: Option<u64>) -> Self {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let base_url = base_url
            .or_else(|| env::var(BASE_URL_ENV).ok())
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = timeout_secs
            .or_else(timeout_from_env)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            api_key,
            base_url,
            timeout,
        }
    }

    /// Configuration read purely from the environment
    pub fn from_env() -> Self {
        Self::new(None, None)
    }

    /// Whether a credential is available
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn timeout_from_env() -> Option<u64> {
    let raw = env::var(TIMEOUT_ENV).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(secs) => Some(secs),
        Err(_) => {
            warn!(
                "Ignoring {}={:?}: not a whole number of seconds",
                TIMEOUT_ENV, raw
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
