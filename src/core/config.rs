//! Run configuration.
//!
//! Built once from command-line flags and the environment, then passed by
//! reference into every operation. Nothing in here changes after startup.

use std::env::VarError;
use std::fmt;
use std::time::Duration;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Immutable settings for one run.
#[derive(Clone)]
pub struct Config {
    api_url: String,
    org: String,
    token: Zeroizing<String>,
    mutation_delay: Duration,
}

impl Config {
    /// Create a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` if `token` is empty, or
    /// `ConfigError::InvalidUrl` if `api_url` is not an http(s) URL.
    pub fn new(api_url: &str, org: &str, token: impl Into<String>) -> Result<Self> {
        let token = Zeroizing::new(token.into());
        if token.trim().is_empty() {
            return Err(ConfigError::MissingToken(constants::TOKEN_ENV).into());
        }

        let api_url = normalize_url(api_url)?;
        debug!(api_url = %api_url, org, "configuration loaded");

        Ok(Self {
            api_url,
            org: org.to_string(),
            token,
            mutation_delay: constants::MUTATION_DELAY,
        })
    }

    /// Create a configuration, reading the token from `GITHUB_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` if the variable is unset or empty,
    /// and `ConfigError::InvalidToken` if it is not valid UTF-8.
    pub fn from_env(api_url: &str, org: &str) -> Result<Self> {
        let token = token_from_var(std::env::var(constants::TOKEN_ENV))?;
        Self::new(api_url, org, token)
    }

    /// Override the pause after mutating requests.
    pub fn with_mutation_delay(mut self, delay: Duration) -> Self {
        self.mutation_delay = delay;
        self
    }

    /// API base URL without a trailing slash.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Target organization.
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Pause after mutating requests.
    pub fn mutation_delay(&self) -> Duration {
        self.mutation_delay
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("org", &self.org)
            .field("token", &"<redacted>")
            .field("mutation_delay", &self.mutation_delay)
            .finish()
    }
}

fn normalize_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl {
            url: url.to_string(),
            reason: "must start with http:// or https://".to_string(),
        }
        .into());
    }
    Ok(trimmed.to_string())
}

fn token_from_var(var: std::result::Result<String, VarError>) -> Result<String> {
    match var {
        Ok(token) => Ok(token),
        Err(VarError::NotPresent) => Err(ConfigError::MissingToken(constants::TOKEN_ENV).into()),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidToken(constants::TOKEN_ENV).into()),
    }
}
