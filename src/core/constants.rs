//! Constants used throughout org-secrets.
//!
//! Centralizes magic strings and configuration values.

use std::time::Duration;

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Environment variable holding the API bearer token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable for the log filter (e.g. `ORG_SECRETS_LOG=debug`).
pub const LOG_ENV: &str = "ORG_SECRETS_LOG";

/// Pinned REST API version sent with every request.
pub const API_VERSION: &str = "2022-11-28";

/// Header carrying [`API_VERSION`].
pub const API_VERSION_HEADER: &str = "x-github-api-version";

/// Media type GitHub recommends for REST calls.
pub const ACCEPT: &str = "application/vnd.github+json";

/// Pause after every mutating request (POST, PATCH, PUT, DELETE).
///
/// GitHub asks integrators to wait at least one second between writes.
pub const MUTATION_DELAY: Duration = Duration::from_secs(1);

/// User agent for API requests; GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("org-secrets/", env!("CARGO_PKG_VERSION"));
