//! Error types for org-secrets.
//!
//! Every failure in the library is returned as an [`Error`]. The binaries are
//! the only place that turns an error into a process exit.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors, raised before any network activity.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    MissingToken(&'static str),

    #[error("{0} contains characters that are not allowed in an HTTP header")]
    InvalidToken(&'static str),

    #[error("invalid API url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error(
        "secret name {name} invalid, can only contain alphanumeric characters \
         ([a-z], [A-Z], [0-9]) or underscores (_). Spaces are not allowed. \
         Must start with a letter ([a-z], [A-Z]) or underscores (_)"
    )]
    InvalidSecretName { name: String },
}

/// Secret-level errors.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("secret {name} already exists, --overwrite was not set")]
    AlreadyExists { name: String },

    /// Failure while processing one CSV row.
    #[error("line {line} ({name}): {source}")]
    Record {
        line: usize,
        name: String,
        #[source]
        source: Box<Error>,
    },
}

/// Errors talking to the GitHub REST API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to create HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request failed: {source} while accessing {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} on {method} while accessing {url}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not get public key for {org}: response has no `{field}`")]
    MissingPublicKey { org: String, field: &'static str },
}

/// Sealed-box encryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid base64 in public key")]
    InvalidBase64,

    #[error("invalid public key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),
}

/// CSV input errors.
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected `name,value`, found a single column")]
    MissingValue { line: usize },

    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
