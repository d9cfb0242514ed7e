//! Command-line interface.
//!
//! Argument definitions for both binaries, logging setup and the single
//! place where errors are reported to the user.

pub mod add;
pub mod generate;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::constants;
use crate::error::{ApiError, ConfigError, Error, SecretError};

/// Add or update secrets in a GitHub organization from a CSV file.
#[derive(Parser, Debug)]
#[command(
    name = "add-org-secrets",
    about = "Add or update secrets in a GitHub organization",
    version,
    after_help = "Reads the API token from the GITHUB_TOKEN environment variable."
)]
pub struct AddArgs {
    /// URL of the GitHub API endpoint
    #[arg(long, default_value = constants::DEFAULT_API_URL)]
    pub url: String,

    /// Organization to add secrets to
    #[arg(long)]
    pub org: String,

    /// CSV file with each line in the format secretname,secretvalue
    #[arg(long, value_name = "PATH")]
    pub csvfile: PathBuf,

    /// Allow existing secrets to be overwritten, otherwise the run stops
    #[arg(long)]
    pub overwrite: bool,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Encrypt a string with a GitHub organization's public key.
#[derive(Parser, Debug)]
#[command(
    name = "generate-secret-for-org",
    about = "Encrypt and encode a string for a GitHub organization",
    version,
    after_help = "Reads the API token from the GITHUB_TOKEN environment variable."
)]
pub struct GenerateArgs {
    /// URL of the GitHub API endpoint
    #[arg(long, default_value = constants::DEFAULT_API_URL)]
    pub url: String,

    /// Organization whose public key encrypts the input
    #[arg(long)]
    pub org: String,

    /// String to encrypt and encode
    #[arg(long)]
    pub input: String,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Initialize the tracing subscriber.
///
/// `ORG_SECRETS_LOG` takes precedence; otherwise `--verbose` selects debug
/// level for this crate and the default is warnings only. Logs go to stderr.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("org_secrets=debug")
        } else {
            EnvFilter::new("org_secrets=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Suggest a next step for errors the user can act on.
pub fn hint_for(error: &Error) -> Option<&'static str> {
    match error {
        Error::Config(ConfigError::MissingToken(_)) => {
            Some("export GITHUB_TOKEN with a token that can administer organization secrets")
        }
        Error::Secret(SecretError::AlreadyExists { .. }) => {
            Some("re-run with --overwrite to replace existing secrets")
        }
        Error::Secret(SecretError::Record { source, .. }) => hint_for(source),
        Error::Api(ApiError::Status { status: 401, .. })
        | Error::Api(ApiError::Status { status: 403, .. }) => {
            Some("check that GITHUB_TOKEN is valid and can administer organization secrets")
        }
        Error::Api(ApiError::Status { status: 404, .. }) => {
            Some("check the organization name and --url")
        }
        _ => None,
    }
}

/// Print an error (and a hint, if any) to stderr.
pub fn report(error: &Error) {
    output::error(&error.to_string());
    if let Some(hint) = hint_for(error) {
        output::hint(hint);
    }
}
