//! `generate-secret-for-org` command.
//!
//! Seals one string for an organization and prints the base64 result, for
//! pasting into places that take a pre-encrypted secret value.

use crate::cli::{output, GenerateArgs};
use crate::core::api::GitHub;
use crate::core::config::Config;
use crate::core::secrets;
use crate::error::Result;

/// Encrypt `args.input` and print it as the last line of stdout.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let config = Config::from_env(&args.url, &args.org)?;

    output::dimmed(&format!(
        "encrypting input with public key for org {}",
        config.org()
    ));

    let api = GitHub::new(&config)?;
    let encrypted = secrets::encrypt_for_org(&api, config.org(), &args.input)?;

    println!("{}", encrypted);
    Ok(())
}
