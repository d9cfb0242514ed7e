//! `add-org-secrets` command.
//!
//! Reads `name,value` rows from a CSV file and writes each one as an
//! organization secret, stopping at the first failure.

use tracing::info;

use crate::cli::{output, AddArgs};
use crate::core::api::GitHub;
use crate::core::config::Config;
use crate::core::csv::Records;
use crate::core::secrets::{self, Outcome};
use crate::error::Result;

/// Bulk-load secrets from `args.csvfile`.
pub fn execute(args: &AddArgs) -> Result<()> {
    let config = Config::from_env(&args.url, &args.org)?;

    output::dimmed(&format!(
        "adding secrets in {} to GitHub organization {}",
        args.csvfile.display(),
        config.org()
    ));

    let records = Records::open(&args.csvfile)?;
    let api = GitHub::new(&config)?;

    let summary = secrets::load_secrets(
        &api,
        config.org(),
        records,
        args.overwrite,
        |record, outcome| match outcome {
            Outcome::Created => output::success(&format!("created {}", output::key(&record.name))),
            Outcome::Updated => output::success(&format!("updated {}", output::key(&record.name))),
        },
    )?;

    info!(
        created = summary.created,
        updated = summary.updated,
        "bulk load finished"
    );

    if summary.total() == 0 {
        output::warn(&format!("no secrets found in {}", args.csvfile.display()));
    } else {
        output::dimmed(&format!(
            "{} secrets written ({} created, {} updated)",
            summary.total(),
            summary.created,
            summary.updated
        ));
    }

    Ok(())
}
