//! Secret operations (encrypt for an organization, add, bulk load).
//!
//! Every operation fetches the organization's public key right before it
//! seals a value; keys are never reused between secrets.
//!
//! The existence check and the write are two separate requests. Another
//! client can create the secret in between, in which case the write silently
//! replaces it. This is an accepted limitation of the API.

use tracing::{debug, info};

use crate::core::api::SecretsApi;
use crate::core::cipher::{self, Cipher, SealedBox};
use crate::core::types::{EncryptedPayload, SecretRecord};
use crate::core::validation::validate_secret_name;
use crate::error::{Result, SecretError};

/// What a successful write did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The secret did not exist before.
    Created,
    /// An existing secret was overwritten.
    Updated,
}

/// Counts from a bulk load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub created: usize,
    pub updated: usize,
}

impl LoadSummary {
    pub fn total(&self) -> usize {
        self.created + self.updated
    }
}

/// Fetch the org key and seal `plaintext` into a submission payload.
fn seal_for_org<A>(api: &A, org: &str, plaintext: &str) -> Result<EncryptedPayload>
where
    A: SecretsApi + ?Sized,
{
    let key = api.public_key(org)?;
    let encrypted = cipher::encrypt(&key.key, plaintext)?;
    debug!(org, key_id = %key.key_id, cipher = SealedBox.name(), "sealed value");

    Ok(EncryptedPayload::for_all_repositories(encrypted, &key))
}

/// Encrypt a string with the organization's public key.
///
/// # Returns
///
/// Base64 sealed box, suitable for the `encrypted_value` field of any
/// organization secrets endpoint.
///
/// # Errors
///
/// Returns an error if the key cannot be fetched or is malformed.
pub fn encrypt_for_org<A>(api: &A, org: &str, plaintext: &str) -> Result<String>
where
    A: SecretsApi + ?Sized,
{
    Ok(seal_for_org(api, org, plaintext)?.encrypted_value)
}

/// Add or update one organization secret.
///
/// Validates the name, checks whether the secret exists, then fetches the
/// public key, seals the value and writes it.
///
/// # Errors
///
/// Returns `ValidationError::InvalidSecretName` before any request if the
/// name is invalid, `SecretError::AlreadyExists` if the secret exists and
/// `overwrite` is false, or any API/cipher error.
pub fn add_org_secret<A>(
    api: &A,
    org: &str,
    name: &str,
    value: &str,
    overwrite: bool,
) -> Result<Outcome>
where
    A: SecretsApi + ?Sized,
{
    validate_secret_name(name)?;

    let exists = api.secret_exists(org, name)?;
    if exists && !overwrite {
        return Err(SecretError::AlreadyExists {
            name: name.to_string(),
        }
        .into());
    }

    let payload = seal_for_org(api, org, value)?;
    api.put_secret(org, name, &payload)?;

    Ok(if exists {
        Outcome::Updated
    } else {
        Outcome::Created
    })
}

/// Add or update every record, in order.
///
/// Records are processed one at a time; the first failure stops the run and
/// is returned wrapped with the record's line and name. Secrets written
/// before the failure stay written.
///
/// `on_record` is called after each successful write.
///
/// # Errors
///
/// Returns the first error from reading or applying a record.
pub fn load_secrets<A, I, F>(
    api: &A,
    org: &str,
    records: I,
    overwrite: bool,
    mut on_record: F,
) -> Result<LoadSummary>
where
    A: SecretsApi + ?Sized,
    I: IntoIterator<Item = Result<SecretRecord>>,
    F: FnMut(&SecretRecord, Outcome),
{
    let mut summary = LoadSummary::default();

    for record in records {
        let record = record?;
        info!(name = %record.name, line = record.line, "adding or updating secret");

        let outcome = add_org_secret(api, org, &record.name, &record.value, overwrite).map_err(
            |e| SecretError::Record {
                line: record.line,
                name: record.name.clone(),
                source: Box::new(e),
            },
        )?;

        match outcome {
            Outcome::Created => summary.created += 1,
            Outcome::Updated => summary.updated += 1,
        }
        on_record(&record, outcome);
    }

    Ok(summary)
}
