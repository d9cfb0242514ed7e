//! Wire and domain types.
//!
//! Request and response bodies for the Actions secrets endpoints, plus the
//! record type read from CSV input.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// An organization's Actions public key.
///
/// Fetched fresh for every secret; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgPublicKey {
    /// Opaque identifier GitHub uses to match submissions to this key.
    pub key_id: String,
    /// Base64 encoding of a raw 32-byte X25519 public key.
    pub key: String,
}

/// Raw `GET /orgs/{org}/actions/secrets/public-key` body.
///
/// Fields are optional so a malformed answer surfaces as a named error
/// rather than a decode failure.
#[derive(Debug, Deserialize)]
pub(crate) struct PublicKeyResponse {
    #[serde(default)]
    pub key_id: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

/// Which repositories in the organization may read a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    All,
    Private,
    Selected,
}

/// Body of `PUT /orgs/{org}/actions/secrets/{name}`.
#[derive(Debug, Clone, Serialize)]
pub struct EncryptedPayload {
    pub encrypted_value: String,
    pub key_id: String,
    pub visibility: Visibility,
}

impl EncryptedPayload {
    /// Payload visible to every repository in the organization.
    pub fn for_all_repositories(encrypted_value: String, key: &OrgPublicKey) -> Self {
        Self {
            encrypted_value,
            key_id: key.key_id.clone(),
            visibility: Visibility::All,
        }
    }
}

/// Metadata returned by `GET /orgs/{org}/actions/secrets/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgSecret {
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
}

/// One `name,value` row from the input CSV.
#[derive(Clone)]
pub struct SecretRecord {
    /// Secret name as written in the file (validated later).
    pub name: String,
    /// Plaintext value, wiped on drop.
    pub value: Zeroizing<String>,
    /// 1-based line where the record starts.
    pub line: usize,
}

impl SecretRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            value: Zeroizing::new(value.into()),
            line,
        }
    }
}

impl std::fmt::Debug for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretRecord")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .field("line", &self.line)
            .finish()
    }
}
