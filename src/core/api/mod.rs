//! GitHub Actions secrets API.
//!
//! [`SecretsApi`] is the seam between the orchestration in
//! [`crate::core::secrets`] and the network, so the bulk loader can be
//! exercised against an in-memory implementation.

mod client;
mod github;

pub use client::{Client, Method, ReadOptions};
pub use github::GitHub;

use crate::core::types::{EncryptedPayload, OrgPublicKey};
use crate::error::Result;

/// Operations on an organization's Actions secrets.
pub trait SecretsApi {
    /// Fetch the organization's current public key.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingPublicKey` if the answer has no key, or any
    /// `ApiError` from the request itself.
    fn public_key(&self, org: &str) -> Result<OrgPublicKey>;

    /// Check whether a secret is already defined. A 404 means "no".
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for any failure other than not-found.
    fn secret_exists(&self, org: &str, name: &str) -> Result<bool>;

    /// Create or replace a secret.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` for any non-2xx answer.
    fn put_secret(&self, org: &str, name: &str, payload: &EncryptedPayload) -> Result<()>;
}
