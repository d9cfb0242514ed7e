//! [`SecretsApi`] backed by the GitHub REST API.

use serde::de::IgnoredAny;
use tracing::debug;

use super::{Client, ReadOptions, SecretsApi};
use crate::core::config::Config;
use crate::core::types::{EncryptedPayload, OrgPublicKey, OrgSecret, PublicKeyResponse};
use crate::error::{ApiError, Result};

/// GitHub organization Actions secrets endpoints.
pub struct GitHub {
    client: Client,
    api_url: String,
}

impl GitHub {
    /// Create an API handle for the URL and token in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: Client::new(config)?,
            api_url: config.api_url().to_string(),
        })
    }

    /// `{url}/orgs/{org}/actions/secrets/public-key`
    pub fn public_key_url(&self, org: &str) -> String {
        format!("{}/orgs/{}/actions/secrets/public-key", self.api_url, org)
    }

    /// `{url}/orgs/{org}/actions/secrets/{name}`
    pub fn secret_url(&self, org: &str, name: &str) -> String {
        format!("{}/orgs/{}/actions/secrets/{}", self.api_url, org, name)
    }
}

impl SecretsApi for GitHub {
    fn public_key(&self, org: &str) -> Result<OrgPublicKey> {
        let url = self.public_key_url(org);
        let response: Option<PublicKeyResponse> = self.client.get(&url, ReadOptions::default())?;

        let missing = |field| ApiError::MissingPublicKey {
            org: org.to_string(),
            field,
        };

        let response = response.ok_or_else(|| missing("key"))?;
        let key = response
            .key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| missing("key"))?;
        let key_id = response
            .key_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| missing("key_id"))?;

        debug!(org, key_id = %key_id, "fetched public key");
        Ok(OrgPublicKey { key_id, key })
    }

    fn secret_exists(&self, org: &str, name: &str) -> Result<bool> {
        let url = self.secret_url(org, name);
        let existing: Option<OrgSecret> = self.client.get(&url, ReadOptions::allow_not_found())?;

        if let Some(secret) = &existing {
            debug!(
                name = %secret.name,
                updated_at = secret.updated_at.as_deref().unwrap_or("unknown"),
                "secret exists"
            );
        }
        Ok(existing.is_some())
    }

    fn put_secret(&self, org: &str, name: &str, payload: &EncryptedPayload) -> Result<()> {
        let url = self.secret_url(org, name);
        let _: Option<IgnoredAny> = self.client.put(&url, payload)?;
        Ok(())
    }
}
