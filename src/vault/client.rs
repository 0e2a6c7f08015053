//! HTTP client for the Key Vault secrets REST API.

use serde::Deserialize;
use tracing::debug;

use crate::errors::{Result, VaultFetchError};
use crate::identity::AccessToken;

/// Key Vault REST api-version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "7.3";

/// Shape of a Key Vault secret bundle; only `value` matters here.
#[derive(Deserialize)]
struct SecretBundle {
    value: String,
}

/// Client for a single Key Vault instance.
pub struct VaultClient {
    agent: ureq::Agent,
    vault_uri: String,
    api_version: String,
}

impl VaultClient {
    pub fn new(
        agent: ureq::Agent,
        vault_uri: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        let vault_uri = vault_uri.into();
        Self {
            // Tolerate a trailing slash in the configured URI.
            vault_uri: vault_uri.trim_end_matches('/').to_string(),
            agent,
            api_version: api_version.into(),
        }
    }

    /// Fetch one secret's current value.
    ///
    /// The returned error carries the actual cause for the log; callers
    /// assembling a batch response flatten it to [`UNABLE_TO_RETRIEVE`]
    /// so the consumer never sees it.
    ///
    /// [`UNABLE_TO_RETRIEVE`]: crate::vault::UNABLE_TO_RETRIEVE
    pub fn get_secret(&self, token: &AccessToken, name: &str) -> Result<String> {
        let url = self.secret_url(name);
        debug!(secret = %name, "fetching secret");

        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", token.secret()))
            .query("api-version", &self.api_version)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => VaultFetchError::SecretFetch {
                    name: name.to_string(),
                    cause: format!("vault returned status {code}"),
                },
                ureq::Error::Transport(t) => VaultFetchError::SecretFetch {
                    name: name.to_string(),
                    cause: format!("vault unreachable: {t}"),
                },
            })?;

        let bundle: SecretBundle = response.into_json().map_err(|e| {
            VaultFetchError::SecretFetch {
                name: name.to_string(),
                cause: format!("malformed secret response: {e}"),
            }
        })?;

        Ok(bundle.value)
    }

    fn secret_url(&self, name: &str) -> String {
        format!("{}/secrets/{}", self.vault_uri, name)
    }
}
