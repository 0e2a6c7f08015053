//! Managed Identity token acquisition.
//!
//! Exchanges the platform-assigned identity for a bearer token by querying
//! the Azure Instance Metadata Service (IMDS). IMDS only answers requests
//! that carry the `Metadata: true` header.

use std::fmt;

use serde::Deserialize;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::errors::{Result, VaultFetchError};

/// Token endpoint of the Azure Instance Metadata Service.
pub const DEFAULT_IDENTITY_ENDPOINT: &str =
    "http://169.254.169.254/metadata/identity/oauth2/token";

/// Protocol version of the IMDS token endpoint.
pub const IDENTITY_API_VERSION: &str = "2018-02-01";

/// Resource audience for Key Vault tokens.
pub const DEFAULT_RESOURCE: &str = "https://vault.azure.net";

/// A bearer token for the configured resource.
///
/// The raw string is wiped from memory on drop and never appears in
/// `Debug` output.
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Zeroizing::new(raw.into()))
    }

    /// The raw token, for building an `Authorization` header.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// Shape of the IMDS token response; only `access_token` matters here.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client for the local identity metadata endpoint.
pub struct IdentityClient {
    agent: ureq::Agent,
    endpoint: String,
    resource: String,
}

impl IdentityClient {
    pub fn new(
        agent: ureq::Agent,
        endpoint: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            agent,
            endpoint: endpoint.into(),
            resource: resource.into(),
        }
    }

    /// Request a fresh token from the identity endpoint.
    ///
    /// Every failure mode (transport, HTTP status, missing token field) is
    /// fatal to the caller: there is no retry, the metadata endpoint is
    /// expected to be locally reliable.
    pub fn acquire_token(&self) -> Result<AccessToken> {
        debug!(endpoint = %self.endpoint, resource = %self.resource, "requesting managed identity token");

        let response = self
            .agent
            .get(&self.endpoint)
            .set("Metadata", "true")
            .query("api-version", IDENTITY_API_VERSION)
            .query("resource", &self.resource)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => VaultFetchError::TokenAcquisition(format!(
                    "identity endpoint returned status {code}"
                )),
                ureq::Error::Transport(t) => VaultFetchError::TokenAcquisition(format!(
                    "identity endpoint unreachable: {t}"
                )),
            })?;

        let body: TokenResponse = response.into_json().map_err(|e| {
            VaultFetchError::TokenAcquisition(format!("malformed token response: {e}"))
        })?;

        info!("access token acquired");
        Ok(AccessToken::new(body.access_token))
    }
}
