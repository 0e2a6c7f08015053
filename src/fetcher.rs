//! The batch fetch pipeline: parse the request, acquire one token, fetch
//! each secret in order, assemble the response.
//!
//! A malformed request fails before any network traffic. A failed token
//! acquisition aborts the whole run. A failed individual secret only marks
//! its own entry and the batch continues.

use std::io::Read;

use tracing::{info, warn};

use crate::errors::{Result, VaultFetchError};
use crate::identity::IdentityClient;
use crate::vault::{SecretRequest, SecretResponse, SecretResult, VaultClient, UNABLE_TO_RETRIEVE};

/// Parse a batch request from a reader (normally stdin).
pub fn read_request(reader: impl Read) -> Result<SecretRequest> {
    serde_json::from_reader(reader).map_err(|e| VaultFetchError::InvalidRequest(e.to_string()))
}

/// Run the fetch pipeline for an already-parsed request.
///
/// One token is acquired up front and shared across every secret in the
/// batch; it is never re-acquired mid-run.
pub fn retrieve_secrets(
    request: &SecretRequest,
    identity: &IdentityClient,
    vault: &VaultClient,
) -> Result<SecretResponse> {
    let token = identity.acquire_token()?;

    info!(secrets = request.secrets.len(), "retrieving batch");
    let mut response = SecretResponse::default();

    for name in &request.secrets {
        match vault.get_secret(&token, name) {
            Ok(value) => response.insert(name, &SecretResult::ok(value))?,
            Err(e) => {
                warn!(secret = %name, error = %e, "secret fetch failed");
                response.insert(name, &SecretResult::failed(UNABLE_TO_RETRIEVE))?;
            }
        }
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_request_accepts_valid_payload() {
        let req = read_request(r#"{"secrets": ["a", "b", "c"]}"#.as_bytes()).unwrap();
        assert_eq!(req.secrets, vec!["a", "b", "c"]);
    }

    #[test]
    fn read_request_accepts_empty_list() {
        let req = read_request(r#"{"secrets": []}"#.as_bytes()).unwrap();
        assert!(req.secrets.is_empty());
    }

    #[test]
    fn read_request_rejects_invalid_json() {
        let err = read_request("not json at all".as_bytes()).unwrap_err();
        assert!(matches!(err, VaultFetchError::InvalidRequest(_)));
    }

    #[test]
    fn read_request_rejects_missing_secrets_field() {
        let err = read_request(r#"{"keys": ["a"]}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, VaultFetchError::InvalidRequest(_)));
    }

    #[test]
    fn read_request_rejects_non_string_names() {
        let err = read_request(r#"{"secrets": [1, 2]}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, VaultFetchError::InvalidRequest(_)));
    }
}
