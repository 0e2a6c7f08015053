//! Command implementations, one module per subcommand.

pub mod batch;
pub mod completions;
pub mod get;

use crate::config::Settings;
use crate::errors::Result;
use crate::identity::IdentityClient;
use crate::vault::VaultClient;

/// Build the identity and vault clients from resolved settings.
///
/// Both share one HTTP agent so the configured timeout applies to the
/// token call and every secret call alike.
fn build_clients(settings: &Settings) -> Result<(IdentityClient, VaultClient)> {
    let vault_uri = settings.require_vault_uri()?;
    let agent = settings.agent();

    let identity = IdentityClient::new(
        agent.clone(),
        &settings.identity_endpoint,
        &settings.resource,
    );
    let vault = VaultClient::new(agent, vault_uri, &settings.api_version);

    Ok((identity, vault))
}
