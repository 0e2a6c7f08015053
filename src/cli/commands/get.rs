//! `vaultfetch get` — fetch one secret and print its value.
//!
//! Unlike `batch`, any failure here is fatal: there is no per-item error
//! entry to fall back on, so the error propagates and the process exits
//! non-zero.

use crate::config::Settings;
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(settings: &Settings, name: &str) -> Result<()> {
    let (identity, vault) = super::build_clients(settings)?;

    let token = identity.acquire_token()?;
    let value = vault.get_secret(&token, name)?;

    // Raw value only, so the output can be piped or substituted.
    println!("{value}");

    Ok(())
}
