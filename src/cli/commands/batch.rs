//! `vaultfetch batch` — read a JSON request from stdin, fetch every
//! requested secret, print a JSON response to stdout.
//!
//! The request is parsed before anything else so malformed input fails
//! without a single network call. Per-secret failures end up as error
//! entries in the response, not as a process failure: the exit code is 0
//! whenever a complete response was produced.

use std::io;

use crate::config::Settings;
use crate::errors::Result;
use crate::fetcher;

/// Execute the `batch` command.
pub fn execute(settings: &Settings) -> Result<()> {
    let request = fetcher::read_request(io::stdin().lock())?;

    let (identity, vault) = super::build_clients(settings)?;
    let response = fetcher::retrieve_secrets(&request, &identity, &vault)?;

    println!("{}", response.to_json()?);

    Ok(())
}
