//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;

use crate::config::Settings;
use crate::errors::Result;

/// VaultFetch CLI: fetch Key Vault secrets with Managed Identity.
#[derive(Parser)]
#[command(
    name = "vaultfetch",
    about = "Fetch Azure Key Vault secrets with Managed Identity",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Key Vault base URI (e.g. https://my-vault.vault.azure.net)
    #[arg(long, env = "VAULTFETCH_VAULT_URI", global = true)]
    pub vault_uri: Option<String>,

    /// Key Vault REST api-version (default: 7.3)
    #[arg(long, env = "VAULTFETCH_API_VERSION", global = true)]
    pub api_version: Option<String>,

    /// Resource audience requested for the token
    #[arg(long, env = "VAULTFETCH_RESOURCE", global = true)]
    pub resource: Option<String>,

    /// Managed Identity token endpoint (default: the IMDS endpoint)
    #[arg(long, env = "VAULTFETCH_IDENTITY_ENDPOINT", global = true)]
    pub identity_endpoint: Option<String>,

    /// HTTP timeout in seconds for token and secret requests (default: 10)
    #[arg(long, env = "VAULTFETCH_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Path to a config file (default: vaultfetch.toml in the working directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Write timestamped diagnostics to stderr and a dated log file
    #[arg(long, global = true)]
    pub log: bool,

    /// Directory for dated log files (default: logs)
    #[arg(long, env = "VAULTFETCH_LOG_DIR", global = true)]
    pub log_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Fetch a single secret and print its value
    Get {
        /// Secret name
        name: String,
    },

    /// Read a JSON batch request from stdin and print a JSON response
    ///
    /// Input:  {"secrets": ["name", ...]}
    /// Output: {"name": {"value": ..., "error": ...}, ...}
    Batch,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve effective settings: config file first, CLI flags on top.
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    let explicit = cli.config.as_deref().map(std::path::Path::new);

    let mut settings = Settings::load(&cwd, explicit)?;
    settings.apply_cli(cli);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_batch_with_global_flags() {
        let cli = Cli::try_parse_from([
            "vaultfetch",
            "--vault-uri",
            "https://v.vault.azure.net",
            "--timeout",
            "5",
            "batch",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Batch));
        assert_eq!(cli.vault_uri.as_deref(), Some("https://v.vault.azure.net"));
        assert_eq!(cli.timeout, Some(5));
    }

    #[test]
    fn parses_get_with_name() {
        let cli = Cli::try_parse_from(["vaultfetch", "get", "db-password"]).unwrap();
        match cli.command {
            Commands::Get { name } => assert_eq!(name, "db-password"),
            _ => panic!("expected get subcommand"),
        }
    }

    #[test]
    fn get_requires_a_name() {
        assert!(Cli::try_parse_from(["vaultfetch", "get"]).is_err());
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "vaultfetch",
            "get",
            "k",
            "--vault-uri",
            "https://v.vault.azure.net",
        ])
        .unwrap();
        assert_eq!(cli.vault_uri.as_deref(), Some("https://v.vault.azure.net"));
    }
}
