use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::errors::{Result, VaultFetchError};

/// Project-level configuration, loaded from `vaultfetch.toml`.
///
/// Every field except the vault URI has a sensible default so VaultFetch
/// works without any config file at all. The vault URI must come from the
/// file, a CLI flag, or the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URI of the Key Vault (e.g. "https://my-vault.vault.azure.net").
    #[serde(default)]
    pub vault_uri: Option<String>,

    /// Key Vault REST api-version.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Resource audience requested for the token.
    #[serde(default = "default_resource")]
    pub resource: String,

    /// Managed Identity token endpoint.
    #[serde(default = "default_identity_endpoint")]
    pub identity_endpoint: String,

    /// HTTP timeout in seconds, applied to both the token and secret calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Directory where dated log files are written when logging is enabled.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_api_version() -> String {
    crate::vault::DEFAULT_API_VERSION.to_string()
}

fn default_resource() -> String {
    crate::identity::DEFAULT_RESOURCE.to_string()
}

fn default_identity_endpoint() -> String {
    crate::identity::DEFAULT_IDENTITY_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_dir() -> String {
    "logs".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_uri: None,
            api_version: default_api_version(),
            resource: default_resource(),
            identity_endpoint: default_identity_endpoint(),
            timeout_secs: default_timeout_secs(),
            log_dir: default_log_dir(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = "vaultfetch.toml";

    /// Load settings from `<project_dir>/vaultfetch.toml`, or from an
    /// explicitly given file.
    ///
    /// Without an explicit file, a missing `vaultfetch.toml` yields
    /// defaults. An explicit `--config` path that cannot be read is an
    /// error, as is any file that cannot be parsed.
    pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(VaultFetchError::ConfigError(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let path = project_dir.join(Self::FILE_NAME);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultFetchError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Overlay CLI flags (and their env-var fallbacks) onto file settings.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(uri) = &cli.vault_uri {
            self.vault_uri = Some(uri.clone());
        }
        if let Some(version) = &cli.api_version {
            self.api_version = version.clone();
        }
        if let Some(resource) = &cli.resource {
            self.resource = resource.clone();
        }
        if let Some(endpoint) = &cli.identity_endpoint {
            self.identity_endpoint = endpoint.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_secs = timeout;
        }
        if let Some(dir) = &cli.log_dir {
            self.log_dir = dir.clone();
        }
    }

    /// The vault URI, or an error telling the user where to set it.
    pub fn require_vault_uri(&self) -> Result<&str> {
        self.vault_uri
            .as_deref()
            .ok_or(VaultFetchError::MissingVaultUri)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the HTTP agent shared by the identity and vault clients.
    pub fn agent(&self) -> ureq::Agent {
        ureq::AgentBuilder::new().timeout(self.timeout()).build()
    }
}

// ── Tests ────────────────────────────────────────────────────────────
