use thiserror::Error;

/// All errors that can occur in VaultFetch.
#[derive(Debug, Error)]
pub enum VaultFetchError {
    // --- Token errors ---
    #[error("Failed to get access token from Managed Identity: {0}")]
    TokenAcquisition(String),

    // --- Secret errors ---
    #[error("Failed to retrieve secret '{name}': {cause}")]
    SecretFetch { name: String, cause: String },

    // --- Request errors ---
    #[error("Invalid secret request: {0}")]
    InvalidRequest(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    #[error("No vault URI configured — pass --vault-uri, set VAULTFETCH_VAULT_URI, or set vault_uri in vaultfetch.toml")]
    MissingVaultUri,

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for VaultFetch results.
pub type Result<T> = std::result::Result<T, VaultFetchError>;
