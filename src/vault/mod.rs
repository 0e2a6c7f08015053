//! Vault module — secret retrieval over the Key Vault REST API.
//!
//! This module provides:
//! - Request/response types for the batch protocol (`types`)
//! - The HTTP client that fetches individual secrets (`client`)

pub mod client;
pub mod types;

// Re-export the most commonly used items.
pub use client::{VaultClient, DEFAULT_API_VERSION};
pub use types::{SecretRequest, SecretResponse, SecretResult, UNABLE_TO_RETRIEVE};
