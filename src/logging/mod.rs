//! Optional diagnostic logging.
//!
//! When enabled, timestamped leveled lines go to stderr and to a dated
//! file under the configured log directory. Logging is observational
//! only: it never touches stdout and never changes what the commands do.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::errors::{Result, VaultFetchError};

/// Install the global subscriber: stderr plus `<dir>/vaultfetch-YYYY-MM-DD.log`.
///
/// `RUST_LOG` overrides the default `info` filter. Returns the log file
/// path. Calling this twice is an error (the subscriber is process-global).
pub fn init(log_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)?;

    let file_name = format!("vaultfetch-{}.log", Local::now().format("%Y-%m-%d"));
    let path = log_dir.join(file_name);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| VaultFetchError::CommandFailed(format!("logging init: {e}")))?;

    info!(log_file = %path.display(), "diagnostic logging enabled");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_creates_a_dated_log_file() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("logs");

        let path = init(&dir).unwrap();

        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("vaultfetch-"));
        assert!(name.ends_with(".log"));

        // The subscriber is global; a second init in the same process fails.
        assert!(init(&dir).is_err());
    }
}
