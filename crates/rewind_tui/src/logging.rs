//! Tracing setup.
//!
//! Output goes to a file so it never draws over the terminal UI.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to `log_file`.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_tracing(log_file: &Path, default_filter: &str) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(log_file = %log_file.display(), "Tracing initialized");
    Ok(())
}
