//! Logging initialisation
//!
//! Installs a global `tracing` subscriber. `RUST_LOG` takes precedence over
//! the configured level; output goes to stderr so report output on stdout
//! stays machine-readable.

use shiftpulse_domain::{LoggingConfig, Result, ShiftPulseError};
use tracing_subscriber::EnvFilter;

/// Build the event filter: `RUST_LOG` if set and valid, else `level`
///
/// # Errors
/// Returns `ShiftPulseError::Config` if `level` is not a valid filter
/// directive.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level.trim())
        .map_err(|e| ShiftPulseError::Config(format!("Invalid log level '{level}': {e}")))
}

/// Install the global subscriber described by `config`
///
/// # Errors
/// Returns `ShiftPulseError::Config` for an invalid level and
/// `ShiftPulseError::Internal` if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&config.level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };
    installed
        .map_err(|e| ShiftPulseError::Internal(format!("Failed to install logger: {e}")))?;

    tracing::debug!(level = %config.level, json = config.json, "Logging initialised");
    Ok(())
}
