//! Command execution logging

use std::time::Duration;

use shiftpulse_domain::ShiftPulseError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"report::generate_report"`).
/// * `elapsed` - Duration the command execution took.
/// * `outcome` - `Ok(())` on success, or the error label on failure.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, outcome: Result<(), &str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match outcome {
        Ok(()) => info!(command, duration_ms, "command_execution_success"),
        Err(error) => warn!(command, duration_ms, error, "command_execution_failure"),
    }
}

/// Convert a `ShiftPulseError` into a stable label suitable for logging.
#[inline]
#[must_use]
pub const fn error_label(error: &ShiftPulseError) -> &'static str {
    match error {
        ShiftPulseError::Config(_) => "config",
        ShiftPulseError::Io(_) => "io",
        ShiftPulseError::Parse(_) => "parse",
        ShiftPulseError::InvalidInput(_) => "invalid_input",
        ShiftPulseError::NotFound(_) => "not_found",
        ShiftPulseError::Internal(_) => "internal",
    }
}

/// Run a command body and log its outcome.
pub fn logged<T, F>(command: &str, body: F) -> shiftpulse_domain::Result<T>
where
    F: FnOnce() -> shiftpulse_domain::Result<T>,
{
    let start = std::time::Instant::now();
    let result = body();
    let outcome = result.as_ref().map(|_| ()).map_err(error_label);
    log_command_execution(command, start.elapsed(), outcome);
    result
}
