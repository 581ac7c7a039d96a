//! Structured logging helpers for command wrappers

use std::time::Duration;

use buidlmatch_domain::BuidlMatchError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"profile::create_profile"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the command wrappers concise and the log shape
/// consistent. Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `BuidlMatchError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &BuidlMatchError) -> &'static str {
    match error {
        BuidlMatchError::Database(_) => "database",
        BuidlMatchError::Config(_) => "config",
        BuidlMatchError::Serialization(_) => "serialization",
        BuidlMatchError::NotFound(_) => "not_found",
        BuidlMatchError::InvalidInput(_) => "invalid_input",
        BuidlMatchError::Internal(_) => "internal",
    }
}
