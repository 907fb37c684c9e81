//! Logging service

use crate::models::LogLevel;
use crate::transport::TransportKind;

/// Filter directive covering the CLI binary and the core library
fn filter_for(level: LogLevel) -> String {
    format!(
        "freightline={level},freightline_core={level}",
        level = level.as_str()
    )
}

/// Initialize logging with the specified level
///
/// Fails instead of panicking when a global subscriber is already installed.
pub fn init_logging(level: LogLevel) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok(())
}

/// Log a completed delivery
///
/// Debug level: the description is already the command's output.
pub fn log_delivery(kind: TransportKind, description: &str) {
    tracing::debug!(kind = %kind, description = description, "Cargo delivered");
}

/// Log a system error
pub fn log_error(error: &str, context: Option<&str>) {
    tracing::error!(
        error = error,
        context = context.unwrap_or(""),
        "System error occurred"
    );
}
