//! Diagnostic logging.
//!
//! Events go to stderr so they never mix with the confirmation on stdout.
//! The filter comes from the `-v` count only.

use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::error::TodoError;

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns `TodoError::Config` if the filter is invalid or a subscriber is
/// already installed.
pub fn init(settings: &Settings) -> Result<(), TodoError> {
    let filter = EnvFilter::try_new(settings.log_level())
        .map_err(|e| TodoError::Config(format!("Invalid log filter: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(settings.color_enabled())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| TodoError::Config(format!("Failed to initialize logging: {e}")))
}
