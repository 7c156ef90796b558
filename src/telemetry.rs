//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingSettings};
use crate::error::{Error, Result};

/// Build the filter for `settings`, letting `RUST_LOG` take precedence
pub fn env_filter(settings: &LoggingSettings) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| Error::Telemetry(e.to_string()))
}

/// Install the global tracing subscriber
///
/// Fails if a global subscriber is already installed.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings)?)
        .with_writer(std::io::stderr);

    let installed = match settings.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| Error::Telemetry(e.to_string()))
}
