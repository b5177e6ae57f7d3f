use std::fmt;

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

#[derive(Debug)]
pub enum TelemetryError {
    BadLevel { level: String, source: ParseError },
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::BadLevel { level, .. } => {
                write!(f, "'{level}' is not a usable log level or filter directive")
            }
            TelemetryError::AlreadyInstalled(err) => {
                write!(f, "a global subscriber is already set: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::BadLevel { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

/// Install the global tracing subscriber for the binary's lifetime.
/// `RUST_LOG` wins when set; otherwise the configured level applies.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(roster_filter(&config.log_level)?)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

fn roster_filter(configured_level: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(configured_level).map_err(|source| TelemetryError::BadLevel {
        level: configured_level.to_string(),
        source,
    })
}
