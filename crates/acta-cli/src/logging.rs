//! Log subscriber setup.
//!
//! Logs go to stderr so command output on stdout stays machine readable.
//! `ACTA_LOG` takes precedence over the configured level and accepts the
//! usual `EnvFilter` directives (e.g. `acta::session=debug`).

use acta_core::config::{LogFormat, LoggingSettings};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_ENV_VAR: &str = "ACTA_LOG";

pub fn init(settings: &LoggingSettings) -> Result<()> {
    let filter = match std::env::var(LOG_ENV_VAR) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid {LOG_ENV_VAR} directives"))?,
        _ => EnvFilter::try_new(&settings.level)
            .with_context(|| format!("Invalid log level '{}'", settings.level))?,
    };

    match settings.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .with_target(true),
            )
            .with(filter)
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init(),
    }
    .context("Failed to initialize logging")
}
