//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LoggingConfig};

/// Build the level filter: `RUST_LOG` when set, otherwise the configured directive.
///
/// # Errors
/// Returns an error if the configured directive does not parse.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .with_context(|| format!("invalid log level directive '{}'", config.level))
}

/// Install the global tracing subscriber. Output goes to stderr so stdout
/// stays free for command output.
///
/// # Errors
/// Returns an error if the filter is invalid or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(build_filter(config)?);

    match config.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true),
            )
            .try_init(),
    }
    .context("failed to install tracing subscriber")
}
