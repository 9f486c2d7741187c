//! `tracing` subscriber setup.
//!
//! Records always go to stderr: stdout carries the MCP stdio stream when
//! serving and the rendered prompt when running `render`.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, McpConfig};

/// Build the filter: `RUST_LOG` when set, otherwise the configured directives.
///
/// A `RUST_LOG` that fails to parse falls back to the configured directives;
/// its parse error is returned alongside so it can be reported once the
/// subscriber is up.
pub fn env_filter(config: &McpConfig) -> anyhow::Result<(EnvFilter, Option<ParseError>)> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(rust_log.as_deref(), &config.log_filter)
}

fn build_filter(
    rust_log: Option<&str>,
    config_filter: &str,
) -> anyhow::Result<(EnvFilter, Option<ParseError>)> {
    let rejected = match rust_log.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(filter) => return Ok((filter, None)),
            Err(e) => Some(e),
        },
        None => None,
    };

    Ok((EnvFilter::try_new(config_filter)?, rejected))
}

/// Install the global subscriber. Call once, before any other output.
pub fn init(config: &McpConfig) -> anyhow::Result<()> {
    let (filter, rejected) = env_filter(config)?;

    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }

    if let Some(e) = rejected {
        tracing::warn!(error = %e, "Invalid RUST_LOG, using log-filter from config");
    }

    Ok(())
}
