//! Server and CLI configuration.
//!
//! Only ambient behavior is configurable (logging). Prompt text is fixed at
//! compile time and has no config surface.

pub mod loader;

pub use loader::{load_config, ConfigError, ConfigLoad};

use serde::Deserialize;

fn default_log_filter() -> String {
    "mariadb_mcp=info".to_string()
}

/// Log output format on stderr.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

/// Configuration loaded from `.mariadb-mcp.toml`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct McpConfig {
    /// `tracing` filter directives used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Log record format. Default: text.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
        }
    }
}
