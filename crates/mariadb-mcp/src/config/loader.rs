//! Config file discovery and loading for `.mariadb-mcp.toml`.
//!
//! Checks three locations in precedence order:
//! 1. the path given with `--config`
//! 2. `./.mariadb-mcp.toml` (project-local)
//! 3. `~/.config/mariadb-mcp.toml` (user-global)
//!
//! Loading runs before logging is initialized, so failures are returned in
//! [`ConfigLoad`] for the caller to log once a subscriber exists.

use std::path::{Path, PathBuf};

use super::McpConfig;

const CONFIG_FILENAME: &str = ".mariadb-mcp.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "mariadb-mcp.toml";

/// Errors reading or parsing a discovered config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Outcome of config discovery. `config` is always usable.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: McpConfig,
    /// File the config was read from, if any.
    pub path: Option<PathBuf>,
    /// Set when a file was found but could not be used; `config` holds defaults.
    pub error: Option<ConfigError>,
}

/// Load config from `explicit` or the first discovered location, or return defaults.
pub fn load_config(explicit: Option<&Path>) -> ConfigLoad {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(),
    };

    let Some(path) = path else {
        return ConfigLoad {
            config: McpConfig::default(),
            path: None,
            error: None,
        };
    };

    match read_config(&path) {
        Ok(config) => ConfigLoad {
            config,
            path: Some(path),
            error: None,
        },
        Err(e) => ConfigLoad {
            config: McpConfig::default(),
            path: Some(path),
            error: Some(e),
        },
    }
}

/// Read and parse a single config file.
pub fn read_config(path: &Path) -> Result<McpConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Search for config file in precedence order.
fn find_config_file() -> Option<PathBuf> {
    // 1. Project-local: ./.mariadb-mcp.toml
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    // 2. User-global: ~/.config/mariadb-mcp.toml
    if let Some(home) = home_dir() {
        let global = home.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME);
        if global.is_file() {
            return Some(global);
        }
    }

    None
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
