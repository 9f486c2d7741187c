//! MariaDB MCP prompt server library.
//!
//! Provides the [`server::MariaDbMcpServer`] MCP handler, its prompt argument
//! types, and the config and logging setup shared by the `mariadb-mcp` binary
//! and integration tests.

pub mod config;
pub mod logging;
pub mod prompts;
pub mod server;
