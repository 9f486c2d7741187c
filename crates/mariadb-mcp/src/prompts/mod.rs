//! MCP prompt argument types.
//!
//! All argument structs derive `Deserialize + JsonSchema`; rmcp turns each
//! schema property into a prompt argument, so field names are the wire names.

pub mod params;

pub use params::*;
