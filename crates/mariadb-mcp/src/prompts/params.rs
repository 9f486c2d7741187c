//! Argument structs for all MCP prompts.

use schemars::JsonSchema;
use serde::Deserialize;

// ── explain_table ──

/// Arguments for the `explain_table` prompt.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExplainTableArgs {
    /// Table to document. Embedded verbatim.
    #[schemars(description = "Name of the table to analyze")]
    pub table_name: String,
}

// ── query_tuning ──

/// Arguments for the `query_tuning` prompt.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct QueryTuningArgs {
    /// Query to analyze. May span multiple lines; embedded verbatim.
    #[schemars(description = "Original SQL query to analyze")]
    pub original_query: String,
}
