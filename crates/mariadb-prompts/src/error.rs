//! Error types for resolving prompts by name.
//!
//! Rendering itself is total; these only arise when a caller names a prompt
//! or supplies arguments through an untyped surface (CLI, MCP).

/// Errors from [`crate::PromptKind`] lookup and by-name rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("unknown prompt '{0}'. Available prompts: explain_table, query_tuning")]
    UnknownPrompt(String),

    #[error("prompt '{prompt}' requires argument '{argument}'")]
    MissingArgument {
        prompt: &'static str,
        argument: &'static str,
    },
}
