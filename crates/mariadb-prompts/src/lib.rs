//! Prompt templates for MariaDB analysis tasks.
//!
//! Each template is a fixed Markdown document with placeholder positions that
//! are filled verbatim from caller-supplied strings. Rendering never fails and
//! performs no I/O; the result is handed to an LLM assistant as-is.
//!
//! # Modules
//!
//! - [`table_analysis`] — schema and relationship documentation for one table
//! - [`query_tuning`] — execution plan analysis and tuning for one SQL query
//! - [`catalog`] — prompt names, argument descriptors, and by-name rendering
//! - [`error`] — errors raised when resolving prompts by name
//!
//! Both outer surfaces (`mariadb-mcp` server and CLI) resolve prompts through
//! [`PromptKind`] so they publish the same names and arguments.

pub mod catalog;
pub mod error;
pub mod query_tuning;
pub mod table_analysis;

pub use catalog::{catalog, PromptArgumentSpec, PromptKind, PromptSpec};
pub use error::PromptError;
pub use query_tuning::{render_query_tuning, QueryTuningPrompt};
pub use table_analysis::{render_table_analysis, TableAnalysisPrompt};

/// A fixed template bound to its inputs, ready to render.
pub trait PromptTemplate {
    /// Which catalog entry this template renders.
    fn kind(&self) -> PromptKind;

    /// Substitute the bound inputs into the template.
    fn render(&self) -> String;
}
