//! MCP ServerHandler implementation for the MariaDB prompt server.
//!
//! Publishes prompts only; the server runs no SQL and holds no connections.
//!
//! - `explain_table` — document a table's schema, relationships and indexes
//! - `query_tuning` — analyze a query's execution plan and propose improvements
//!
//! Each prompt returns a single `user` message whose text is the rendered
//! template from `mariadb-prompts`, byte for byte.

use std::fmt;

use rmcp::handler::server::router::prompt::PromptRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    GetPromptRequestParams, GetPromptResult, Implementation, ListPromptsResult,
    PaginatedRequestParams, PromptMessage, PromptMessageRole, ProtocolVersion,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{prompt, prompt_handler, prompt_router, RoleServer, ServerHandler};

use mariadb_prompts::{PromptKind, PromptTemplate, QueryTuningPrompt, TableAnalysisPrompt};

use crate::prompts::*;

/// MariaDB MCP server handler exposing the prompt catalog.
#[derive(Clone)]
pub struct MariaDbMcpServer {
    prompt_router: PromptRouter<Self>,
}

impl fmt::Debug for MariaDbMcpServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prompts: Vec<&str> = PromptKind::ALL.iter().map(|k| k.name()).collect();
        f.debug_struct("MariaDbMcpServer")
            .field("prompts", &prompts)
            .finish()
    }
}

impl Default for MariaDbMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl MariaDbMcpServer {
    pub fn new() -> Self {
        Self {
            prompt_router: Self::prompt_router(),
        }
    }
}

/// Wrap rendered prompt text as the single user message of a prompt result.
fn user_message(template: &impl PromptTemplate) -> Vec<PromptMessage> {
    vec![PromptMessage::new_text(
        PromptMessageRole::User,
        template.render(),
    )]
}

#[prompt_handler]
impl ServerHandler for MariaDbMcpServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = "Prompt templates for MariaDB/MySQL database analysis. \
             This server provides prompts only; pair it with a database MCP server \
             that offers List_databases and schema/EXPLAIN tools.\n\
             explain_table(table_name): document a table's columns, relationships and key indexes in Markdown.\n\
             query_tuning(original_query): analyze the execution plan, suggest indexes and rewrites, \
             and present an improved query with its expected impact."
            .to_string();

        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_prompts().build(),
            server_info: Implementation {
                name: "mariadb-mcp".to_string(),
                title: Some("MariaDB MCP Prompt Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server publishing MariaDB table analysis and query tuning prompts"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(instructions),
        }
    }
}

#[prompt_router]
impl MariaDbMcpServer {
    /// Document a table's schema, relationships and key indexes as Markdown.
    #[prompt(
        name = "explain_table",
        description = "Document a table's schema, relationships and key indexes as Markdown"
    )]
    pub async fn explain_table(
        &self,
        Parameters(args): Parameters<ExplainTableArgs>,
    ) -> Vec<PromptMessage> {
        tracing::debug!(
            prompt = PromptKind::TableAnalysis.name(),
            table_name_len = args.table_name.len(),
            "Rendering prompt"
        );
        user_message(&TableAnalysisPrompt::new(&args.table_name))
    }

    /// Analyze a query's execution plan and propose an improved query.
    #[prompt(
        name = "query_tuning",
        description = "Analyze a query's execution plan and propose indexes and an improved query"
    )]
    pub async fn query_tuning(
        &self,
        Parameters(args): Parameters<QueryTuningArgs>,
    ) -> Vec<PromptMessage> {
        tracing::debug!(
            prompt = PromptKind::QueryTuning.name(),
            query_len = args.original_query.len(),
            "Rendering prompt"
        );
        user_message(&QueryTuningPrompt::new(&args.original_query))
    }
}
