//! Run the MCP server over stdio.

use rmcp::ServiceExt;

use mariadb_mcp::server::MariaDbMcpServer;

pub(crate) async fn handle_serve_command() -> anyhow::Result<()> {
    tracing::info!("mariadb-mcp starting (stdio transport)");

    let server = MariaDbMcpServer::new();
    let transport = rmcp::transport::io::stdio();

    let service = server.serve(transport).await?;
    let reason = service.waiting().await?;

    tracing::info!(?reason, "mariadb-mcp stopped");
    Ok(())
}
