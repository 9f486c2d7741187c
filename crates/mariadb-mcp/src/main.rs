//! MariaDB MCP prompt server
//!
//! Model Context Protocol server publishing prompt templates that guide an
//! LLM assistant through MariaDB table documentation and query tuning. Also
//! lists and renders the same prompts from the command line.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mariadb_mcp::{config, logging};

#[derive(Debug, Parser)]
#[command(name = "mariadb-mcp", version, about, styles = output::clap_styles())]
struct Cli {
    /// Config file (default: ./.mariadb-mcp.toml, then ~/.config/mariadb-mcp.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve prompts over MCP stdio (default)
    Serve,

    /// List available prompts and their arguments
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a prompt to stdout
    Render {
        /// Prompt name (explain_table, query_tuning)
        prompt: String,

        /// Prompt argument as key=value (repeatable)
        #[arg(long = "arg", value_name = "KEY=VALUE")]
        args: Vec<String>,

        /// Read the value of this argument from stdin
        #[arg(long, value_name = "KEY")]
        stdin: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let load = config::load_config(cli.config.as_deref());
    if let Err(e) = logging::init(&load.config) {
        logging::init(&config::McpConfig::default())?;
        tracing::warn!(error = %e, "Invalid log-filter in config, using default");
    }

    match (&load.path, &load.error) {
        (_, Some(e)) => tracing::warn!(error = %e, "Ignoring config file, using defaults"),
        (Some(path), None) => tracing::debug!(?path, "Loaded config"),
        (None, None) => {}
    }

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => return commands::handle_serve_command().await,
        Commands::List { json } => commands::handle_list_command(json),
        Commands::Render {
            prompt,
            args,
            stdin,
        } => commands::handle_render_command(&prompt, &args, stdin.as_deref()),
    };

    if let Err(e) = result {
        output::error(format!("{e:#}"));
        output::hint("Use 'mariadb-mcp list' to see prompts and their arguments.");
        std::process::exit(1);
    }

    Ok(())
}
