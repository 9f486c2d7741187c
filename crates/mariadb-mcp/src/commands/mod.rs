//! Subcommand handlers for the `mariadb-mcp` binary.

pub(crate) mod list;
pub(crate) mod render;
pub(crate) mod serve;

pub(crate) use list::handle_list_command;
pub(crate) use render::handle_render_command;
pub(crate) use serve::handle_serve_command;
