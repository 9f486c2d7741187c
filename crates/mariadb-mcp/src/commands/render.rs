//! `render`: print a rendered prompt to stdout.
//!
//! Output is the template text exactly, so it can be piped straight into
//! another tool or diffed against what the MCP server returns.

use std::collections::HashMap;
use std::io::Read;

use anyhow::{bail, Context};

use mariadb_prompts::PromptKind;

use crate::output;

pub(crate) fn handle_render_command(
    prompt: &str,
    args: &[String],
    stdin_arg: Option<&str>,
) -> anyhow::Result<()> {
    let rendered = render_prompt(prompt, args, stdin_arg, std::io::stdin().lock())?;
    output::raw(&rendered)?;
    Ok(())
}

/// Resolve `prompt`, gather its arguments and render it.
///
/// When `stdin_arg` is set, that argument's value is read in full from
/// `stdin`, which lets multi-line queries be piped in.
pub(crate) fn render_prompt(
    prompt: &str,
    args: &[String],
    stdin_arg: Option<&str>,
    mut stdin: impl Read,
) -> anyhow::Result<String> {
    let kind: PromptKind = prompt.parse()?;
    let mut arguments = parse_args(args)?;

    if let Some(key) = stdin_arg {
        if arguments.contains_key(key) {
            bail!("argument '{key}' given both with --arg and --stdin");
        }
        let mut value = String::new();
        stdin
            .read_to_string(&mut value)
            .with_context(|| format!("failed to read '{key}' from stdin"))?;
        arguments.insert(key.to_string(), value);
    }

    for key in arguments.keys() {
        if !kind.arguments().iter().any(|a| a.name == key.as_str()) {
            tracing::warn!(prompt = kind.name(), argument = %key, "Ignoring unknown argument");
        }
    }

    tracing::debug!(prompt = kind.name(), "Rendering prompt");
    Ok(kind.render_with(&arguments)?)
}

/// Parse `key=value` pairs. Values may contain `=`; only the first splits.
fn parse_args(args: &[String]) -> anyhow::Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .with_context(|| format!("invalid argument format: '{arg}'. Expected key=value"))?;
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}
