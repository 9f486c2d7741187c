//! `list`: show the prompt catalog.

use mariadb_prompts::catalog;

use crate::output;

pub(crate) fn handle_list_command(json: bool) -> anyhow::Result<()> {
    let text = list_output(json)?;
    if json {
        output::raw(&text)?;
    } else {
        output::styled(&text)?;
    }
    Ok(())
}

/// The catalog as pretty JSON, or as a styled listing of prompts with their
/// arguments indented beneath them.
fn list_output(json: bool) -> anyhow::Result<String> {
    let specs = catalog();

    if json {
        let mut text = serde_json::to_string_pretty(&specs)?;
        text.push('\n');
        return Ok(text);
    }

    let mut text = output::header_line("Available prompts:");
    text.push('\n');
    for spec in &specs {
        text.push_str(&output::entry_line(2, spec.name, spec.description));
        for arg in spec.arguments {
            let required = if arg.required { "required" } else { "optional" };
            text.push_str(&output::entry_line(
                6,
                arg.name,
                format!("{} ({required})", arg.description),
            ));
        }
    }
    text.push('\n');

    Ok(text)
}
