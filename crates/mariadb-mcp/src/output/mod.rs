//! Styled terminal output for `mariadb-mcp` subcommands.
//!
//! Text is formatted with styles first and written through [`styled`], where
//! `anstream` strips ANSI codes when stdout is not a terminal, so piped
//! output stays plain. Rendered prompts and JSON are written with [`raw`].

mod styles;

use std::io::Write;

pub(crate) use styles::clap_styles;

use styles::{DIM, ERROR, HEADER, NAME};

/// Print an error message to stderr (red X prefix).
pub(crate) fn error(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

/// Format a section header (bold).
pub(crate) fn header_line(msg: impl std::fmt::Display) -> String {
    format!("{HEADER}{msg}{HEADER:#}\n")
}

/// Format a named entry with a dimmed description: `  name  description`.
pub(crate) fn entry_line(
    indent: usize,
    name: impl std::fmt::Display,
    desc: impl std::fmt::Display,
) -> String {
    format!("{:indent$}{NAME}{name}{NAME:#}  {DIM}{desc}{DIM:#}\n", "")
}

/// Print a hint to stderr (dimmed).
pub(crate) fn hint(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{DIM}{msg}{DIM:#}").ok();
}

/// Write styled text to stdout, dropping the styling when stdout is not a
/// terminal.
pub(crate) fn styled(text: &str) -> std::io::Result<()> {
    let mut out = anstream::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Write text to stdout exactly as given: no styling, no trailing newline.
pub(crate) fn raw(text: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()
}
