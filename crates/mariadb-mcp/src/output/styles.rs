//! Style constants and clap help styling.

use anstyle::{AnsiColor, Color, Effects, Style};

/// Red — errors.
pub(crate) const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Bold — section headers.
pub(crate) const HEADER: Style = Style::new().effects(Effects::BOLD);

/// Cyan — prompt and argument names.
pub(crate) const NAME: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

/// Dimmed — descriptions and hints.
pub(crate) const DIM: Style = Style::new().effects(Effects::DIMMED);

const ACCENT: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Green)))
    .effects(Effects::BOLD);

/// Help output styles, matching the palette above.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(ACCENT)
        .usage(ACCENT)
        .literal(NAME)
        .placeholder(NAME)
        .error(ERROR.effects(Effects::BOLD))
        .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
}
