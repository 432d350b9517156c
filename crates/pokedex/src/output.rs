//! Rendering for catalog lists and detail cards.
//!
//! Structured formats (JSON, YAML) serialize the domain value itself; table
//! and plain are built from per-command projections.

use std::io::{self, IsTerminal, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::config::OutputContext;
use crate::error::CliError;

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// A rendered command result, ready for [`emit`].
#[derive(Debug, PartialEq, Eq)]
pub enum Rendered {
    Body(String),
    /// Nothing to show; the message goes to stderr.
    Empty(&'static str),
}

/// Render a list of catalog-like entries.
///
/// An empty list in table mode becomes [`Rendered::Empty`] so the user
/// sees `empty` instead of a header-only table. Structured formats still
/// print `[]`, and plain prints nothing.
pub fn render_catalog<T, R>(
    ctx: OutputContext,
    items: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
    empty: &'static str,
) -> Result<Rendered, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    if let Some(body) = structured(ctx.format, items)? {
        return Ok(Rendered::Body(body));
    }
    let body = match ctx.format {
        OutputFormat::Table if items.is_empty() => return Ok(Rendered::Empty(empty)),
        OutputFormat::Table => {
            let rows: Vec<R> = items.iter().map(to_row).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        _ => items.iter().map(id_fn).collect::<Vec<_>>().join("\n"),
    };
    Ok(Rendered::Body(body))
}

/// Render one value: a hand-built card in table mode, `id_fn` in plain mode.
pub fn render_card<T>(
    format: OutputFormat,
    data: &T,
    card_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<Rendered, CliError>
where
    T: serde::Serialize,
{
    if let Some(body) = structured(format, data)? {
        return Ok(Rendered::Body(body));
    }
    let body = match format {
        OutputFormat::Table => card_fn(data),
        _ => id_fn(data),
    };
    Ok(Rendered::Body(body))
}

/// Write a rendered result. Quiet mode suppresses both streams.
pub fn emit(rendered: &Rendered, quiet: bool) {
    if quiet {
        return;
    }
    match rendered {
        Rendered::Body(body) if body.is_empty() => {}
        Rendered::Body(body) => {
            let _ = writeln!(io::stdout().lock(), "{body}");
        }
        Rendered::Empty(message) => {
            let _ = writeln!(io::stderr().lock(), "{message}");
        }
    }
}

fn structured<T: serde::Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
) -> Result<Option<String>, CliError> {
    let body = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(render_err)?,
        OutputFormat::JsonCompact => serde_json::to_string(data).map_err(render_err)?,
        OutputFormat::Yaml => serde_yaml::to_string(data).map_err(render_err)?,
        OutputFormat::Table | OutputFormat::Plain => return Ok(None),
    };
    Ok(Some(body))
}

fn render_err(e: impl std::fmt::Display) -> CliError {
    CliError::Render {
        message: e.to_string(),
    }
}
