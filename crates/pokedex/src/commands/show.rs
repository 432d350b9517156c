//! Detail view handler.

use std::fmt::Write as _;

use pokedex_core::{DetailViewModel, Pokedex};

use crate::cli::ShowArgs;
use crate::config::OutputContext;
use crate::error::CliError;
use crate::format;
use crate::output;

const STAT_BAR_WIDTH: u32 = 24;

pub async fn handle(dex: &Pokedex, args: ShowArgs, ctx: OutputContext) -> Result<(), CliError> {
    let detail = dex.load_detail(&args.id.to_lowercase()).await?;

    let out = output::render_card(
        ctx.format,
        &detail,
        |d| render_detail(d, ctx.color),
        |d| d.name.clone(),
    )?;
    output::emit(&out, ctx.quiet);
    Ok(())
}

/// Human-readable detail card.
fn render_detail(d: &DetailViewModel, color: bool) -> String {
    let primary = d.primary_type().unwrap_or("normal");
    let mut out = String::new();

    let title = format!("{} {}", format::format_id(d.id), format::capitalize_first(&d.name));
    let _ = write!(out, "{}", format::paint(&title, primary, color));
    if let Some(ref genus) = d.genus {
        let _ = write!(out, "  {genus}");
    }
    out.push('\n');

    let _ = writeln!(out, "Types:   {}", format::type_list(&d.types, color));
    let _ = writeln!(out, "Height:  {:.1} m", d.height_metres());
    let _ = writeln!(out, "Weight:  {:.1} kg", d.weight_kilograms());
    if let Some(ref sprite) = d.sprite {
        let _ = writeln!(out, "Artwork: {sprite}");
    }

    if let Some(ref text) = d.flavor_text {
        let _ = writeln!(out, "\n{text}");
    }

    if !d.stats.is_empty() {
        let _ = writeln!(out, "\nBase Stats");
        for (name, value) in &d.stats {
            let bar = format::stat_bar(*value, STAT_BAR_WIDTH);
            let _ = writeln!(
                out,
                "  {:>8} {:>3} {}",
                format::stat_label(name),
                value,
                format::paint(&bar, primary, color)
            );
        }
    }

    if !d.abilities.is_empty() {
        let _ = writeln!(out, "\nAbilities");
        for ability in &d.abilities {
            let hidden = if ability.is_hidden { " (Hidden)" } else { "" };
            let _ = writeln!(out, "  • {}{hidden}", format::ability_label(&ability.name));
        }
    }

    out.trim_end().to_owned()
}
