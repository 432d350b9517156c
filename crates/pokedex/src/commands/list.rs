//! Catalog list handler.

use tabled::Tabled;

use pokedex_core::{CatalogItem, Pokedex, search};

use crate::cli::ListArgs;
use crate::config::OutputContext;
use crate::error::CliError;
use crate::format;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "#")]
    number: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Types")]
    types: String,
}

impl CatalogRow {
    fn new(item: &CatalogItem, color: bool) -> Self {
        Self {
            number: format::format_id(item.id),
            name: format::capitalize_first(&item.name),
            types: format::type_list(&item.types, color),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(dex: &Pokedex, args: ListArgs, ctx: OutputContext) -> Result<(), CliError> {
    let catalog = dex.refresh().await?;
    let shown = search::filter(&catalog, args.search.as_deref().unwrap_or(""));
    tracing::debug!(total = catalog.len(), shown = shown.len(), "catalog filtered");

    let out = output::render_catalog(
        ctx,
        shown.items(),
        |item| CatalogRow::new(item, ctx.color),
        |item| item.name.clone(),
        "No Pokémon found",
    )?;
    output::emit(&out, ctx.quiet);
    Ok(())
}
