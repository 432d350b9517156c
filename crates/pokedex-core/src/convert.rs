// ── API-to-view-model conversions ──
//
// Pure projections from raw `pokedex_api` response types into the
// render-ready `model` types. Absence in the source stays absence in the
// output: no default sprites, no empty-string placeholders.

use indexmap::IndexMap;

use pokedex_api::{FlavorTextEntry, Genus, RawPokemon, RawSpecies};

use crate::model::{Ability, CatalogItem, DetailViewModel};

/// Language code the detail screen reads flavor text and genus in.
pub const DEFAULT_LOCALE: &str = "en";

// ── Helpers ────────────────────────────────────────────────────────

/// Type names in API order (primary first).
fn type_names(raw: &RawPokemon) -> Vec<String> {
    raw.types.iter().map(|t| t.kind.name.clone()).collect()
}

fn sprite(raw: &RawPokemon) -> Option<String> {
    raw.sprites.official_artwork().map(str::to_owned)
}

/// Stat name -> base value. Tolerates missing or extra stats; a repeated
/// name keeps its first position and the last value.
fn stat_map(raw: &RawPokemon) -> IndexMap<String, u32> {
    raw.stats
        .iter()
        .map(|s| (s.stat.name.clone(), s.base_stat))
        .collect()
}

fn flavor_text_in<'a>(entries: &'a [FlavorTextEntry], locale: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|e| e.language.name == locale)
        .map(|e| e.flavor_text.as_str())
}

fn genus_in<'a>(genera: &'a [Genus], locale: &str) -> Option<&'a str> {
    genera
        .iter()
        .find(|g| g.language.name == locale)
        .map(|g| g.genus.as_str())
}

/// Replace each form feed and newline with a single space.
///
/// Game flavor text is hard-wrapped for in-game text boxes; this only
/// affects layout, never meaning.
pub fn clean_flavor_text(text: &str) -> String {
    text.replace(['\u{000C}', '\n'], " ")
}

// ── Catalog ────────────────────────────────────────────────────────

pub fn normalize_catalog_item(raw: &RawPokemon) -> CatalogItem {
    CatalogItem {
        id: raw.id,
        name: raw.name.clone(),
        types: type_names(raw),
        sprite: sprite(raw),
    }
}

impl From<&RawPokemon> for CatalogItem {
    fn from(raw: &RawPokemon) -> Self {
        normalize_catalog_item(raw)
    }
}

// ── Detail ─────────────────────────────────────────────────────────

/// Merge a Pokémon and its (optional) species record, reading localized
/// fields in [`DEFAULT_LOCALE`].
pub fn normalize_detail(raw: &RawPokemon, species: Option<&RawSpecies>) -> DetailViewModel {
    normalize_detail_for_locale(raw, species, DEFAULT_LOCALE)
}

pub fn normalize_detail_for_locale(
    raw: &RawPokemon,
    species: Option<&RawSpecies>,
    locale: &str,
) -> DetailViewModel {
    let flavor_text = species
        .and_then(|s| flavor_text_in(&s.flavor_text_entries, locale))
        .map(clean_flavor_text);
    let genus = species
        .and_then(|s| genus_in(&s.genera, locale))
        .map(str::to_owned);

    DetailViewModel {
        id: raw.id,
        name: raw.name.clone(),
        height: raw.height,
        weight: raw.weight,
        types: type_names(raw),
        stats: stat_map(raw),
        abilities: raw
            .abilities
            .iter()
            .map(|a| Ability {
                name: a.ability.name.clone(),
                is_hidden: a.is_hidden,
            })
            .collect(),
        sprite: sprite(raw),
        flavor_text,
        genus,
    }
}
