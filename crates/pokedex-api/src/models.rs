// ── PokéAPI wire types ──
//
// Raw response shapes exactly as the API returns them. Only the fields the
// Pokédex reads are modelled; everything else is ignored on decode.

use serde::Deserialize;

// ── Index ────────────────────────────────────────────────────────────

/// `GET pokemon?limit=N` response.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResourceList {
    pub results: Vec<NamedResource>,
}

/// A `{name, url}` pointer to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

// ── Pokémon ──────────────────────────────────────────────────────────

/// `GET pokemon/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    #[serde(default)]
    pub height: u32,
    /// Hectograms.
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<RawType>,
    #[serde(default)]
    pub stats: Vec<RawStat>,
    #[serde(default)]
    pub abilities: Vec<RawAbility>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAbility {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

/// Sprite URLs. Every level may be missing or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Sprites {
    /// The official-artwork front view, if the API has one.
    pub fn official_artwork(&self) -> Option<&str> {
        self.other
            .as_ref()?
            .official_artwork
            .as_ref()?
            .front_default
            .as_deref()
    }
}

// ── Species ──────────────────────────────────────────────────────────

/// `GET pokemon-species/{id}` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSpecies {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub genera: Vec<Genus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}
