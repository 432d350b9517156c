// ── Detail view model ──

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

/// Everything the detail screen renders for one Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailViewModel {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub types: Vec<String>,
    /// Stat name (e.g. `"special-attack"`) to base value, in API order.
    pub stats: IndexMap<String, u32>,
    pub abilities: Vec<Ability>,
    pub sprite: Option<String>,
    /// Absent when the species leg failed or has no entry in the locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genus: Option<String>,
}

impl DetailViewModel {
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    pub fn height_metres(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kilograms(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }
}
