// ── Runtime loader configuration ──
//
// Describes *where* to fetch from and *how much*. Never touches disk:
// the config crate / CLI builds a `DexConfig` and hands it in.

use std::time::Duration;

use url::Url;

use crate::convert::DEFAULT_LOCALE;

pub use pokedex_api::DEFAULT_BASE_URL;

/// Number of entries in the reference catalog (the original 151).
pub const DEFAULT_LIMIT: u32 = 151;

#[derive(Debug, Clone)]
pub struct DexConfig {
    /// API root, e.g. `https://pokeapi.co/api/v2/`.
    pub base_url: Url,
    /// Catalog size requested from the index endpoint.
    pub limit: u32,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Language code used to pick flavor text and genus.
    pub locale: String,
}

impl DexConfig {
    /// Reference catalog settings against `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            limit: DEFAULT_LIMIT,
            timeout: None,
            locale: DEFAULT_LOCALE.to_owned(),
        }
    }
}
