// Async HTTP client for the PokéAPI v2 REST endpoints.
//
// Read-only: every call is a single GET + JSON decode. No auth, no retries,
// no caching; each call goes to the network.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{NamedResourceList, RawPokemon, RawSpecies};
use crate::transport::TransportConfig;

/// Public PokéAPI root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Longest body excerpt carried in error messages.
const BODY_PREVIEW_LEN: usize = 200;

/// Async client for the PokéAPI.
///
/// Cheap to clone: the inner `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PokeApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(http, base_url)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Ensure the base path ends with `/` so relative joins append instead of replace.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// The API root every relative path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── Request primitive ────────────────────────────────────────────

    /// GET `url` and decode the JSON body into `T`.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
                message: preview(&body).to_owned(),
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// `GET pokemon?limit={limit}`: the name/URL index.
    pub async fn list_pokemon(&self, limit: u32) -> Result<NamedResourceList, Error> {
        let mut url = self.url("pokemon")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        self.fetch_json(url).await
    }

    /// Fetch a Pokémon from the detail URL carried by an index entry.
    pub async fn get_pokemon_by_url(&self, url: &str) -> Result<RawPokemon, Error> {
        self.fetch_json(Url::parse(url)?).await
    }

    /// `GET pokemon/{id}`.
    pub async fn get_pokemon(&self, id: &str) -> Result<RawPokemon, Error> {
        self.fetch_json(self.url(&format!("pokemon/{id}"))?).await
    }

    /// `GET pokemon-species/{id}`.
    pub async fn get_species(&self, id: &str) -> Result<RawSpecies, Error> {
        self.fetch_json(self.url(&format!("pokemon-species/{id}"))?)
            .await
    }
}

/// First few hundred bytes of a body, cut on a char boundary.
fn preview(body: &str) -> &str {
    if body.len() <= BODY_PREVIEW_LEN {
        return body;
    }
    let mut end = BODY_PREVIEW_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
