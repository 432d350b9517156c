// ── Pokédex facade ──
//
// Catalog and detail loaders over one shared API client. All fetches of a
// load run as futures on the caller's task: fan-out is concurrent, not
// parallel, and nothing is spawned.

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{debug, info, warn};

use pokedex_api::{PokeApiClient, TransportConfig};

use crate::config::DexConfig;
use crate::convert::{normalize_catalog_item, normalize_detail_for_locale};
use crate::error::CoreError;
use crate::model::{Catalog, CatalogItem, DetailViewModel};
use crate::store::CatalogStore;

/// Entry point for consumers.
///
/// Cheaply cloneable via `Arc<PokedexInner>`.
#[derive(Clone)]
pub struct Pokedex {
    inner: Arc<PokedexInner>,
}

struct PokedexInner {
    config: DexConfig,
    client: PokeApiClient,
    store: CatalogStore,
}

impl Pokedex {
    /// Build a Pokédex with its own HTTP client.
    pub fn new(config: DexConfig) -> Result<Self, CoreError> {
        let mut transport = TransportConfig::default();
        if let Some(timeout) = config.timeout {
            transport = transport.with_timeout(timeout);
        }
        let client = PokeApiClient::new(config.base_url.as_str(), &transport)?;
        Ok(Self::with_client(config, client))
    }

    /// Build a Pokédex around an existing client.
    pub fn with_client(config: DexConfig, client: PokeApiClient) -> Self {
        Self {
            inner: Arc::new(PokedexInner {
                config,
                client,
                store: CatalogStore::new(),
            }),
        }
    }

    pub fn config(&self) -> &DexConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &CatalogStore {
        &self.inner.store
    }

    /// Last catalog committed through [`refresh()`](Self::refresh).
    pub fn catalog_snapshot(&self) -> Arc<Catalog> {
        self.inner.store.snapshot()
    }

    // ── Catalog ──────────────────────────────────────────────────────

    /// Fetch the index, then every entry's details, as one snapshot.
    ///
    /// All detail fetches are issued together and awaited together. A single
    /// failure fails the whole load; no partial catalog is ever returned.
    /// Output follows index order regardless of completion order.
    pub async fn load_catalog(&self, limit: u32) -> Result<Catalog, CoreError> {
        if limit == 0 {
            return Err(CoreError::Config {
                message: "catalog limit must be at least 1".into(),
            });
        }

        info!(limit, "loading catalog");
        let client = &self.inner.client;

        let index = client
            .list_pokemon(limit)
            .await
            .map_err(CoreError::index_fetch)?;

        let mut entries = index.results;
        let max = usize::try_from(limit).unwrap_or(usize::MAX);
        if entries.len() > max {
            warn!(
                received = entries.len(),
                limit, "index returned more entries than requested, truncating"
            );
            entries.truncate(max);
        }

        debug!(count = entries.len(), "fetching details");
        let details = try_join_all(entries.iter().map(|entry| async move {
            client
                .get_pokemon_by_url(&entry.url)
                .await
                .map_err(|e| CoreError::detail_fetch(&entry.url, e))
        }))
        .await?;

        let catalog = dedupe_by_id(details.iter().map(normalize_catalog_item));
        info!(count = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Run a tagged catalog load and commit it to the store.
    ///
    /// Only the newest load may commit: an older load finishing late yields
    /// [`CoreError::Superseded`] and leaves the store untouched. On failure
    /// the previously committed catalog stays in place; callers decide
    /// whether to keep showing it.
    pub async fn refresh(&self) -> Result<Arc<Catalog>, CoreError> {
        let store = &self.inner.store;
        let token = store.begin();

        match self.load_catalog(self.inner.config.limit).await {
            Ok(catalog) => {
                if store.commit(token, catalog) {
                    Ok(store.snapshot())
                } else {
                    Err(CoreError::Superseded)
                }
            }
            Err(e) => {
                warn!(error = %e, "catalog refresh failed, keeping previous snapshot");
                store.fail(token, e.to_string());
                Err(e)
            }
        }
    }

    // ── Detail ───────────────────────────────────────────────────────

    /// Fetch one Pokémon and its species record concurrently and merge them.
    ///
    /// `id` is a Pokédex number or name. The entity leg is required; a
    /// species failure only leaves flavor text and genus absent.
    pub async fn load_detail(&self, id: &str) -> Result<DetailViewModel, CoreError> {
        info!(id, "loading detail");
        let client = &self.inner.client;

        let (pokemon, species) = tokio::join!(client.get_pokemon(id), client.get_species(id));

        let pokemon = pokemon.map_err(|e| CoreError::entity_fetch(id, e))?;
        let species = match species {
            Ok(species) => Some(species),
            Err(e) => {
                warn!(id, error = %e, "species fetch failed, flavor text and genus unavailable");
                None
            }
        };

        Ok(normalize_detail_for_locale(
            &pokemon,
            species.as_ref(),
            &self.inner.config.locale,
        ))
    }
}

/// Keep the first item per id, preserving order.
fn dedupe_by_id(items: impl Iterator<Item = CatalogItem>) -> Catalog {
    let mut seen = HashSet::new();
    items
        .filter(|item| {
            let fresh = seen.insert(item.id);
            if !fresh {
                warn!(id = item.id, name = %item.name, "duplicate id in index, skipping");
            }
            fresh
        })
        .collect()
}
