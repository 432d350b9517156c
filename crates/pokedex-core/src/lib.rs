//! Data aggregation and view-model layer between `pokedex-api` and the CLI.
//!
//! - **[`Pokedex`]**: Facade owning the API client and the catalog store.
//!   [`load_catalog()`](Pokedex::load_catalog) fetches the index and fans out
//!   one detail fetch per entry (all-or-nothing);
//!   [`load_detail()`](Pokedex::load_detail) joins a Pokémon with its species
//!   record, tolerating a missing species leg;
//!   [`refresh()`](Pokedex::refresh) runs a tagged catalog load through the
//!   [`CatalogStore`] so only the newest request is committed.
//!
//! - **Normalizer** ([`convert`]): Pure projections from raw API shapes into
//!   [`CatalogItem`] and [`DetailViewModel`].
//!
//! - **Search** ([`search::filter`]): Case-insensitive substring filter over a
//!   [`Catalog`] snapshot.

pub mod config;
pub mod convert;
pub mod error;
pub mod loader;
pub mod model;
pub mod search;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::DexConfig;
pub use error::CoreError;
pub use loader::Pokedex;
pub use model::{Ability, Catalog, CatalogItem, DetailViewModel};
pub use store::{CatalogStore, LoadStatus, LoadToken};
