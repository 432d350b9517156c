// pokedex-api: Async Rust client for the PokéAPI endpoints behind the Pokédex

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{DEFAULT_BASE_URL, PokeApiClient};
pub use error::Error;
pub use models::{
    FlavorTextEntry, Genus, NamedResource, NamedResourceList, RawAbility, RawPokemon, RawSpecies,
    RawStat, RawType, Sprites,
};
pub use transport::TransportConfig;
