// ── Domain model ──
//
// Normalized, render-ready view models. Plain immutable data: rebuilt on
// every load, never patched in place.

pub mod catalog;
pub mod detail;

pub use catalog::{Catalog, CatalogItem};
pub use detail::{Ability, DetailViewModel};
