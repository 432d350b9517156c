// ── Client-side catalog search ──

use crate::model::Catalog;

/// Items whose name contains `query`, ignoring case, in catalog order.
///
/// An empty query returns the catalog unchanged. The query is not trimmed:
/// `" "` only matches names with a literal space.
pub fn filter(catalog: &Catalog, query: &str) -> Catalog {
    if query.is_empty() {
        return catalog.clone();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
