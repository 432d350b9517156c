// ── Catalog snapshot store ──
//
// Holds the last committed catalog and the presentation-facing load status.
// Every load is tagged with a `LoadToken`; only the newest token may commit,
// so an older in-flight load finishing late never overwrites newer data.

mod token;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use crate::model::Catalog;

pub use token::LoadToken;

/// Transient screen status, observable by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    /// First load, nothing to show yet.
    Loading,
    /// Reload while a previous catalog is still displayed.
    Refreshing,
    /// The latest load failed. The previous catalog (if any) is kept.
    Error(String),
}

pub struct CatalogStore {
    generation: AtomicU64,
    has_catalog: AtomicBool,
    catalog: watch::Sender<Arc<Catalog>>,
    status: watch::Sender<LoadStatus>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        let (catalog, _) = watch::channel(Arc::new(Catalog::default()));
        let (status, _) = watch::channel(LoadStatus::Idle);

        Self {
            generation: AtomicU64::new(0),
            has_catalog: AtomicBool::new(false),
            catalog,
            status,
        }
    }

    /// Issue a token for a new load. Any earlier token becomes stale.
    pub fn begin(&self) -> LoadToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let status = if self.has_catalog.load(Ordering::SeqCst) {
            LoadStatus::Refreshing
        } else {
            LoadStatus::Loading
        };
        self.status.send_replace(status);
        debug!(generation, "catalog load started");
        LoadToken::new(generation)
    }

    /// Whether `token` is still the newest issued.
    pub fn is_current(&self, token: LoadToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.generation()
    }

    /// Replace the snapshot with `catalog` if `token` is current.
    ///
    /// Returns `false` (and drops `catalog`) when a newer load was issued.
    pub fn commit(&self, token: LoadToken, catalog: Catalog) -> bool {
        let committed = self.catalog.send_if_modified(|snap| {
            if !self.is_current(token) {
                return false;
            }
            *snap = Arc::new(catalog);
            true
        });

        if committed {
            self.has_catalog.store(true, Ordering::SeqCst);
            self.status.send_replace(LoadStatus::Idle);
            debug!(generation = token.generation(), "catalog committed");
        } else {
            debug!(
                generation = token.generation(),
                "discarding stale catalog load"
            );
        }
        committed
    }

    /// Record a failed load. The previous snapshot stays in place.
    ///
    /// Returns `false` when `token` is stale; a newer load owns the status.
    pub fn fail(&self, token: LoadToken, message: impl Into<String>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.status.send_replace(LoadStatus::Error(message.into()));
        true
    }

    /// Latest committed catalog (empty before the first commit).
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.catalog.borrow().clone()
    }

    pub fn has_catalog(&self) -> bool {
        self.has_catalog.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Catalog>> {
        self.catalog.subscribe()
    }

    pub fn status(&self) -> LoadStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<LoadStatus> {
        self.status.subscribe()
    }
}
