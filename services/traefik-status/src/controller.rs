//! Refresh controller: serves cached snapshots and refetches when stale

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::{SnapshotCache, StatusSnapshot};
use crate::classifier::classify;
use crate::clock::Clock;
use crate::fetcher::HealthFetcher;
use crate::registry::Registry;

/// Answers snapshot queries, refreshing the cache on demand.
///
/// The staleness check, the fetch and the cache replacement all happen while
/// holding the cache lock, so concurrent callers on a stale cache share one
/// fetch: the first does the work and the rest see its result as a hit.
#[derive(Debug)]
pub struct RefreshController {
    registry: Registry,
    fetcher: HealthFetcher,
    clock: Arc<dyn Clock>,
    cache: Mutex<SnapshotCache>,
}

impl RefreshController {
    pub fn new(registry: Registry, fetcher: HealthFetcher, clock: Arc<dyn Clock>) -> Self {
        let cache = SnapshotCache::new(&registry);
        Self::with_cache(registry, fetcher, clock, cache)
    }

    pub fn with_cache(
        registry: Registry,
        fetcher: HealthFetcher,
        clock: Arc<dyn Clock>,
        cache: SnapshotCache,
    ) -> Self {
        Self {
            registry,
            fetcher,
            clock,
            cache: Mutex::new(cache),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Current snapshot as of the injected clock
    pub async fn snapshot(&self) -> StatusSnapshot {
        self.snapshot_at(self.clock.now_ms()).await
    }

    /// Current snapshot as of `now_ms`, refetching first if the cache is stale.
    ///
    /// Never fails: a failed fetch keeps the previous services, stamps the
    /// attempt time and carries the error message.
    pub async fn snapshot_at(&self, now_ms: u64) -> StatusSnapshot {
        let mut cache = self.cache.lock().await;

        if !cache.is_stale(now_ms) {
            tracing::trace!("Serving cached snapshot");
            return cache.get();
        }

        tracing::debug!("Snapshot stale, fetching from {}", self.fetcher.endpoint());
        let snapshot = match self.fetcher.fetch().await {
            Ok(records) => {
                let services = classify(&self.registry, &records);
                tracing::debug!(
                    "Classified {} services from {} records",
                    services.len(),
                    records.len()
                );
                StatusSnapshot {
                    services,
                    last_fetched: now_ms,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!("Traefik status refresh failed: {}", e);
                let previous = cache.get();
                StatusSnapshot {
                    services: previous.services,
                    last_fetched: now_ms,
                    error: Some(e.to_string()),
                }
            }
        };

        cache.replace(snapshot.clone());
        snapshot
    }

    /// Make the next query refetch regardless of snapshot age
    pub async fn force_refresh(&self) {
        tracing::debug!("Forced refresh requested");
        self.cache.lock().await.invalidate();
    }
}
