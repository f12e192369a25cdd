//! Single-slot snapshot cache

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::classifier::{ServiceStatus, ServiceView};
use crate::registry::Registry;

/// How long a snapshot is served before the next query refetches
pub const CACHE_TTL: Duration = Duration::from_millis(30_000);

/// Status of every monitored service at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub services: Vec<ServiceView>,
    /// Epoch milliseconds of the last fetch attempt, 0 if none
    pub last_fetched: u64,
    pub error: Option<String>,
}

impl StatusSnapshot {
    /// Every registry entry in `Unknown`, never fetched
    pub fn initial(registry: &Registry) -> Self {
        let services = registry
            .iter()
            .map(|service| ServiceView {
                name: service.display_name.clone(),
                url: service.url.clone(),
                status: ServiceStatus::Unknown,
            })
            .collect();

        Self {
            services,
            last_fetched: 0,
            error: None,
        }
    }
}

/// Holds the current snapshot and decides when it is stale.
///
/// Not synchronized on its own; the refresh controller keeps it behind a
/// mutex and is its only writer.
#[derive(Debug)]
pub struct SnapshotCache {
    snapshot: StatusSnapshot,
    ttl_ms: u64,
}

impl SnapshotCache {
    pub fn new(registry: &Registry) -> Self {
        Self::with_ttl(registry, CACHE_TTL)
    }

    pub fn with_ttl(registry: &Registry, ttl: Duration) -> Self {
        Self {
            snapshot: StatusSnapshot::initial(registry),
            ttl_ms: ttl.as_millis() as u64,
        }
    }

    /// True when never fetched, invalidated, or older than the TTL
    pub fn is_stale(&self, now_ms: u64) -> bool {
        self.snapshot.last_fetched == 0
            || now_ms.saturating_sub(self.snapshot.last_fetched) > self.ttl_ms
    }

    pub fn get(&self) -> StatusSnapshot {
        self.snapshot.clone()
    }

    pub fn replace(&mut self, snapshot: StatusSnapshot) {
        self.snapshot = snapshot;
    }

    /// Force the next staleness check to fail while keeping the services
    /// that are currently displayed
    pub fn invalidate(&mut self) {
        self.snapshot.last_fetched = 0;
    }
}
