//! Mapping raw Traefik service records onto monitored services

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fetcher::RawBackendRecord;
use crate::registry::Registry;

/// Aggregated status of a monitored service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceStatus {
    Up,
    Down,
    Unknown,
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::Up => write!(f, "UP"),
            ServiceStatus::Down => write!(f, "DOWN"),
            ServiceStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One row of a status snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceView {
    pub name: String,
    pub url: String,
    pub status: ServiceStatus,
}

/// Replica state Traefik reports for a healthy server
const REPLICA_UP: &str = "UP";

/// Project the raw records onto the registry, in registry order.
///
/// A monitored service that Traefik does not report at all is `Down`, so a
/// removed backend shows up as an outage instead of disappearing.
pub fn classify(registry: &Registry, records: &[RawBackendRecord]) -> Vec<ServiceView> {
    registry
        .iter()
        .map(|service| {
            let record = records.iter().find(|r| r.name == service.service_key);
            ServiceView {
                name: service.display_name.clone(),
                url: service.url.clone(),
                status: classify_record(record),
            }
        })
        .collect()
}

/// Status of a single matched (or missing) record: up if any replica is up
pub fn classify_record(record: Option<&RawBackendRecord>) -> ServiceStatus {
    let any_up = record
        .and_then(|r| r.server_status.as_ref())
        .map(|replicas| replicas.values().any(|state| state == REPLICA_UP))
        .unwrap_or(false);

    if any_up {
        ServiceStatus::Up
    } else {
        ServiceStatus::Down
    }
}
